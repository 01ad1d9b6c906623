// Demo Walkthrough - Drives a Core-Banking Exchange Through the Adapter Layer
// Runs fully offline: vendor requests are built and vendor replies injected
// locally, so every step of the mapping and queue lifecycle is visible

use adapters::types::VendorResponse;
use adapters::{AdapterRegistry, CoreAdapter, Error, MappingEngine, QueueTracker};
use integration_core::{
    AuditRecord, AuthConfig, CaseMode, FieldMapping, IntegrationConfig, IntegrationQueueItem,
    IntegrationStore, MappingDirection, MemoryStore, RetryPolicy, TransformRule, VendorType,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};

#[derive(Debug, Clone)]
pub struct DemoExchange {
    pub queue_id: String,
    pub description: String,
    pub config_id: String,
    pub operation: String,
    pub canonical: Value,
    pub vendor_reply: Value,
}

#[derive(Debug, Clone, Default)]
pub struct DemoState {
    pub completed_count: u64,
    pub fields_outbound: u64,
    pub audit_written: u64,
}

pub struct ConnectDemo {
    store: Arc<MemoryStore>,
    tracker: QueueTracker,
    registry: AdapterRegistry,
    state: Arc<RwLock<DemoState>>,
}

impl ConnectDemo {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self {
            tracker: QueueTracker::new(store.clone()),
            registry: AdapterRegistry::new(),
            store,
            state: Arc::new(RwLock::new(DemoState::default())),
        }
    }

    /// Run the pilot walkthrough scenario
    pub async fn run_pilot_demo(&self) {
        println!("\n🚀 =================================================================");
        println!("🚀 CoreLink Connect - Adapter Layer Demo");
        println!("🚀 Demonstrating: Field Mapping, Vendor Dialects, Queue Lifecycle");
        println!("🚀 =================================================================\n");

        self.seed().await;

        let exchanges = create_pilot_exchanges();
        println!("📊 Scenario: {} exchanges against 2 sandbox cores\n", exchanges.len());

        for (idx, exchange) in exchanges.iter().enumerate() {
            println!("\n💳 Exchange {}/{}: {}", idx + 1, exchanges.len(), exchange.description);
            println!("💳 Operation: {} via {}\n", exchange.operation, exchange.config_id);

            if let Err(e) = self.run_exchange(exchange).await {
                println!("  ❌ Exchange failed: {}", e);
            }

            // Small delay between exchanges for demo effect
            sleep(Duration::from_millis(500)).await;
        }

        self.show_final_summary().await;
    }

    async fn seed(&self) {
        for config in [temenos_config(), mambu_config()] {
            self.store.put_config(config).await;
        }

        let mappings = demo_mappings();
        let rows = mappings.len();
        for mapping in mappings {
            self.store.put_mapping(mapping).await;
        }

        println!("📊 Seeded 2 integration configs and {} mapping rows", rows);
    }

    async fn run_exchange(&self, exchange: &DemoExchange) -> adapters::Result<()> {
        let start = std::time::Instant::now();

        // Step 1: Load config and mappings, resolve the vendor dialect
        let config = self
            .store
            .get_config(&exchange.config_id)
            .await?
            .ok_or_else(|| Error::ConfigNotFound(exchange.config_id.clone()))?;
        let engine = MappingEngine::new(self.store.list_mappings(&exchange.config_id).await?);
        let adapter = self.registry.resolve(config.vendor);
        println!(
            "  ✅ [0ms] Config loaded ({} mapping rows, {} dialect)",
            engine.len(),
            adapter.name()
        );
        sleep(Duration::from_millis(100)).await;

        // Step 2: Accept the exchange onto the integration queue
        self.store
            .put_queue_item(IntegrationQueueItem::pending(
                &exchange.queue_id,
                &exchange.config_id,
                &exchange.operation,
            ))
            .await;
        println!(
            "  ✅ [{}ms] Queue item {} accepted (pending)",
            start.elapsed().as_millis(),
            exchange.queue_id
        );
        sleep(Duration::from_millis(50)).await;

        // Step 3: Dispatch starts
        self.tracker.mark_processing(&exchange.queue_id).await?;
        println!("  ✅ [{}ms] Dispatch started (processing)", start.elapsed().as_millis());
        sleep(Duration::from_millis(50)).await;

        // Step 4: Canonical record → vendor payload → full HTTP request
        let vendor_payload = adapter.transform_outbound(&engine, &exchange.canonical);
        println!(
            "  ✅ [{}ms] Outbound payload: {}",
            start.elapsed().as_millis(),
            vendor_payload
        );
        let request = adapter.build_request(&config, &exchange.operation, &vendor_payload);
        println!(
            "  ✅ [{}ms] Built {} {} ({} headers)",
            start.elapsed().as_millis(),
            request.method,
            request.url,
            request.headers.len()
        );
        sleep(Duration::from_millis(100)).await;

        // Step 5: Inject the vendor reply instead of dialing a live core
        let reply = VendorResponse {
            status: 200,
            body: exchange.vendor_reply.to_string(),
        };
        let parsed = adapter.parse_response(&reply);
        let canonical_result = adapter.transform_inbound(&engine, &parsed);
        println!("  ✅ [{}ms] Vendor replied {} 💰", start.elapsed().as_millis(), reply.status);
        println!(
            "  ✅ [{}ms] Canonical result: {}",
            start.elapsed().as_millis(),
            canonical_result
        );
        sleep(Duration::from_millis(100)).await;

        // Step 6: Close out the queue item and write the audit trail
        let mapped_fields = vendor_payload.as_object().map(|o| o.len() as u64).unwrap_or(0);
        self.tracker
            .mark_completed(&exchange.queue_id, canonical_result)
            .await?;
        self.store
            .insert_audit(AuditRecord::new(
                &exchange.operation,
                &exchange.config_id,
                config.vendor,
                true,
                Some(reply.status),
            ))
            .await?;

        let total = start.elapsed().as_millis();
        println!("  🎉 [{}ms] Exchange COMPLETED ✨\n", total);

        // Update state
        let mut state = self.state.write().await;
        state.completed_count += 1;
        state.fields_outbound += mapped_fields;
        state.audit_written += 1;
        Ok(())
    }

    async fn show_final_summary(&self) {
        let state = self.state.read().await;
        let audits = self.store.audit_log().await;

        println!("\n📈 =================================================================");
        println!("📈 WALKTHROUGH SUMMARY");
        println!("📈 =================================================================\n");

        println!("  ✅ Exchanges completed: {}", state.completed_count);
        println!("  ✅ Outbound fields mapped: {}", state.fields_outbound);
        println!("  ✅ Audit records written: {}", audits.len());
        for record in &audits {
            println!(
                "     • {} via {} ({}) success={} status={}",
                record.operation,
                record.config_id,
                record.vendor,
                record.success,
                record.status_code.unwrap_or(0)
            );
        }
        println!();
        println!("  🎯 Adapter Layer Highlights:");
        println!("     • Four vendor dialects behind one trait");
        println!("     • Bidirectional field mapping with invertible transforms");
        println!("     • Monotonic queue lifecycle with append-only audit");
        println!();

        println!("🎉 Demo Complete! Point a config at a live sandbox to go further.\n");
    }

    pub async fn get_state(&self) -> DemoState {
        self.state.read().await.clone()
    }
}

fn temenos_config() -> IntegrationConfig {
    IntegrationConfig {
        id: "demo-temenos".to_string(),
        name: "Temenos Transact Sandbox".to_string(),
        vendor: VendorType::Temenos,
        base_url: "https://transact.sandbox.corelink.dev".to_string(),
        api_version: "v1".to_string(),
        auth: AuthConfig::Basic {
            username: "demo".to_string(),
            password: "demo-secret".to_string(),
        },
        timeout_ms: 5_000,
        retry: RetryPolicy::default(),
        active: true,
    }
}

fn mambu_config() -> IntegrationConfig {
    IntegrationConfig {
        id: "demo-mambu".to_string(),
        name: "Mambu Tenant Sandbox".to_string(),
        vendor: VendorType::Mambu,
        base_url: "https://tenant.sandbox.mambu.com/api".to_string(),
        api_version: "v2".to_string(),
        auth: AuthConfig::ApiKey {
            key: "demo-key-123".to_string(),
            header: "X-API-Key".to_string(),
        },
        timeout_ms: 5_000,
        retry: RetryPolicy::default(),
        active: true,
    }
}

fn demo_mappings() -> Vec<FieldMapping> {
    vec![
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "amount".to_string(),
            vendor_field: "Amount".to_string(),
            transform: TransformRule::NumericScale { factor: dec!(100) },
            direction: MappingDirection::Bidirectional,
            required: true,
            default_value: Some(json!("0")),
        },
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "currency".to_string(),
            vendor_field: "Ccy".to_string(),
            transform: TransformRule::CaseFold { mode: CaseMode::Upper },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "booking_date".to_string(),
            vendor_field: "BookingDate".to_string(),
            transform: TransformRule::DateFormat {
                format: "%d/%m/%Y".to_string(),
            },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "status".to_string(),
            vendor_field: "Status".to_string(),
            transform: TransformRule::EnumLookup {
                values: HashMap::from([
                    ("active".to_string(), "A".to_string()),
                    ("closed".to_string(), "C".to_string()),
                    ("pending".to_string(), "P".to_string()),
                ]),
            },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "account".to_string(),
            vendor_field: "AccountId".to_string(),
            transform: TransformRule::StringPad {
                length: 10,
                fill: '0',
            },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-temenos".to_string(),
            canonical_field: "reference".to_string(),
            vendor_field: "TxnRef".to_string(),
            transform: TransformRule::None,
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-mambu".to_string(),
            canonical_field: "amount".to_string(),
            vendor_field: "amount".to_string(),
            transform: TransformRule::NumericScale { factor: dec!(100) },
            direction: MappingDirection::Bidirectional,
            required: true,
            default_value: Some(json!("0")),
        },
        FieldMapping {
            config_id: "demo-mambu".to_string(),
            canonical_field: "currency".to_string(),
            vendor_field: "currencyCode".to_string(),
            transform: TransformRule::CaseFold { mode: CaseMode::Upper },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
        FieldMapping {
            config_id: "demo-mambu".to_string(),
            canonical_field: "holder".to_string(),
            vendor_field: "accountHolder".to_string(),
            transform: TransformRule::None,
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        },
    ]
}

fn create_pilot_exchanges() -> Vec<DemoExchange> {
    vec![
        DemoExchange {
            queue_id: "q-demo-001".to_string(),
            description: "Payment posted to Temenos Transact".to_string(),
            config_id: "demo-temenos".to_string(),
            operation: "create_payment".to_string(),
            canonical: json!({
                "amount": 50.5,
                "currency": "usd",
                "booking_date": "2026-03-14",
                "status": "active",
                "account": "12345",
                "reference": "TXN-88123",
            }),
            vendor_reply: json!({
                "body": {
                    "Amount": 5050,
                    "Ccy": "USD",
                    "BookingDate": "14/03/2026",
                    "Status": "A",
                    "AccountId": "0000012345",
                    "TxnRef": "TXN-88123",
                }
            }),
        },
        DemoExchange {
            queue_id: "q-demo-002".to_string(),
            description: "Deposit account opened in Mambu".to_string(),
            config_id: "demo-mambu".to_string(),
            operation: "create_deposit".to_string(),
            canonical: json!({
                "amount": 250,
                "currency": "eur",
                "holder": "ACME GmbH",
            }),
            vendor_reply: json!({
                "data": {
                    "attributes": {
                        "amount": 25000,
                        "currencyCode": "EUR",
                        "accountHolder": "ACME GmbH",
                        "encodedKey": "8a8186f26f45",
                    }
                }
            }),
        },
    ]
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("🏁 Starting CoreLink Connect demo...\n");

    let demo = ConnectDemo::new();
    demo.run_pilot_demo().await;

    println!("✅ Adapter layer walkthrough complete!");
}
