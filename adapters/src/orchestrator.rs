//! Integration orchestrator
//!
//! Runs one exchange end to end: load the config, build the mapping engine,
//! resolve the vendor adapter, shape and dispatch the request, then map the
//! reply back and settle the queue item and audit trail. Config problems
//! abort before anything is written; once dispatch starts, every outcome
//! lands exactly once in the queue (when tracked) and the audit log.

use crate::error::{Error, Result};
use crate::mapping::MappingEngine;
use crate::metrics::{INTEGRATION_REQUESTS_TOTAL, INTEGRATION_REQUEST_DURATION};
use crate::registry::AdapterRegistry;
use crate::retry::HttpExecutor;
use crate::tracker::QueueTracker;
use integration_core::{AuditRecord, IntegrationRequest, IntegrationResponse, IntegrationStore};
use std::sync::Arc;
use tracing::{error, info};

/// End-to-end pipeline for integration exchanges
pub struct IntegrationOrchestrator {
    store: Arc<dyn IntegrationStore>,
    registry: AdapterRegistry,
    executor: HttpExecutor,
    tracker: QueueTracker,
}

impl IntegrationOrchestrator {
    /// New orchestrator over a record store, with the built-in adapters
    pub fn new(store: Arc<dyn IntegrationStore>) -> Result<Self> {
        Ok(Self {
            tracker: QueueTracker::new(store.clone()),
            registry: AdapterRegistry::new(),
            executor: HttpExecutor::new()?,
            store,
        })
    }

    /// Swap in a registry with custom vendor adapters
    pub fn with_registry(mut self, registry: AdapterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run one integration exchange end to end
    pub async fn execute(&self, request: IntegrationRequest) -> Result<IntegrationResponse> {
        // Config problems abort before the queue or audit log are touched
        let config = self
            .store
            .get_config(&request.config_id)
            .await?
            .filter(|c| c.active)
            .ok_or_else(|| Error::ConfigNotFound(request.config_id.clone()))?;

        let mappings = self.store.list_mappings(&config.id).await?;
        let engine = MappingEngine::new(mappings);
        let adapter = self.registry.resolve(config.vendor);

        let vendor_payload = adapter.transform_outbound(&engine, &request.payload);
        let vendor_request = adapter.build_request(&config, &request.operation, &vendor_payload);

        info!(
            "Dispatching {} to {} ({}) as {} {}",
            request.operation,
            config.name,
            adapter.name(),
            vendor_request.method,
            vendor_request.url
        );

        // A tracked item must still be movable to processing; a resumed
        // exchange that already finished is refused here, before dispatch
        if let Some(queue_id) = &request.queue_id {
            self.tracker.mark_processing(queue_id).await?;
        }

        let start = std::time::Instant::now();
        let outcome = self
            .executor
            .execute(
                &vendor_request,
                &request.operation,
                config.timeout(),
                &config.retry,
            )
            .await;
        INTEGRATION_REQUEST_DURATION
            .with_label_values(&[&config.id, &config.vendor.to_string()])
            .observe(start.elapsed().as_secs_f64());

        match outcome {
            Ok(response) => {
                let raw = adapter.parse_response(&response);
                let success = response.is_success();
                let data = adapter.transform_inbound(&engine, &raw);
                let error_text = if success {
                    None
                } else {
                    Some(
                        Error::VendorApi {
                            status_code: response.status,
                            message: response.body.clone(),
                        }
                        .to_string(),
                    )
                };

                if let Some(queue_id) = &request.queue_id {
                    match &error_text {
                        None => self.tracker.mark_completed(queue_id, data.clone()).await?,
                        Some(detail) => self.tracker.mark_failed(queue_id, detail.clone()).await?,
                    }
                }
                self.store
                    .insert_audit(AuditRecord::new(
                        &request.operation,
                        &config.id,
                        config.vendor,
                        success,
                        Some(response.status),
                    ))
                    .await?;
                INTEGRATION_REQUESTS_TOTAL
                    .with_label_values(&[
                        &config.id,
                        &config.vendor.to_string(),
                        if success { "success" } else { "failure" },
                    ])
                    .inc();

                Ok(IntegrationResponse {
                    success,
                    data,
                    raw_response: raw,
                    status_code: Some(response.status),
                    error: error_text,
                })
            }
            Err(err) => {
                error!(
                    "Exchange {} against {} failed: {}",
                    request.operation, config.id, err
                );
                // Settle the queue and audit trail without masking the
                // transport error the caller needs to see
                if let Some(queue_id) = &request.queue_id {
                    if let Err(track_err) =
                        self.tracker.mark_failed(queue_id, err.to_string()).await
                    {
                        error!("Failed to mark queue item {} failed: {}", queue_id, track_err);
                    }
                }
                if let Err(audit_err) = self
                    .store
                    .insert_audit(AuditRecord::new(
                        &request.operation,
                        &config.id,
                        config.vendor,
                        false,
                        None,
                    ))
                    .await
                {
                    error!("Failed to record audit for {}: {}", request.operation, audit_err);
                }
                INTEGRATION_REQUESTS_TOTAL
                    .with_label_values(&[&config.id, &config.vendor.to_string(), "failure"])
                    .inc();
                Err(err)
            }
        }
    }
}
