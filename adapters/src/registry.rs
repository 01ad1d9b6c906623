//! Adapter registry

use crate::connector::CoreAdapter;
use crate::finacle::FinacleAdapter;
use crate::flexcube::FlexcubeAdapter;
use crate::mambu::MambuAdapter;
use crate::temenos::TemenosAdapter;
use integration_core::VendorType;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of vendor adapters, keyed by protocol family
pub struct AdapterRegistry {
    adapters: HashMap<VendorType, Arc<dyn CoreAdapter>>,
    baseline: Arc<dyn CoreAdapter>,
}

impl AdapterRegistry {
    /// Registry seeded with the built-in adapters
    pub fn new() -> Self {
        let baseline: Arc<dyn CoreAdapter> = Arc::new(TemenosAdapter);
        let mut adapters: HashMap<VendorType, Arc<dyn CoreAdapter>> = HashMap::new();
        adapters.insert(VendorType::Temenos, baseline.clone());
        adapters.insert(VendorType::Mambu, Arc::new(MambuAdapter));
        adapters.insert(VendorType::Finacle, Arc::new(FinacleAdapter));
        adapters.insert(VendorType::Flexcube, Arc::new(FlexcubeAdapter));
        Self { adapters, baseline }
    }

    /// Register or replace the adapter for a vendor family
    pub fn register(&mut self, adapter: Arc<dyn CoreAdapter>) {
        self.adapters.insert(adapter.vendor_type(), adapter);
    }

    /// Adapter for a vendor, falling back to the baseline dialect
    pub fn resolve(&self, vendor: VendorType) -> Arc<dyn CoreAdapter> {
        match self.adapters.get(&vendor) {
            Some(adapter) => adapter.clone(),
            None => {
                debug!("No adapter registered for {}, using baseline", vendor);
                self.baseline.clone()
            }
        }
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
