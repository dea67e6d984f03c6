//! Adapter registry - lazy per-beacon adapter cache
//!
//! Adapters are created on first use and reused for the process lifetime.
//! The configuration set is fixed at startup; only the adapter cache is
//! mutable, behind a lock with create-if-absent semantics.

use std::collections::HashMap;
use std::sync::Arc;

use beacon_client::{RestBeaconClient, VariantSearchClient};
use beacon_core::{AdapterConfig, AdapterVariant, BeaconAdapter, BeaconError, BeaconResult};
use parking_lot::RwLock;
use tracing::info;

/// Factory table mapping a variant tag to its adapter constructor.
///
/// The variant set is closed at compile time; unknown tags were already
/// rejected when the configuration was parsed.
fn build_adapter(config: &AdapterConfig) -> BeaconResult<Arc<dyn BeaconAdapter>> {
    info!(beacon = %config.name, variant = ?config.variant, "Creating beacon adapter");
    match config.variant {
        AdapterVariant::Beacon => Ok(Arc::new(RestBeaconClient::new(config)?)),
        AdapterVariant::VariantSearch => Ok(Arc::new(VariantSearchClient::new(config)?)),
    }
}

/// Registry of beacon adapters, keyed by configured beacon name
pub struct AdapterRegistry {
    /// Configured beacons, in configuration order
    configs: Vec<AdapterConfig>,
    /// Lazily-created adapters
    adapters: RwLock<HashMap<String, Arc<dyn BeaconAdapter>>>,
}

impl AdapterRegistry {
    /// Create a registry over the given configuration set
    pub fn new(configs: Vec<AdapterConfig>) -> Self {
        Self {
            configs,
            adapters: RwLock::new(HashMap::new()),
        }
    }

    /// Configured beacon names, in configuration order.
    ///
    /// This order governs the ordering of every aggregated result.
    pub fn names(&self) -> Vec<String> {
        self.configs.iter().map(|c| c.name.clone()).collect()
    }

    /// Return the cached adapter for `name`, creating it on first use.
    ///
    /// Construction failures are returned without being cached: the next
    /// call for the same name retries construction. Concurrent first-time
    /// callers may both construct an adapter, but `entry().or_insert`
    /// under the write lock makes exactly one instance canonical and every
    /// caller converges on it.
    pub fn get_or_create(&self, name: &str) -> BeaconResult<Arc<dyn BeaconAdapter>> {
        if let Some(adapter) = self.adapters.read().get(name) {
            return Ok(Arc::clone(adapter));
        }

        let config = self
            .configs
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| BeaconError::NotFound(name.to_string()))?;
        let adapter = build_adapter(config)?;

        let mut adapters = self.adapters.write();
        Ok(Arc::clone(adapters.entry(name.to_string()).or_insert(adapter)))
    }
}
