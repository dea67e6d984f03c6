//! Aggregation dispatcher
//!
//! `Beaconizer` orchestrates single-beacon and all-beacon operations over
//! the adapter registry. Fan-out operations spawn one task per beacon and
//! join them in registry order; a failing beacon only ever affects its own
//! slot in the aggregated result.

use std::sync::Arc;

use beacon_core::{
    validate_query, AdapterConfig, AlleleResponse, BeaconError, BeaconInfo, BeaconResult,
    QueryTransport, VariantQuery,
};
use tracing::{instrument, warn};

use crate::registry::AdapterRegistry;

/// Gateway service federating every registered beacon
pub struct Beaconizer {
    registry: Arc<AdapterRegistry>,
}

impl Beaconizer {
    /// Create the dispatcher over the given configuration set
    pub fn new(configs: Vec<AdapterConfig>) -> Self {
        Self {
            registry: Arc::new(AdapterRegistry::new(configs)),
        }
    }

    /// The underlying adapter registry
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Describe one registered beacon by name
    #[instrument(skip(self))]
    pub async fn get_beacon(&self, name: &str) -> BeaconResult<BeaconInfo> {
        self.registry.get_or_create(name)?.describe().await
    }

    /// Describe every registered beacon.
    ///
    /// Failures are isolated per beacon: a beacon whose descriptor cannot
    /// be fetched is omitted from the list with a warning. Output order
    /// follows the registry.
    #[instrument(skip(self))]
    pub async fn get_beacons(&self) -> Vec<BeaconInfo> {
        let mut handles = Vec::new();
        for name in self.registry.names() {
            let registry = Arc::clone(&self.registry);
            let task_name = name.clone();
            handles.push((
                name,
                tokio::spawn(async move { registry.get_or_create(&task_name)?.describe().await }),
            ));
        }

        let mut beacons = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            match handle.await {
                Ok(Ok(info)) => beacons.push(info),
                Ok(Err(e)) => warn!(beacon = %name, error = %e, "Failed to describe beacon"),
                Err(e) => warn!(beacon = %name, error = %e, "Describe task failed"),
            }
        }
        beacons
    }

    /// Query one named beacon.
    ///
    /// Validation runs before the registry is touched; validation and
    /// registry/client errors all propagate to the caller unisolated.
    #[instrument(skip(self, query))]
    pub async fn query_one(
        &self,
        name: &str,
        query: &VariantQuery,
        transport: QueryTransport,
    ) -> BeaconResult<AlleleResponse> {
        validate_query(query)?;
        let adapter = self.registry.get_or_create(name)?;
        let mut response = adapter.query_allele(query, transport).await?;
        if response.beacon_id.is_empty() {
            response.beacon_id = name.to_string();
        }
        Ok(response)
    }

    /// Query every registered beacon with the same validated query.
    ///
    /// Validation failures surface directly (no beacon is contacted). Any
    /// other failure is captured in that beacon's slot as an unknown
    /// existence with a populated error envelope. The result has one entry
    /// per registered beacon, in registry order, regardless of the order
    /// in which beacons answered.
    #[instrument(skip(self, query))]
    pub async fn query_all(
        &self,
        query: &VariantQuery,
        transport: QueryTransport,
    ) -> BeaconResult<Vec<AlleleResponse>> {
        validate_query(query)?;

        let mut handles = Vec::new();
        for name in self.registry.names() {
            let registry = Arc::clone(&self.registry);
            let task_query = query.clone();
            let task_name = name.clone();
            handles.push((
                name,
                tokio::spawn(async move {
                    let adapter = registry.get_or_create(&task_name)?;
                    let mut response = adapter.query_allele(&task_query, transport).await?;
                    if response.beacon_id.is_empty() {
                        response.beacon_id = task_name;
                    }
                    Ok::<_, BeaconError>(response)
                }),
            ));
        }

        let mut responses = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let response = match handle.await {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => {
                    warn!(beacon = %name, error = %e, "Beacon failed during fan-out");
                    AlleleResponse::error_slot(&name, query, &e)
                }
                Err(e) => {
                    warn!(beacon = %name, error = %e, "Fan-out task failed");
                    let err = BeaconError::Transport(e.to_string());
                    AlleleResponse::error_slot(&name, query, &err)
                }
            };
            responses.push(response);
        }
        Ok(responses)
    }
}
