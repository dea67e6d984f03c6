//! BeaconAdapter trait - the seam between the gateway and remote beacons

use async_trait::async_trait;

use crate::error::BeaconResult;
use crate::models::{AlleleResponse, BeaconInfo, VariantQuery};

/// How an allele query is carried to the remote beacon.
///
/// The gateway forwards queries with the same transport they arrived on:
/// GET requests fan out as GETs with query parameters, POST requests as
/// JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTransport {
    Get,
    Post,
}

/// A client bound to exactly one configured remote beacon.
///
/// Implementations translate between the gateway's internal types and one
/// specific remote wire protocol. Instances are owned by the adapter
/// registry and shared as `Arc<dyn BeaconAdapter>`.
#[async_trait]
pub trait BeaconAdapter: Send + Sync + std::fmt::Debug {
    /// Configured name this adapter is registered under
    fn beacon_name(&self) -> &str;

    /// Fetch the remote beacon's descriptor
    async fn describe(&self) -> BeaconResult<BeaconInfo>;

    /// Ask the remote beacon whether the variant exists.
    ///
    /// The query has already passed validation. Adapters whose protocol
    /// supports only one transport may serve both transports with it.
    async fn query_allele(
        &self,
        query: &VariantQuery,
        transport: QueryTransport,
    ) -> BeaconResult<AlleleResponse>;
}
