//! Shared application state for the REST layer

use std::sync::Arc;

use beacon_gateway::Beaconizer;

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub beaconizer: Arc<Beaconizer>,
}

impl AppState {
    /// Wrap the dispatcher for sharing across handlers
    pub fn new(beaconizer: Beaconizer) -> Self {
        Self {
            beaconizer: Arc::new(beaconizer),
        }
    }
}
