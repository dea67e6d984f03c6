//! beacon-gateway - Adapter registry and aggregation dispatcher
//!
//! The registry owns one lazily-created adapter per configured beacon and
//! caches it for the life of the process. The dispatcher ([`Beaconizer`])
//! orchestrates single-beacon and fan-out queries on top of it, isolating
//! per-beacon failures during fan-out.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::Beaconizer;
pub use registry::AdapterRegistry;
