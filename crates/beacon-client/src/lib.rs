//! beacon-client - HTTP adapters for remote beacon services
//!
//! One adapter type per supported remote protocol:
//!
//! - [`RestBeaconClient`] speaks the GA4GH Beacon v0.3 REST protocol
//!   (descriptor at `{base}/`, allele queries at `{base}/query`).
//! - [`VariantSearchClient`] answers existence queries against a GA4GH
//!   variants/search endpoint (`POST {base}/variants/search`).
//!
//! Both are constructed from an [`beacon_core::AdapterConfig`] record and
//! implement [`beacon_core::BeaconAdapter`].

mod rest;
mod variants;

pub use rest::RestBeaconClient;
pub use variants::VariantSearchClient;
