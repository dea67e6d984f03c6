//! beacon-core - Core traits and types for the beaconizer gateway
//!
//! This crate provides the abstractions shared by every layer: the GA4GH
//! v0.3 wire types, the internal error taxonomy, the query validator, the
//! adapter configuration records and the `BeaconAdapter` trait that remote
//! beacon clients implement.

pub mod adapter;
pub mod config;
pub mod error;
pub mod models;
pub mod validate;

pub use adapter::{BeaconAdapter, QueryTransport};
pub use config::{AdapterConfig, AdapterVariant, ConfigError};
pub use error::{BeaconError, BeaconResult};
pub use models::{
    AlleleResponse, BeaconInfo, Dataset, DatasetAlleleResponse, ErrorEnvelope, Organization,
    VariantQuery,
};
pub use validate::validate_query;
