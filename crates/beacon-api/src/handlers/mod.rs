//! Request handlers for the gateway endpoints

pub mod beacons;
pub mod query;
