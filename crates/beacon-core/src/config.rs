//! Adapter configuration records
//!
//! The beacon list is loaded once at startup from a JSON array and is
//! immutable afterwards. Record order is preserved: it is the registry
//! order and therefore the order of every aggregated result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which remote protocol an adapter speaks.
///
/// A closed set: unknown tags are rejected while the configuration is
/// parsed, not at first use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdapterVariant {
    /// GA4GH Beacon v0.3 REST protocol (descriptor at `/`, queries at `/query`)
    #[default]
    #[serde(rename = "beacon")]
    Beacon,
    /// GA4GH variants/search protocol (existence via `POST /variants/search`)
    #[serde(rename = "variant-search")]
    VariantSearch,
}

/// Immutable per-beacon configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Unique beacon name, the registry key
    pub name: String,
    /// Base URL of the remote beacon; scheme defaults to `http://`
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional API key, appended as a `key` query parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub variant: AdapterVariant,
}

/// Errors produced while loading the beacon list
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse beacon configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No beacons defined in configuration")]
    Empty,

    #[error("Beacon record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

impl AdapterConfig {
    /// Parse the beacon list from its JSON text.
    ///
    /// Fails when the list is empty, a record has an empty `name` or
    /// `url`, or a variant tag is unknown.
    pub fn load_from_str(json: &str) -> Result<Vec<AdapterConfig>, ConfigError> {
        let configs: Vec<AdapterConfig> = serde_json::from_str(json)?;

        if configs.is_empty() {
            return Err(ConfigError::Empty);
        }
        for (index, config) in configs.iter().enumerate() {
            if config.name.is_empty() {
                return Err(ConfigError::EmptyField {
                    index,
                    field: "name",
                });
            }
            if config.url.is_empty() {
                return Err(ConfigError::EmptyField { index, field: "url" });
            }
        }

        Ok(configs)
    }
}
