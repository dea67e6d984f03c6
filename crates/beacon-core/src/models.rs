//! GA4GH Beacon v0.3 wire types
//!
//! Field names follow the protocol's camelCase JSON. Response types are
//! deliberately tolerant on deserialization (`#[serde(default)]`) since
//! remote beacons vary in how much of the descriptor they fill in.

use serde::{Deserialize, Serialize};

use crate::error::BeaconError;

/// An allele existence query (BeaconAlleleRequest on the wire).
///
/// Fields are optional because the query arrives unvalidated from GET
/// parameters or a JSON body; [`crate::validate::validate_query`] enforces
/// presence before any network call. The same value is echoed back verbatim
/// in [`AlleleResponse::allele_request`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuery {
    /// Reference (chromosome) name, e.g. "1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// 0-based start position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Bases on the reference at the start position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_bases: Option<String>,
    /// Alternate bases whose existence is being asked about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_bases: Option<String>,
    /// Genome assembly, must be a GRCh build (e.g. "GRCh37")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    /// Datasets to query; at least one is required
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,
    /// Whether the response should break down existence per dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_dataset_responses: Option<bool>,
}

/// Wire-level error envelope (BeaconError on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Wire status code
    pub error_code: u16,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

/// Per-dataset breakdown of an existence query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetAlleleResponse {
    pub dataset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Answer to an allele query (BeaconAlleleResponse on the wire).
///
/// `exists` is tri-state: `Some(true)`/`Some(false)` are definite answers,
/// `None` (absent on the wire) means unknown. Invariant: `exists` is `None`
/// exactly when `error` is populated; [`AlleleResponse::error_slot`] is the
/// constructor for every failure path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlleleResponse {
    /// Identifier of the beacon that produced this answer
    #[serde(default)]
    pub beacon_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    /// Echo of the query this response answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allele_request: Option<VariantQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_allele_responses: Option<Vec<DatasetAlleleResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
}

impl AlleleResponse {
    /// Build the response slot for a beacon that failed to answer:
    /// unknown existence, echoed query, populated error envelope.
    pub fn error_slot(beacon_id: &str, query: &VariantQuery, err: &BeaconError) -> Self {
        AlleleResponse {
            beacon_id: beacon_id.to_string(),
            exists: None,
            allele_request: Some(query.clone()),
            dataset_allele_responses: None,
            error: Some(err.to_envelope()),
        }
    }
}

/// Organization operating a beacon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A named partition of variant data within a beacon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Descriptor returned by a remote beacon (Beacon on the wire)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_allele_requests: Vec<VariantQuery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<Dataset>,
}
