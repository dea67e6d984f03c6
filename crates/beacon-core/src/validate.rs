//! Query validation
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! the error always names the first invalid field. The order is part of the
//! observable contract; callers rely on it for deterministic messages.

use crate::error::{BeaconError, BeaconResult};
use crate::models::VariantQuery;

const ASSEMBLY_PREFIX: &str = "GRCh";

/// Validate an allele query before any network call is made.
pub fn validate_query(query: &VariantQuery) -> BeaconResult<()> {
    if query.reference_name.is_none() {
        return Err(invalid(
            "referenceName",
            "Reference name cannot be null. Please provide an appropriate reference name",
        ));
    }
    if query.start.is_none() {
        return Err(invalid(
            "start",
            "Start position cannot be null. Please provide a 0-based start position",
        ));
    }
    if query.reference_bases.is_none() {
        return Err(invalid("referenceBases", "Reference bases cannot be null"));
    }
    if query.alternate_bases.is_none() {
        return Err(invalid("alternateBases", "Alternate bases cannot be null"));
    }
    match query.assembly_id.as_deref() {
        None => {
            return Err(invalid(
                "assemblyId",
                "AssemblyId cannot be null. Please provide a valid GRCh assembly id",
            ));
        }
        Some(assembly) if !assembly.starts_with(ASSEMBLY_PREFIX) => {
            return Err(invalid(
                "assemblyId",
                "AssemblyId must be a valid GRCh assembly id",
            ));
        }
        Some(_) => {}
    }
    if query.dataset_ids.is_empty() {
        return Err(invalid(
            "datasetIds",
            "Missing DatasetId. At least 1 dataset id must be provided",
        ));
    }
    Ok(())
}

fn invalid(field: &'static str, message: &str) -> BeaconError {
    BeaconError::InvalidQuery {
        field,
        message: message.to_string(),
    }
}
