//! Internal error taxonomy for the beaconizer gateway

use thiserror::Error;

use crate::models::ErrorEnvelope;

/// Result type for gateway operations
pub type BeaconResult<T> = Result<T, BeaconError>;

/// Errors that can occur while validating, dispatching or executing a
/// beacon query.
///
/// HTTP status codes are assigned in [`BeaconError::wire_code`] and nowhere
/// else; lower layers only ever produce and match on these kinds.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// The inbound query failed validation; `field` names the first
    /// offending field in validation order
    #[error("{message}")]
    InvalidQuery {
        /// First invalid field, in validation order
        field: &'static str,
        /// Human-readable message
        message: String,
    },

    /// No beacon is registered under the requested name
    #[error("Could not find beacon with name: {0}")]
    NotFound(String),

    /// The remote beacon answered with a non-success status
    #[error("Remote beacon returned status {status}")]
    Remote {
        /// Status code reported by the remote beacon
        status: u16,
        /// Response body, carried as the error detail
        body: String,
    },

    /// The remote beacon's response body could not be decoded
    #[error("Failed to decode remote beacon response: {0}")]
    Parse(String),

    /// Constructing the adapter for a configured beacon failed
    #[error("Failed to initialize adapter for beacon {name}: {cause}")]
    AdapterInit {
        /// Beacon name the adapter was being built for
        name: String,
        /// Underlying construction failure
        cause: String,
    },

    /// The remote beacon could not be reached at all
    #[error("Transport error: {0}")]
    Transport(String),
}

impl BeaconError {
    /// Returns the wire-level status code for this error.
    ///
    /// This is the single mapping table of the error normalizer. Remote
    /// failures deliberately collapse to 500 regardless of the status the
    /// remote itself reported: an upstream 404 is still a gateway-side
    /// failure to answer the query.
    pub fn wire_code(&self) -> u16 {
        match self {
            BeaconError::InvalidQuery { .. } => 400,
            BeaconError::NotFound(_) => 404,
            BeaconError::Remote { .. } => 500,
            BeaconError::Parse(_) => 500,
            BeaconError::AdapterInit { .. } => 500,
            BeaconError::Transport(_) => 500,
        }
    }

    /// Convert into the wire error envelope attached to responses
    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error_code: self.wire_code(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_follow_taxonomy() {
        let invalid = BeaconError::InvalidQuery {
            field: "referenceName",
            message: "missing".to_string(),
        };
        assert_eq!(invalid.wire_code(), 400);
        assert_eq!(BeaconError::NotFound("gamma".to_string()).wire_code(), 404);
        assert_eq!(
            BeaconError::Remote {
                status: 404,
                body: String::new()
            }
            .wire_code(),
            500
        );
        assert_eq!(BeaconError::Parse("bad json".to_string()).wire_code(), 500);
        assert_eq!(
            BeaconError::AdapterInit {
                name: "alpha".to_string(),
                cause: "bad url".to_string()
            }
            .wire_code(),
            500
        );
        assert_eq!(
            BeaconError::Transport("connection refused".to_string()).wire_code(),
            500
        );
    }

    #[test]
    fn not_found_message_names_the_beacon() {
        let err = BeaconError::NotFound("gamma".to_string());
        assert!(err.to_string().contains("gamma"));
        let envelope = err.to_envelope();
        assert_eq!(envelope.error_code, 404);
        assert!(envelope.message.contains("gamma"));
    }
}
