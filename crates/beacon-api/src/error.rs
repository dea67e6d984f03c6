//! Error normalization to the wire envelope
//!
//! The single place where internal error kinds become HTTP responses.
//! Info endpoints answer with the bare envelope; allele-query endpoints
//! answer with an `AlleleResponse` that echoes the query, leaves `exists`
//! unknown and carries the envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use beacon_core::{AlleleResponse, BeaconError, VariantQuery};

/// Error wrapper turning a [`BeaconError`] into a wire response
#[derive(Debug)]
pub struct ApiError(pub BeaconError);

impl From<BeaconError> for ApiError {
    fn from(err: BeaconError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        log_error(&self.0, status);
        (status, Json(self.0.to_envelope())).into_response()
    }
}

/// Response for a failed allele query: mapped status, echoed query,
/// unknown existence, populated envelope.
pub(crate) fn allele_error_response(
    beacon_id: &str,
    query: &VariantQuery,
    err: &BeaconError,
) -> Response {
    let status = status_of(err);
    log_error(err, status);
    let body = AlleleResponse::error_slot(beacon_id, query, err);
    (status, Json(body)).into_response()
}

fn status_of(err: &BeaconError) -> StatusCode {
    StatusCode::from_u16(err.wire_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_error(err: &BeaconError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(error = %err, status = status.as_u16(), "Gateway error");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Client error");
    }
}
