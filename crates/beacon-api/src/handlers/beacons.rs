//! Beacon descriptor endpoints

use axum::extract::{Path, State};
use axum::Json;
use beacon_core::BeaconInfo;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /` - describe every registered beacon.
///
/// Beacons whose descriptor cannot be fetched are omitted; the endpoint
/// itself only fails if the gateway does.
pub async fn list_beacons(State(state): State<AppState>) -> Json<Vec<BeaconInfo>> {
    Json(state.beaconizer.get_beacons().await)
}

/// `GET /{name}` - describe one registered beacon
pub async fn get_beacon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BeaconInfo>, ApiError> {
    Ok(Json(state.beaconizer.get_beacon(&name).await?))
}
