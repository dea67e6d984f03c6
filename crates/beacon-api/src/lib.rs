//! beacon-api - REST surface of the beaconizer gateway
//!
//! Binds the GA4GH beacon aggregation endpoints to the dispatcher. All
//! error-to-wire mapping happens in this crate, at the boundary; the
//! layers below only produce typed [`beacon_core::BeaconError`] values.
//!
//! # Usage
//!
//! ```ignore
//! use beacon_api::{create_router, AppState};
//! use beacon_gateway::Beaconizer;
//!
//! let configs = AdapterConfig::load_from_str(&json)?;
//! let state = AppState::new(Beaconizer::new(configs));
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the gateway router with the given application state.
///
/// Unsupported methods on any route are answered with 405 by axum's
/// method routing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Describe every registered beacon
        .route("/", get(handlers::beacons::list_beacons))
        // Fan-out allele query
        .route(
            "/query",
            get(handlers::query::query_all_get).post(handlers::query::query_all_post),
        )
        // Describe one beacon
        .route("/{name}", get(handlers::beacons::get_beacon))
        // Single-beacon allele query
        .route(
            "/{name}/query",
            get(handlers::query::query_one_get).post(handlers::query::query_one_post),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
