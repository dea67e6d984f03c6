//! Allele query endpoints
//!
//! GET queries fan out to the remote beacons as GETs, POST queries as
//! JSON bodies. The multi-value `datasetIds` parameter needs
//! `axum_extra`'s `Query` extractor; plain `axum::extract::Query` cannot
//! collect repeated keys into a `Vec`.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::Query;
use beacon_core::{QueryTransport, VariantQuery};

use crate::error::allele_error_response;
use crate::state::AppState;

/// `GET /query` - query every registered beacon
pub async fn query_all_get(
    State(state): State<AppState>,
    Query(query): Query<VariantQuery>,
) -> Response {
    query_all(state, query, QueryTransport::Get).await
}

/// `POST /query` - query every registered beacon
pub async fn query_all_post(
    State(state): State<AppState>,
    Json(query): Json<VariantQuery>,
) -> Response {
    query_all(state, query, QueryTransport::Post).await
}

/// `GET /{name}/query` - query one named beacon
pub async fn query_one_get(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<VariantQuery>,
) -> Response {
    query_one(state, name, query, QueryTransport::Get).await
}

/// `POST /{name}/query` - query one named beacon
pub async fn query_one_post(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(query): Json<VariantQuery>,
) -> Response {
    query_one(state, name, query, QueryTransport::Post).await
}

async fn query_all(state: AppState, query: VariantQuery, transport: QueryTransport) -> Response {
    match state.beaconizer.query_all(&query, transport).await {
        Ok(responses) => Json(responses).into_response(),
        Err(err) => allele_error_response("", &query, &err),
    }
}

async fn query_one(
    state: AppState,
    name: String,
    query: VariantQuery,
    transport: QueryTransport,
) -> Response {
    match state.beaconizer.query_one(&name, &query, transport).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => allele_error_response(&name, &query, &err),
    }
}
