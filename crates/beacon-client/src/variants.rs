//! GA4GH variants/search adapter
//!
//! Some registered beacons are not Beacon v0.3 services at all but GA4GH
//! variant stores. Existence is answered by searching the configured
//! variant sets for the queried position and scanning the returned
//! variants for a matching alternate allele.

use async_trait::async_trait;
use beacon_core::{
    AdapterConfig, AlleleResponse, BeaconAdapter, BeaconInfo, BeaconResult, QueryTransport,
    VariantQuery,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::rest::{build_http_client, endpoint, handle_response, init_error, transport_error};

const SEARCH_PATH: &str = "/variants/search";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantSearchRequest<'a> {
    variant_set_ids: &'a [String],
    reference_name: &'a str,
    start: i64,
    end: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VariantSearchResponse {
    variants: Vec<VariantRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VariantRecord {
    alternate_bases: Vec<String>,
}

/// Client answering existence queries against a variants/search endpoint.
///
/// The protocol is POST-only, so both query transports go out as POST.
/// Dataset ids map to variant-set ids.
#[derive(Debug, Clone)]
pub struct VariantSearchClient {
    name: String,
    description: Option<String>,
    http: Client,
    search_url: Url,
}

impl VariantSearchClient {
    /// Create a client bound to the given configuration record
    pub fn new(config: &AdapterConfig) -> BeaconResult<Self> {
        let http = build_http_client(&config.name)?;
        let search_url = endpoint(config, SEARCH_PATH).map_err(|e| init_error(&config.name, e))?;

        Ok(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            http,
            search_url,
        })
    }
}

#[async_trait]
impl BeaconAdapter for VariantSearchClient {
    fn beacon_name(&self) -> &str {
        &self.name
    }

    /// The variants/search protocol has no descriptor endpoint; the
    /// descriptor is synthesized from the configuration record.
    async fn describe(&self) -> BeaconResult<BeaconInfo> {
        Ok(BeaconInfo {
            id: self.name.clone(),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            ..Default::default()
        })
    }

    #[instrument(skip(self, query), fields(beacon = %self.name))]
    async fn query_allele(
        &self,
        query: &VariantQuery,
        _transport: QueryTransport,
    ) -> BeaconResult<AlleleResponse> {
        let reference_name = query.reference_name.as_deref().unwrap_or_default();
        let start = query.start.unwrap_or_default();
        let alternate = query.alternate_bases.as_deref().unwrap_or_default();

        let request = VariantSearchRequest {
            variant_set_ids: &query.dataset_ids,
            reference_name,
            start,
            end: start + 1,
        };
        debug!(beacon = %self.name, url = %self.search_url, "Searching variant sets");

        let response = self
            .http
            .post(self.search_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let result: VariantSearchResponse = handle_response(response).await?;

        let exists = result
            .variants
            .iter()
            .any(|variant| variant.alternate_bases.iter().any(|base| base == alternate));

        Ok(AlleleResponse {
            beacon_id: self.name.clone(),
            exists: Some(exists),
            allele_request: Some(query.clone()),
            ..Default::default()
        })
    }
}
