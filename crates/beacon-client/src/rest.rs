//! GA4GH Beacon v0.3 REST adapter

use std::time::Duration;

use async_trait::async_trait;
use beacon_core::{
    AdapterConfig, AlleleResponse, BeaconAdapter, BeaconError, BeaconInfo, BeaconResult,
    QueryTransport, VariantQuery,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

/// Default request timeout
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const BEACON_PATH: &str = "/";
const QUERY_PATH: &str = "/query";

/// Normalize a configured base URL: default the scheme to `http://` and
/// strip exactly one trailing `/` so a fixed sub-path can be appended.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    match with_scheme.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => with_scheme,
    }
}

/// Build the endpoint URL for one fixed sub-path, appending the API key
/// query parameter when one is configured.
pub(crate) fn endpoint(config: &AdapterConfig, path: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}{}", normalize_base_url(&config.url), path))?;
    if let Some(key) = &config.key {
        url.query_pairs_mut().append_pair("key", key);
    }
    Ok(url)
}

pub(crate) fn init_error(name: &str, cause: impl ToString) -> BeaconError {
    BeaconError::AdapterInit {
        name: name.to_string(),
        cause: cause.to_string(),
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> BeaconError {
    BeaconError::Transport(err.to_string())
}

/// Build the shared HTTP client with per-call timeouts. A hung beacon is
/// cut off by the request timeout instead of blocking its caller.
pub(crate) fn build_http_client(name: &str) -> BeaconResult<Client> {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()
        .map_err(|e| init_error(name, e))
}

/// Decode a remote beacon response: any status >= 300 is an error carrying
/// the body as detail, anything else must decode as `T`.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> BeaconResult<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;

    if status >= 300 {
        return Err(BeaconError::Remote { status, body });
    }
    serde_json::from_str(&body).map_err(|e| BeaconError::Parse(e.to_string()))
}

/// Client for one remote beacon speaking the v0.3 REST protocol
#[derive(Debug, Clone)]
pub struct RestBeaconClient {
    name: String,
    http: Client,
    root_url: Url,
    query_url: Url,
}

impl RestBeaconClient {
    /// Create a client bound to the given configuration record
    pub fn new(config: &AdapterConfig) -> BeaconResult<Self> {
        let http = build_http_client(&config.name)?;
        let root_url = endpoint(config, BEACON_PATH).map_err(|e| init_error(&config.name, e))?;
        let query_url = endpoint(config, QUERY_PATH).map_err(|e| init_error(&config.name, e))?;

        Ok(Self {
            name: config.name.clone(),
            http,
            root_url,
            query_url,
        })
    }

    async fn query_via_get(&self, query: &VariantQuery) -> BeaconResult<AlleleResponse> {
        let mut url = self.query_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(v) = &query.reference_name {
                pairs.append_pair("referenceName", v);
            }
            if let Some(v) = query.start {
                pairs.append_pair("start", &v.to_string());
            }
            if let Some(v) = &query.reference_bases {
                pairs.append_pair("referenceBases", v);
            }
            if let Some(v) = &query.alternate_bases {
                pairs.append_pair("alternateBases", v);
            }
            if let Some(v) = &query.assembly_id {
                pairs.append_pair("assemblyId", v);
            }
            for dataset in &query.dataset_ids {
                pairs.append_pair("datasetIds", dataset);
            }
            if let Some(v) = query.include_dataset_responses {
                pairs.append_pair("includeDatasetResponses", if v { "true" } else { "false" });
            }
        }
        debug!(beacon = %self.name, %url, "Querying beacon via GET");

        let response = self.http.get(url).send().await.map_err(transport_error)?;
        handle_response(response).await
    }

    async fn query_via_post(&self, query: &VariantQuery) -> BeaconResult<AlleleResponse> {
        debug!(beacon = %self.name, url = %self.query_url, "Querying beacon via POST");

        let response = self
            .http
            .post(self.query_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(query)
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(response).await
    }
}

#[async_trait]
impl BeaconAdapter for RestBeaconClient {
    fn beacon_name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(beacon = %self.name))]
    async fn describe(&self) -> BeaconResult<BeaconInfo> {
        let response = self
            .http
            .get(self.root_url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(response).await
    }

    #[instrument(skip(self, query), fields(beacon = %self.name))]
    async fn query_allele(
        &self,
        query: &VariantQuery,
        transport: QueryTransport,
    ) -> BeaconResult<AlleleResponse> {
        match transport {
            QueryTransport::Get => self.query_via_get(query).await,
            QueryTransport::Post => self.query_via_post(query).await,
        }
    }
}
