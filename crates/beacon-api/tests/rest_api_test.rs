//! End-to-end tests: REST surface over mock remote beacons

use axum_test::TestServer;
use beacon_api::{create_router, AppState};
use beacon_core::{
    AdapterConfig, AlleleResponse, BeaconInfo, ErrorEnvelope, VariantQuery,
};
use beacon_gateway::Beaconizer;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(name: &str, url: &str) -> AdapterConfig {
    AdapterConfig {
        name: name.to_string(),
        url: url.to_string(),
        description: None,
        key: None,
        variant: Default::default(),
    }
}

fn test_server(configs: Vec<AdapterConfig>) -> TestServer {
    let state = AppState::new(Beaconizer::new(configs));
    TestServer::new(create_router(state)).unwrap()
}

fn sample_query() -> VariantQuery {
    VariantQuery {
        reference_name: Some("1".to_string()),
        start: Some(10177),
        reference_bases: Some("A".to_string()),
        alternate_bases: Some("AC".to_string()),
        assembly_id: Some("GRCh37".to_string()),
        dataset_ids: vec!["ds1".to_string()],
        include_dataset_responses: Some(false),
    }
}

const QUERY_STRING: &str = "referenceName=1&start=10177&referenceBases=A&alternateBases=AC\
                            &assemblyId=GRCh37&datasetIds=ds1&includeDatasetResponses=false";

#[tokio::test]
async fn listing_beacons_returns_every_descriptor() {
    let alpha = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "alpha-beacon", "apiVersion": "0.3.0"})),
        )
        .mount(&alpha)
        .await;

    let server = test_server(vec![config("alpha", &alpha.uri())]);
    let response = server.get("/").await;
    response.assert_status_ok();

    let beacons: Vec<BeaconInfo> = response.json();
    assert_eq!(beacons.len(), 1);
    assert_eq!(beacons[0].id, "alpha-beacon");
}

#[tokio::test]
async fn fan_out_query_reports_per_beacon_results() {
    let alpha = MockServer::start().await;
    let beta = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"beaconId": "alpha", "exists": true})),
        )
        .mount(&alpha)
        .await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&beta)
        .await;

    let server = test_server(vec![
        config("alpha", &alpha.uri()),
        config("beta", &beta.uri()),
    ]);

    let response = server.get(&format!("/query?{QUERY_STRING}")).await;
    response.assert_status_ok();

    let responses: Vec<AlleleResponse> = response.json();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].beacon_id, "alpha");
    assert_eq!(responses[0].exists, Some(true));
    assert_eq!(responses[1].beacon_id, "beta");
    assert_eq!(responses[1].exists, None);
    assert_eq!(responses[1].error.as_ref().unwrap().error_code, 500);
}

#[tokio::test]
async fn post_query_reaches_one_named_beacon() {
    let alpha = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"beaconId": "alpha", "exists": false})),
        )
        .expect(1)
        .mount(&alpha)
        .await;

    let server = test_server(vec![config("alpha", &alpha.uri())]);
    let response = server.post("/alpha/query").json(&sample_query()).await;
    response.assert_status_ok();

    let body: AlleleResponse = response.json();
    assert_eq!(body.beacon_id, "alpha");
    assert_eq!(body.exists, Some(false));
}

#[tokio::test]
async fn invalid_query_maps_to_400_with_echo() {
    let alpha = MockServer::start().await;
    let server = test_server(vec![config("alpha", &alpha.uri())]);

    // datasetIds missing entirely.
    let response = server
        .get("/alpha/query?referenceName=1&start=10177&referenceBases=A&alternateBases=AC&assemblyId=GRCh37")
        .expect_failure()
        .await;
    assert_eq!(response.status_code().as_u16(), 400);

    let body: AlleleResponse = response.json();
    assert_eq!(body.beacon_id, "alpha");
    assert_eq!(body.exists, None);
    let envelope = body.error.unwrap();
    assert_eq!(envelope.error_code, 400);
    assert!(envelope.message.starts_with("Missing DatasetId"));
    // The offending query is echoed back.
    let echo = body.allele_request.unwrap();
    assert_eq!(echo.reference_name.as_deref(), Some("1"));
    assert!(echo.dataset_ids.is_empty());

    // Validation failed, so the beacon was never contacted.
    assert!(alpha.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_beacon_maps_to_404_naming_it() {
    let server = test_server(vec![config("alpha", "https://a.example")]);

    let response = server.get("/gamma").expect_failure().await;
    assert_eq!(response.status_code().as_u16(), 404);

    let envelope: ErrorEnvelope = response.json();
    assert_eq!(envelope.error_code, 404);
    assert!(envelope.message.contains("gamma"));
}

#[tokio::test]
async fn unsupported_methods_are_rejected() {
    let server = test_server(vec![config("alpha", "https://a.example")]);

    for response in [
        server.put("/").expect_failure().await,
        server.delete("/").expect_failure().await,
        server.put("/query").expect_failure().await,
        server.delete("/query").expect_failure().await,
        server.delete("/alpha/query").expect_failure().await,
    ] {
        assert_ne!(response.status_code().as_u16(), 200);
    }
}

#[tokio::test]
async fn remote_failure_on_single_query_maps_to_500() {
    let alpha = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such dataset"))
        .mount(&alpha)
        .await;

    let server = test_server(vec![config("alpha", &alpha.uri())]);
    let response = server
        .get(&format!("/alpha/query?{QUERY_STRING}"))
        .expect_failure()
        .await;

    // Upstream status is not forwarded; any remote failure is a 500 here.
    assert_eq!(response.status_code().as_u16(), 500);
    let body: AlleleResponse = response.json();
    assert_eq!(body.exists, None);
    assert_eq!(body.error.unwrap().error_code, 500);
}
