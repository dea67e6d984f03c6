//! Dispatcher integration tests against mock remote beacons

use beacon_core::{AdapterConfig, BeaconError, QueryTransport, VariantQuery};
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

async fn mock_query(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn query_all_isolates_a_failing_beacon() {
    let alpha = MockServer::start().await;
    let beta = MockServer::start().await;

    mock_query(
        &alpha,
        serde_json::json!({"beaconId": "alpha", "exists": true}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&beta)
        .await;

    let beaconizer = Beaconizer::new(vec![
        config("alpha", &alpha.uri()),
        config("beta", &beta.uri()),
    ]);
    let responses = beaconizer
        .query_all(&sample_query(), QueryTransport::Get)
        .await
        .unwrap();

    assert_eq!(responses.len(), 2);

    assert_eq!(responses[0].beacon_id, "alpha");
    assert_eq!(responses[0].exists, Some(true));
    assert!(responses[0].error.is_none());

    assert_eq!(responses[1].beacon_id, "beta");
    assert_eq!(responses[1].exists, None);
    let envelope = responses[1].error.as_ref().unwrap();
    assert_eq!(envelope.error_code, 500);
    assert_eq!(
        responses[1].allele_request.as_ref(),
        Some(&sample_query())
    );
}

#[tokio::test]
async fn query_all_output_matches_registry_order() {
    let mut servers = Vec::new();
    for name in ["one", "two", "three"] {
        let server = MockServer::start().await;
        mock_query(
            &server,
            serde_json::json!({"beaconId": name, "exists": false}),
        )
        .await;
        servers.push((name, server));
    }

    let configs = servers
        .iter()
        .map(|(name, server)| config(name, &server.uri()))
        .collect();
    let beaconizer = Beaconizer::new(configs);

    let responses = beaconizer
        .query_all(&sample_query(), QueryTransport::Get)
        .await
        .unwrap();

    assert_eq!(responses.len(), beaconizer.registry().names().len());
    let order: Vec<&str> = responses.iter().map(|r| r.beacon_id.as_str()).collect();
    assert_eq!(order, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn invalid_query_contacts_no_beacon() {
    let alpha = MockServer::start().await;
    mock_query(
        &alpha,
        serde_json::json!({"beaconId": "alpha", "exists": true}),
    )
    .await;

    let beaconizer = Beaconizer::new(vec![config("alpha", &alpha.uri())]);

    let mut query = sample_query();
    query.dataset_ids.clear();

    match beaconizer
        .query_one("alpha", &query, QueryTransport::Get)
        .await
    {
        Err(BeaconError::InvalidQuery { field, message }) => {
            assert_eq!(field, "datasetIds");
            assert!(message.starts_with("Missing DatasetId"));
        }
        other => panic!("expected InvalidQuery, got {:?}", other),
    }
    assert!(matches!(
        beaconizer.query_all(&query, QueryTransport::Get).await,
        Err(BeaconError::InvalidQuery { .. })
    ));

    assert!(alpha.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_beacon_name_is_not_found() {
    let beaconizer = Beaconizer::new(vec![config("alpha", "https://a.example")]);

    match beaconizer.get_beacon("gamma").await {
        Err(BeaconError::NotFound(name)) => assert_eq!(name, "gamma"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    match beaconizer
        .query_one("gamma", &sample_query(), QueryTransport::Post)
        .await
    {
        Err(err @ BeaconError::NotFound(_)) => assert!(err.to_string().contains("gamma")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn get_beacons_omits_only_the_failing_descriptor() {
    let alpha = MockServer::start().await;
    let beta = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "alpha-beacon"})),
        )
        .mount(&alpha)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&beta)
        .await;

    let beaconizer = Beaconizer::new(vec![
        config("alpha", &alpha.uri()),
        config("beta", &beta.uri()),
    ]);

    let beacons = beaconizer.get_beacons().await;
    assert_eq!(beacons.len(), 1);
    assert_eq!(beacons[0].id, "alpha-beacon");
}

#[tokio::test]
async fn query_one_fills_in_the_beacon_id_when_the_remote_omits_it() {
    let alpha = MockServer::start().await;
    mock_query(&alpha, serde_json::json!({"exists": true})).await;

    let beaconizer = Beaconizer::new(vec![config("alpha", &alpha.uri())]);
    let response = beaconizer
        .query_one("alpha", &sample_query(), QueryTransport::Get)
        .await
        .unwrap();

    assert_eq!(response.beacon_id, "alpha");
    assert_eq!(response.exists, Some(true));
}
