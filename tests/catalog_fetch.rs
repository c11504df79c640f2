use offerbot::catalog::{fetch_offerable_names, CatalogConfig, SourceMode};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn config(server: &MockServer, mode: SourceMode) -> CatalogConfig {
    CatalogConfig {
        url: format!("{}/database.json", server.uri()),
        mode,
        family_marker: "Prime".to_string(),
        part_keywords: vec!["Chassis".to_string(), "Neuroptics".to_string()],
    }
}

#[tokio::test]
async fn plain_names_pass_through_unfiltered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/database.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"["Acceltra Prime", "Volt Prime Set"]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let names = fetch_offerable_names(&config(&server, SourceMode::PlainNames))
        .await
        .unwrap();
    assert_eq!(
        names,
        vec!["Acceltra Prime".to_string(), "Volt Prime Set".to_string()]
    );
    server.verify().await;
}

#[tokio::test]
async fn records_are_filtered_on_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/database.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"name": "Volt Prime Set", "tradable": true},
                {"name": "Volt Prime Chassis", "tradable": true},
                {"name": "Ember Prime Set", "tradable": false},
                {"name": "Orokin Catalyst", "tradable": true}
            ]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let names = fetch_offerable_names(&config(&server, SourceMode::Records))
        .await
        .unwrap();
    assert_eq!(names, vec!["Volt Prime Set".to_string()]);
    server.verify().await;
}

#[tokio::test]
async fn missing_source_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/database.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch_offerable_names(&config(&server, SourceMode::PlainNames)).await;
    assert!(result.is_err());
    server.verify().await;
}

#[tokio::test]
async fn malformed_payload_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/database.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let result = fetch_offerable_names(&config(&server, SourceMode::PlainNames)).await;
    assert!(result.is_err());
}
