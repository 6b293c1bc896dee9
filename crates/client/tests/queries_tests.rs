//! Query endpoint tests.
//!
//! Queries are always addressed through their owning report.

mod common;

use common::*;
use mode_client::{NewQuery, QueryFields};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_queries_unwraps_embedded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/reports/a1b2c3d4e5f6/queries"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("queries/list_queries.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let queries = client.queries().list("a1b2c3d4e5f6").await.unwrap();

    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0].token, "q00001");
    assert_eq!(queries[0].id, 501);
    assert_eq!(queries[0].report_imports_count, Some(2));
    assert_eq!(queries[1].data_source_id, Some(7));
    assert_eq!(queries[1].mapping_id.as_deref(), Some("33"));
}

#[tokio::test]
async fn test_get_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/reports/a1b2c3d4e5f6/queries/q00002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "q00002", "id": 502, "name": "Signups", "raw_query": "select count(*) from users"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = client.queries().get("a1b2c3d4e5f6", "q00002").await.unwrap();
    assert_eq!(query.raw_query.as_deref(), Some("select count(*) from users"));
}

#[tokio::test]
async fn test_create_query_wraps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/acme/reports/a1b2c3d4e5f6/queries"))
        .and(body_json(json!({
            "query": {"raw_query": "select 1", "data_source_id": 7, "name": "One"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "q00003", "id": 503, "name": "One", "raw_query": "select 1", "data_source_id": 7
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .queries()
        .create(
            "a1b2c3d4e5f6",
            &NewQuery {
                raw_query: "select 1",
                data_source_id: 7,
                name: "One",
            },
        )
        .await
        .unwrap();
    assert_eq!(created.token, "q00003");
}

#[tokio::test]
async fn test_update_query_omits_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/acme/reports/a1b2c3d4e5f6/queries/q00001"))
        .and(body_json(json!({"query": {"raw_query": "select 2"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "q00001", "id": 501, "raw_query": "select 2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fields = QueryFields {
        raw_query: Some("select 2"),
        ..Default::default()
    };
    let updated = client
        .queries()
        .update("a1b2c3d4e5f6", "q00001", &fields)
        .await
        .unwrap();
    assert_eq!(updated.raw_query.as_deref(), Some("select 2"));
}

#[tokio::test]
async fn test_delete_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/acme/reports/a1b2c3d4e5f6/queries/q00001"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .queries()
        .delete("a1b2c3d4e5f6", "q00001")
        .await
        .unwrap();
}
