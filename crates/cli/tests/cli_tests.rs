//! End-to-end tests for mode-cli commands and exit codes.

mod common;

use common::{BASIC_AUTH, mode_cmd};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_spaces_list_prints_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/spaces"))
        .and(query_param("filter", "all"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {"spaces": [
                {"token": "sp0001", "id": 11, "name": "Growth", "space_type": "custom"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args(["spaces", "list", "--all"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"token\": \"sp0001\""));
}

#[tokio::test]
async fn test_runs_create_sends_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/acme/reports/a1b2c3/runs"))
        .and(wiremock::matchers::body_json(
            json!({"parameters": {"limit": 5, "region": "apac"}}),
        ))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "token": "run0009", "state": "enqueued", "python_state": "none"
        })))
        .expect(1)
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args([
            "runs", "create", "a1b2c3", "--param", "limit=5", "--param", "region=apac",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("run0009"));
}

#[tokio::test]
async fn test_batch_queries_opens_and_revokes_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/batch/acme/signature_tokens"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "sigtok001", "access_key": "AKEY123", "access_secret": "ASECRET456"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/batch/acme/queries"))
        .and(query_param("per_page", "50"))
        .and(query_param_is_missing("include_spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"page": 1, "per_page": 50, "count": 1, "total_pages": 1, "total_count": 1},
            "queries": [{"id": 501, "token": "q00001"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/batch/acme/signature_tokens/sigtok001"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args(["batch", "queries", "--per-page", "50"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("q00001"));
}

#[tokio::test]
async fn test_definitions_list_filters_by_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/definitions"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {"definitions": [
                {"token": "def001", "id": 301, "name": "Active users", "source": "SELECT 1"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args([
            "definitions",
            "list",
            "--definition-token",
            "def001",
            "--definition-token",
            "def002",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("def001"));

    let requests = server.received_requests().await.unwrap();
    let tokens: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "tokens")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(tokens, vec!["def001", "def002"]);
}

#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/reports/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args(["reports", "get", "missing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to get report missing"));
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    mode_cmd(&server.uri())
        .args(["account", "get"])
        .assert()
        .code(2);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    mode_cmd("http://127.0.0.1:9")
        .args(["spaces", "list"])
        .assert()
        .code(3)
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("error sending request").count() == 1
        }));
}

#[test]
fn test_missing_workspace_returns_exit_code_5() {
    mode_cmd("http://127.0.0.1:9")
        .env_remove("MODE_WORKSPACE")
        .args(["spaces", "list"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("workspace"));
}

#[test]
fn test_password_is_not_echoed_in_help() {
    mode_cmd("http://127.0.0.1:9")
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("api-password").not());
}
