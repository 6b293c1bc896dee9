//! Account endpoint tests.

mod common;

use common::*;
use mode_client::DefinitionLimit;
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_get_account_is_not_workspace_scoped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("account/get_account.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let account = client.account().get("acme").await.unwrap();

    assert_eq!(account.id, 4321);
    assert_eq!(account.username, "acme");
    assert!(account.is_organization());
    assert_eq!(account.query_run_size_limit_mb, Some(500));
    assert_eq!(account.space_count, Some(12));
    assert_eq!(
        account.private_definition_limit,
        Some(DefinitionLimit::Unlimited)
    );
    assert_eq!(account.authorized_domains, vec!["acme.example"]);
    assert_eq!(
        account.avatar.and_then(|a| a.initials).as_deref(),
        Some("AA")
    );
}

#[tokio::test]
async fn test_get_other_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jane.doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77, "token": "u77", "username": "jane.doe", "user": true,
            "private_definition_limit": 5
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let account = client.account().get("jane.doe").await.unwrap();
    assert!(!account.is_organization());
    assert_eq!(
        account.private_definition_limit,
        Some(DefinitionLimit::Limited(5))
    );
}
