//! HTTP-level tests for the API client against a local mock server.
//!
//! Every test starts its own server and passes its URL as the client's base
//! URL, so tests can run in parallel.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use stacksmith::client::models::{
    ComponentRef, EmailNotifications, HookParams, StackDefinition, StackParams,
};
use stacksmith::client::{PaginationParams, RangeParams, StacksmithClient};
use stacksmith::error::{ApiError, Error};

const API_KEY: &str = "my_api_key";

const LIST_STACKS: &str = include_str!("fixtures/list_stacks.json");
const STACK: &str = include_str!("fixtures/stack.json");
const STACK_RESPONSE: &str = include_str!("fixtures/stack_response.json");
const NOT_FOUND: &str = include_str!("fixtures/not_found.json");
const LIST_COMPONENTS: &str = include_str!("fixtures/list_components.json");
const CHANGELOG: &str = include_str!("fixtures/changelog.json");
const HOOK_TEST: &str = include_str!("fixtures/hook_test.json");

async fn setup() -> (ServerGuard, StacksmithClient) {
    let server = Server::new_async().await;
    let client = StacksmithClient::with_host(API_KEY, Some(&server.url())).unwrap();
    (server, client)
}

fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn list_stacks_sends_pagination_and_api_key() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/stacks/")
        .match_query(Matcher::Exact(format!(
            "page=1&per_page=100&api_key={}",
            API_KEY
        )))
        .with_header("content-type", "application/json")
        .with_body(LIST_STACKS)
        .create_async()
        .await;

    let response = client
        .stacks()
        .list(&PaginationParams::new().page(1).per_page(100))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.data.total_entries, 2);
    assert_eq!(response.data.items.len(), 2);
    assert_eq!(response.data.items[1].components[1].id, "mysql");
}

#[tokio::test]
async fn zero_pagination_is_omitted() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/stacks/")
        .match_query(Matcher::Exact(format!("api_key={}", API_KEY)))
        .with_body(r#"{"items":[]}"#)
        .create_async()
        .await;

    let page = client
        .stacks()
        .list(&PaginationParams::new())
        .await
        .unwrap()
        .into_inner();

    mock.assert_async().await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn get_stack_decodes_nested_fields() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/stacks/stack1")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(STACK)
        .create_async()
        .await;

    let stack = client.stacks().get("stack1").await.unwrap().into_inner();

    mock.assert_async().await;
    assert_eq!(stack.name, "my-node-app");
    assert_eq!(stack.components[0].latest.version, "6.10.1");
    assert!(stack.vulnerabilities[0].vulnerable);
    assert!(stack.output.dockerfile.starts_with("FROM bitnami/minideb"));
}

#[tokio::test]
async fn stack_id_is_encoded_as_one_segment() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/stacks/my%20stack%2F1")
        .match_query(Matcher::Any)
        .with_body(STACK)
        .create_async()
        .await;

    client.stacks().get("my stack/1").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn create_stack_posts_definition_once() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/stacks/")
        .match_query(query(&[("api_key", API_KEY)]))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "my-node-app",
            "components": [{"id": "node", "version": "6.10.0"}],
            "os": {"id": "debian", "version": "8"},
            "kind": "docker"
        })))
        .with_body(STACK_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let definition = StackDefinition {
        name: "my-node-app".to_string(),
        components: vec![ComponentRef::new("node", "6.10.0")],
        os: ComponentRef::new("debian", "8"),
        kind: "docker".to_string(),
    };
    let status = client.stacks().create(&definition).await.unwrap().into_inner();

    mock.assert_async().await;
    assert_eq!(status.id, "stack1");
    assert!(status.resource_url.ends_with("/stacks/stack1"));
}

#[tokio::test]
async fn update_stack_uses_patch() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/stacks/stack1")
        .match_query(query(&[("api_key", API_KEY)]))
        .match_body(Matcher::PartialJson(json!({"name": "renamed", "shared": true})))
        .with_body(STACK_RESPONSE)
        .create_async()
        .await;

    let params = StackParams {
        name: "renamed".to_string(),
        notifications_enabled: false,
        shared: true,
    };
    client.stacks().update("stack1", &params).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_stack_reports_deleted() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("DELETE", "/stacks/stack1")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(r#"{"id":"stack1","deleted":true}"#)
        .create_async()
        .await;

    let status = client.stacks().delete("stack1").await.unwrap().into_inner();

    mock.assert_async().await;
    assert!(status.deleted);
}

#[tokio::test]
async fn regenerate_posts_without_body() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/stacks/stack1/regenerate")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(STACK_RESPONSE)
        .create_async()
        .await;

    let status = client.stacks().regenerate("stack1").await.unwrap().into_inner();

    mock.assert_async().await;
    assert_eq!(status.id, "stack1");
}

#[tokio::test]
async fn empty_success_body_decodes_to_default() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("DELETE", "/stacks/stack1")
        .match_query(Matcher::Any)
        .with_status(204)
        .create_async()
        .await;

    let status = client.stacks().delete("stack1").await.unwrap().into_inner();

    assert_eq!(status.id, "");
    assert!(!status.deleted);
}

#[tokio::test]
async fn error_envelope_becomes_response_error() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/stacks/missing")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(NOT_FOUND)
        .create_async()
        .await;

    let err = client.stacks().get("missing").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("404"), "got {}", message);
    assert!(message.contains("not found"), "got {}", message);
    match err {
        Error::Api(ApiError::Response { code, body }) => {
            assert_eq!(code, 404);
            assert_eq!(body.status, "404");
        }
        other => panic!("Expected Response error, got {:?}", other),
    }
}

#[tokio::test]
async fn error_message_in_success_body_is_an_error() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/stacks/stack1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"422","error":"stack is being generated"}"#)
        .create_async()
        .await;

    let err = client.stacks().get("stack1").await.unwrap_err();

    assert_eq!(
        err.api_body().map(|b| b.message.as_str()),
        Some("stack is being generated")
    );
}

#[tokio::test]
async fn status_without_envelope_becomes_http_error() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/stacks/")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client.stacks().list(&PaginationParams::new()).await.unwrap_err();

    match err {
        Error::Api(ApiError::Http { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_invalid_response() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/stacks/stack1")
        .match_query(Matcher::Any)
        .with_body("{not json")
        .create_async()
        .await;

    let err = client.stacks().get("stack1").await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    // Nothing listens on port 1
    let client = StacksmithClient::with_host(API_KEY, Some("http://127.0.0.1:1")).unwrap();

    let err = client.stacks().list(&PaginationParams::new()).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Network(_))));
}

#[tokio::test]
async fn hooks_register_and_test() {
    let (mut server, client) = setup().await;
    let register = server
        .mock("POST", "/stacks/stack1/hooks")
        .match_query(query(&[("api_key", API_KEY)]))
        .match_body(Matcher::Json(json!({"url": "https://example.com/hook"})))
        .with_body(r#"{"id":"hook1","resource_url":"https://stacksmith.bitnami.com/api/v1/stacks/stack1/hooks/hook1"}"#)
        .create_async()
        .await;
    let test = server
        .mock("POST", "/stacks/stack1/hooks/hook1/test")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(HOOK_TEST)
        .create_async()
        .await;

    let status = client
        .hooks()
        .register("stack1", &HookParams::new("https://example.com/hook"))
        .await
        .unwrap()
        .into_inner();
    let result = client.hooks().test("stack1", &status.id).await.unwrap().into_inner();

    register.assert_async().await;
    test.assert_async().await;
    assert_eq!(result.response.code, "200");
    assert_eq!(result.response.message, "OK");
    assert_eq!(result.result.request.url, "https://example.com/hook");
}

#[tokio::test]
async fn hooks_list_is_paginated() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/stacks/stack1/hooks")
        .match_query(query(&[("page", "2"), ("per_page", "5"), ("api_key", API_KEY)]))
        .with_body(r#"{"total_entries":6,"total_pages":2,"items":[{"id":"hook6","url":"https://example.com"}]}"#)
        .create_async()
        .await;

    let page = client
        .hooks()
        .list("stack1", &PaginationParams::new().page(2).per_page(5))
        .await
        .unwrap()
        .into_inner();

    mock.assert_async().await;
    assert_eq!(page.items[0].id, "hook6");
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn discovery_components_sends_query() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/components")
        .match_query(Matcher::Exact(format!("query=node&api_key={}", API_KEY)))
        .with_body(LIST_COMPONENTS)
        .create_async()
        .await;

    let page = client.discovery().components("node").await.unwrap().into_inner();

    mock.assert_async().await;
    let item = &page.items[0];
    assert_eq!(item.name, "Node.js");
    assert_eq!(item.versions.len(), 2);
    // Both spellings of the publication date are accepted
    assert_eq!(item.versions[0].published_at, "2017-03-02T00:00:00Z");
    assert_eq!(item.versions[1].published_at, "2017-02-22T00:00:00Z");
}

#[tokio::test]
async fn discovery_empty_query_is_omitted() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/oses")
        .match_query(Matcher::Exact(format!("api_key={}", API_KEY)))
        .with_body(r#"{"items":[{"id":"debian","name":"Debian","category":"os"}]}"#)
        .create_async()
        .await;

    let page = client.discovery().oses("").await.unwrap().into_inner();

    mock.assert_async().await;
    assert_eq!(page.items[0].id, "debian");
}

#[tokio::test]
async fn changelog_sends_range_and_pagination() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/components/node/changelog")
        .match_query(query(&[
            ("from", "6.9.0"),
            ("to", "6.10.0"),
            ("per_page", "10"),
            ("api_key", API_KEY),
        ]))
        .with_body(CHANGELOG)
        .create_async()
        .await;

    let page = client
        .discovery()
        .changelog(
            "node",
            &RangeParams::new().from("6.9.0").to("6.10.0"),
            &PaginationParams::new().per_page(10),
        )
        .await
        .unwrap()
        .into_inner();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].release_notes, "Security release");
}

#[tokio::test]
async fn component_flavors_are_paginated() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/components/node/flavors")
        .match_query(query(&[("page", "1"), ("per_page", "50"), ("api_key", API_KEY)]))
        .with_body(r#"{"items":[{"id":"docker","name":"Docker","default":true}]}"#)
        .create_async()
        .await;

    let page = client
        .discovery()
        .component_flavors("node", &PaginationParams::new().page(1).per_page(50))
        .await
        .unwrap()
        .into_inner();

    mock.assert_async().await;
    assert!(page.items[0].default);
}

#[tokio::test]
async fn dependencies_are_plain_strings() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/components/wordpress/dependencies")
        .match_query(Matcher::Any)
        .with_body(r#"{"total_entries":2,"total_pages":1,"items":["php","mysql"]}"#)
        .create_async()
        .await;

    let page = client
        .discovery()
        .dependencies("wordpress")
        .await
        .unwrap()
        .into_inner();

    assert_eq!(page.items, vec!["php".to_string(), "mysql".to_string()]);
}

#[tokio::test]
async fn user_notifications_patch() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/user/")
        .match_query(query(&[("api_key", API_KEY)]))
        .match_body(Matcher::Json(json!({"email_notifications_enabled": false})))
        .with_body(r#"{"email_notifications_enabled":false}"#)
        .create_async()
        .await;

    let settings = client
        .user()
        .update_notifications(&EmailNotifications {
            email_notifications_enabled: false,
        })
        .await
        .unwrap()
        .into_inner();

    mock.assert_async().await;
    assert!(!settings.email_notifications_enabled);
}

#[tokio::test]
async fn slack_channel_remove_and_test() {
    let (mut server, client) = setup().await;
    let remove = server
        .mock("DELETE", "/user/slack_channels/C123")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(r#"{"id":"C123","deleted":true}"#)
        .create_async()
        .await;
    let test = server
        .mock("POST", "/user/slack_channels/C456/test")
        .match_query(query(&[("api_key", API_KEY)]))
        .with_body(r##"{"id":"C456","slack_channel":"#builds"}"##)
        .create_async()
        .await;

    let removed = client
        .user()
        .remove_slack_channel("C123")
        .await
        .unwrap()
        .into_inner();
    let channel = client
        .user()
        .test_slack_channel("C456")
        .await
        .unwrap()
        .into_inner();

    remove.assert_async().await;
    test.assert_async().await;
    assert!(removed.deleted);
    assert_eq!(channel.slack_channel, "#builds");
}
