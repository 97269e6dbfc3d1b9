//! Tests for the resources module

use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::{
    ApiCallStatus, ApiCallWithPrice, CreatedAtSortMode, FileExportFormat, FileImportFormat,
    ListParams,
};
use crate::Client;
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_bytes, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("test-token").with_host(server.uri())).unwrap()
}

fn ids(calls: &[ApiCallWithPrice]) -> Vec<&str> {
    calls.iter().map(|c| c.id.as_str()).collect()
}

#[tokio::test]
async fn test_api_calls_list_follows_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "c1"}, {"id": "c2"}],
            "next_page": "tok2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param("limit", "2"))
        .and(query_param("page_token", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "c3"}],
            "next_page": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let calls = client
        .api_calls()
        .list(ListParams::new().limit(2))
        .collect_all()
        .await
        .unwrap();

    assert_eq!(ids(&calls), vec!["c1", "c2", "c3"]);
}

#[tokio::test]
async fn test_list_sends_sort_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("sort_by", "created_at_ascending"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "u1", "email": "a@example.com"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let users = client
        .users()
        .list(ListParams::new().sort_by(CreatedAtSortMode::CreatedAtAscending))
        .collect_all()
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email.as_deref(), Some("a@example.com"));
}

#[tokio::test]
async fn test_list_is_lazy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "c1"}, {"id": "c2"}],
            "next_page": "tok2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param("page_token", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pager = client.api_calls().list(ListParams::new());
    let first: Vec<_> = pager.stream().take(2).try_collect().await.unwrap();

    assert_eq!(ids(&first), vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_list_error_ends_pass() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "c1"}],
            "next_page": "tok2"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param("page_token", "tok2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error_code": "internal",
            "message": "boom"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pager = client.api_calls().list(ListParams::new());
    let results: Vec<_> = pager.stream().collect().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().id, "c1");
    assert!(matches!(
        results[1].as_ref().unwrap_err(),
        Error::Api { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_api_calls_list_page_and_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls"))
        .and(query_param("page_token", "resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "c9"}],
            "next_page": "tok10"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/api-calls/c9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "c9", "status_code": 200})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .api_calls()
        .list_page(ListParams::new().page_token("resume"))
        .await
        .unwrap();
    assert_eq!(page.next_token(), Some("tok10"));

    let call = client.api_calls().get("c9").await.unwrap();
    assert_eq!(call.status_code, Some(200));
}

#[tokio::test]
async fn test_users_me_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "not_found",
            "message": "no such user"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.users().me().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_api_tokens_create_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/api-tokens"))
        .and(query_param("label", "ci"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "t1",
            "token": "secret-uuid",
            "label": "ci",
            "is_valid": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/user/api-tokens/secret-uuid"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = client.api_tokens().create(Some("ci")).await.unwrap();
    assert_eq!(token.token, "secret-uuid");

    client.api_tokens().delete(&token.token).await.unwrap();
}

#[tokio::test]
async fn test_file_conversion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/file/conversion/stl/obj"))
        .and(header("Content-Type", "application/octet-stream"))
        .and(body_bytes(b"solid c".to_vec()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "op1",
            "status": "in_progress"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async/operations/op1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "op1",
            "type": "file_conversion",
            "status": "completed",
            "outputs": {"output.obj": "aGVsbG8="}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .file()
        .create_conversion(
            FileImportFormat::Stl,
            FileExportFormat::Obj,
            b"solid c".to_vec(),
        )
        .await
        .unwrap();
    assert_eq!(created.status, ApiCallStatus::InProgress);

    let done = client.file().get_conversion(&created.id).await.unwrap();
    assert!(done.status.is_finished());
    assert_eq!(done.decoded_outputs().unwrap()["output.obj"], b"hello".to_vec());
}
