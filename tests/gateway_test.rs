//! HTTP contract of the gateway against a real local server.

use std::sync::Arc;

use postboard::adapters::ReqwestHttpClient;
use postboard::error::GatewayError;
use postboard::gateway::PlaceholderClient;
use postboard::models::{NewPost, PostUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> PlaceholderClient {
    PlaceholderClient::with_base_url(Arc::new(ReqwestHttpClient::new()), server.uri())
}

#[tokio::test]
async fn test_list_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "Bret", "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874"}},
            {"id": 2, "username": "Antonette", "address": {"street": "Victor Plains", "suite": "Suite 879", "city": "Wisokyburgh", "zipcode": "90566-7771"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].username, "Antonette");
    assert_eq!(users[0].address.city, "Gwenborough");
}

#[tokio::test]
async fn test_list_posts_filters_by_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"userId": 3, "id": 21, "title": "asperiores ea ipsam", "body": "dolor"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server).list_posts(3).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 21);
    assert_eq!(posts[0].user_id, 3);
}

#[tokio::test]
async fn test_create_post_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("Content-type", "application/json; charset=UTF-8"))
        .and(body_json(json!({"title": "Hello", "body": "World", "userId": 3})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "title": "Hello", "body": "World", "userId": 3, "id": 101
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_post(&NewPost::new("Hello", "World", 3))
        .await
        .unwrap();

    assert_eq!(created.id, 101);
    assert_eq!(created.title, "Hello");
}

#[tokio::test]
async fn test_update_post_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/7"))
        .and(body_json(json!({"id": 7, "title": "New", "body": "Text", "userId": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "title": "New", "body": "Text", "userId": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server)
        .update_post(&PostUpdate::new(7, "New", "Text", 3))
        .await
        .unwrap();

    assert_eq!(updated.title, "New");
}

#[tokio::test]
async fn test_delete_post() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_post(7).await.unwrap();
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client(&server)
        .update_post(&PostUpdate::new(9999, "t", "b", 3))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::NotFound { .. }));
    assert_eq!(err.error_code(), "E_NOT_FOUND");
}

#[tokio::test]
async fn test_server_error_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).list_users().await.unwrap_err();

    assert!(matches!(err, GatewayError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": \"x\"}"))
        .mount(&server)
        .await;

    let err = client(&server).list_posts(1).await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode { operation: "list_posts", .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = PlaceholderClient::with_base_url(Arc::new(ReqwestHttpClient::new()), uri);
    let err = client.list_users().await.unwrap_err();

    assert!(matches!(err, GatewayError::Network { .. }));
    assert!(err.is_retryable());
}
