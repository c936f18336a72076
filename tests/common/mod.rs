//! Shared fixtures for integration tests.
//!
//! ```ignore
//! let mock = fixture_client();
//! let (mut app, mut rx) = test_app(&mock);
//! app.load_users();
//! pump(&mut app, &mut rx).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use postboard::adapters::mock::{MockHttpClient, MockResponse};
use postboard::app::{App, AppMessage};
use postboard::gateway::PlaceholderClient;
use postboard::models::{Address, Post, User};
use postboard::traits::Response;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub const BASE_URL: &str = "http://api.test";

pub fn users_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            }
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "address": {
                "street": "Douglas Extension",
                "suite": "Suite 847",
                "city": "McKenziehaven",
                "zipcode": "59590-4157"
            }
        }
    ])
}

pub fn posts_json() -> Value {
    json!([
        { "userId": 3, "id": 21, "title": "banana", "body": "first body\nsecond line" },
        { "userId": 3, "id": 22, "title": "Apple", "body": "apple body" },
        { "userId": 3, "id": 23, "title": "cherry", "body": "cherry body" }
    ])
}

pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        },
    }
}

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        user_id: 3,
    }
}

/// Mock serving the users and user-3 posts fixtures.
pub fn fixture_client() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        &format!("{}/users", BASE_URL),
        MockResponse::Success(Response::json_body(200, &users_json())),
    );
    mock.set_response(
        &format!("{}/posts?userId=3", BASE_URL),
        MockResponse::Success(Response::json_body(200, &posts_json())),
    );
    mock
}

/// App wired to `mock`, with the message receiver handed to the test.
pub fn test_app(mock: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    let client = PlaceholderClient::with_base_url(Arc::new(mock.clone()), BASE_URL);
    let mut app = App::new(client);
    let rx = app
        .message_rx
        .take()
        .expect("fresh app owns its receiver");
    (app, rx)
}

/// Wait for the next gateway result and apply it.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    let message = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("gateway message within 5s")
        .expect("channel open");
    app.handle_message(message.clone());
    message
}

/// App showing user 3's posts from the fixtures.
pub async fn app_showing_posts(
    mock: &MockHttpClient,
) -> (App, UnboundedReceiver<AppMessage>) {
    let (mut app, mut rx) = test_app(mock);
    app.load_users();
    pump(&mut app, &mut rx).await;
    app.view_posts(3);
    pump(&mut app, &mut rx).await;
    (app, rx)
}
