//! Remote data gateway for the JSONPlaceholder API.
//!
//! Thin pass-through over [`HttpClient`]: builds URLs and payloads, maps
//! statuses and decode failures onto [`GatewayError`]. No caching, no retry.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{GatewayError, GatewayResult};
use crate::models::{Id, NewPost, Post, PostUpdate, User};
use crate::traits::{Headers, HttpClient, HttpError, Response};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Content type sent with every request that carries a JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Client for the users/posts endpoints.
///
/// Cheap to clone: the HTTP client is shared behind an `Arc`, so each
/// spawned request task can own its own handle.
#[derive(Clone)]
pub struct PlaceholderClient {
    /// Base URL without trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PlaceholderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PlaceholderClient {
    /// Create a client against the public JSONPlaceholder service.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (e.g. a local mock server).
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users`
    pub async fn list_users(&self) -> GatewayResult<Vec<User>> {
        const OP: &str = "list_users";
        let url = format!("{}/users", self.base_url);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| network(OP, e))?;
        decode(OP, &url, &response)
    }

    /// `GET /posts?userId={id}`
    pub async fn list_posts(&self, user_id: Id) -> GatewayResult<Vec<Post>> {
        const OP: &str = "list_posts";
        let url = format!("{}/posts?userId={}", self.base_url, user_id);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| network(OP, e))?;
        decode(OP, &url, &response)
    }

    /// `POST /posts`. The service echoes the post with a fresh id but does
    /// not persist it.
    pub async fn create_post(&self, post: &NewPost) -> GatewayResult<Post> {
        const OP: &str = "create_post";
        let url = format!("{}/posts", self.base_url);
        let body = encode(OP, post)?;
        let response = self
            .http
            .post(&url, &body, &json_headers())
            .await
            .map_err(|e| network(OP, e))?;
        decode(OP, &url, &response)
    }

    /// `PUT /posts/{id}` with a full replacement payload.
    pub async fn update_post(&self, update: &PostUpdate) -> GatewayResult<Post> {
        const OP: &str = "update_post";
        let url = format!("{}/posts/{}", self.base_url, update.id);
        let body = encode(OP, update)?;
        let response = self
            .http
            .put(&url, &body, &json_headers())
            .await
            .map_err(|e| network(OP, e))?;
        decode(OP, &url, &response)
    }

    /// `DELETE /posts/{id}`. The body of the answer is ignored.
    pub async fn delete_post(&self, post_id: Id) -> GatewayResult<()> {
        const OP: &str = "delete_post";
        let url = format!("{}/posts/{}", self.base_url, post_id);
        let response = self
            .http
            .delete(&url, &Headers::new())
            .await
            .map_err(|e| network(OP, e))?;
        check_status(OP, &url, &response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-type".to_string(), JSON_CONTENT_TYPE.to_string());
    headers
}

fn network(operation: &'static str, source: HttpError) -> GatewayError {
    GatewayError::Network { operation, source }
}

fn encode<T: serde::Serialize>(operation: &'static str, value: &T) -> GatewayResult<String> {
    serde_json::to_string(value).map_err(|e| GatewayError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn check_status(operation: &'static str, url: &str, response: &Response) -> GatewayResult<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(GatewayError::NotFound {
            operation,
            url: url.to_string(),
        });
    }
    let message = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(GatewayError::Status {
        operation,
        status: response.status,
        message,
    })
}

fn decode<T: DeserializeOwned>(
    operation: &'static str,
    url: &str,
    response: &Response,
) -> GatewayResult<T> {
    check_status(operation, url, response)?;
    response.json().map_err(|e| GatewayError::Decode {
        operation,
        message: e.to_string(),
    })
}
