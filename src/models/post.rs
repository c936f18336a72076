use serde::{Deserialize, Serialize};

use super::{deserialize_id, Id};

/// A post as returned by the `/posts` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", deserialize_with = "deserialize_id")]
    pub user_id: Id,
}

/// Payload for `POST /posts`. The server assigns the id.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: Id,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: Id) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

/// Full replacement payload for `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostUpdate {
    pub id: Id,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: Id,
}

impl PostUpdate {
    pub fn new(id: Id, title: impl Into<String>, body: impl Into<String>, user_id: Id) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}
