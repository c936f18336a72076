//! AppMessage enum for async communication within the application.

use crate::error::GatewayResult;
use crate::models::{Id, Post, User};

/// Results of gateway calls, delivered back to the UI task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `GET /users` finished
    UsersLoaded(GatewayResult<Vec<User>>),
    /// `GET /posts?userId=` finished for `user_id`
    PostsLoaded {
        user_id: Id,
        result: GatewayResult<Vec<Post>>,
    },
    /// `POST /posts` finished
    PostCreated(GatewayResult<Post>),
    /// `PUT /posts/{post_id}` finished
    PostUpdated {
        post_id: Id,
        result: GatewayResult<Post>,
    },
    /// `DELETE /posts/{post_id}` finished
    PostDeleted {
        post_id: Id,
        result: GatewayResult<()>,
    },
}
