//! Application state and logic for the TUI.
//!
//! - [`App`] - Owns the view store, the fetched data and the open form
//! - [`AppMessage`] - Gateway results delivered over the message channel
//! - [`PostForm`] - Add/edit post form state

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{FormField, FormKind, PostForm, StatusKind, StatusLine};

use std::future::Future;

use tokio::sync::mpsc;

use crate::gateway::PlaceholderClient;
use crate::models::{Post, User};
use crate::state::{SortDirection, ViewState};

/// Main application state
pub struct App {
    /// Session view store (panel, current user/post, sort flag)
    pub view: ViewState,
    /// Users as last fetched
    pub users: Vec<User>,
    /// Posts of the current user as last fetched, plus local create/update/delete results
    pub posts: Vec<Post>,
    /// Title text shown on each post row; reordered by the sort toggle
    pub displayed_titles: Vec<String>,
    /// Sort currently applied to `displayed_titles`, if any
    pub last_sort: Option<SortDirection>,
    /// Selected row in the users panel
    pub users_index: usize,
    /// Selected row in the posts panel
    pub posts_index: usize,
    /// Open add/edit form, if any
    pub form: Option<PostForm>,
    /// A users fetch is in flight
    pub users_loading: bool,
    /// A posts fetch is in flight
    pub posts_loading: bool,
    /// Latest status message
    pub status: Option<StatusLine>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed since the last frame
    pub needs_redraw: bool,
    /// Animation tick counter (loading spinner)
    pub tick_count: u64,
    client: PlaceholderClient,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half of the message channel; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app in its initial state: users panel, nothing loaded.
    ///
    /// Call [`App::load_users`] to issue the first fetch.
    pub fn new(client: PlaceholderClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewState::new(),
            users: Vec::new(),
            posts: Vec::new(),
            displayed_titles: Vec::new(),
            last_sort: None,
            users_index: 0,
            posts_index: 0,
            form: None,
            users_loading: false,
            posts_loading: false,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            client,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn client(&self) -> &PlaceholderClient {
        &self.client
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only spinners animate, so only redraw while loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.users_loading || self.posts_loading {
            self.mark_dirty();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.users_loading || self.posts_loading
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.users_index)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.posts_index)
    }

    /// The user whose posts are shown.
    pub fn current_user(&self) -> Option<&User> {
        let id = self.view.current_user_id?;
        self.users.iter().find(|u| u.id == id)
    }

    /// Title text shown on row `index`.
    pub fn displayed_title(&self, index: usize) -> &str {
        self.displayed_titles
            .get(index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
        self.mark_dirty();
    }

    /// Re-derive the displayed titles from the post data, dropping any
    /// visual sort permutation.
    pub(crate) fn reset_displayed_titles(&mut self) {
        self.displayed_titles = self.posts.iter().map(|p| p.title.clone()).collect();
        self.last_sort = None;
        if self.posts_index >= self.posts.len() {
            self.posts_index = self.posts.len().saturating_sub(1);
        }
    }

    /// Run a gateway call on the runtime and deliver its message back.
    fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = request.await;
            // Receiver gone means the UI is shutting down
            let _ = tx.send(message);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use std::sync::Arc;

    fn app() -> App {
        App::new(PlaceholderClient::new(Arc::new(MockHttpClient::new())))
    }

    #[test]
    fn test_new_app_starts_on_users_panel() {
        let app = app();
        assert!(app.view.users_visible());
        assert!(!app.view.posts_visible());
        assert!(app.message_rx.is_some());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_tick_only_redraws_while_loading() {
        let mut app = app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);

        app.posts_loading = true;
        app.tick();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_displayed_title_out_of_range() {
        let app = app();
        assert_eq!(app.displayed_title(3), "");
    }
}
