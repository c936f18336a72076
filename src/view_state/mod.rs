//! View state for rendering.
//!
//! UI rendering is a pure function: data in, cells out. [`AppViewState`]
//! is built from an [`App`] by borrowing, and the `ui` module only ever
//! sees this struct. Every dirty frame rebuilds it, so the screen always
//! reflects current data instead of being patched in place.
//!
//! ```text
//! App --view_state()--> AppViewState --ui::render_view()--> Frame
//! ```

use crate::app::{App, PostForm, StatusLine};
use crate::models::Id;
use crate::state::{Panel, SortDirection};

/// One row of the users panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow<'a> {
    pub id: Id,
    pub username: &'a str,
    pub address: [&'a str; 4],
    pub selected: bool,
}

/// One row of the posts panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow<'a> {
    pub id: Id,
    /// Displayed title (possibly moved here by the sort toggle)
    pub title: &'a str,
    pub body: &'a str,
    pub selected: bool,
    /// This row's edit form is open
    pub editing: bool,
}

/// Everything the UI needs for one frame.
#[derive(Debug, Clone)]
pub struct AppViewState<'a> {
    pub panel: Panel,
    pub users: Vec<UserRow<'a>>,
    pub posts: Vec<PostRow<'a>>,
    pub selected_index: usize,
    /// Username and id of the user whose posts are shown
    pub current_user: Option<(&'a str, Id)>,
    pub current_user_id: Option<Id>,
    pub current_post_id: Option<Id>,
    /// Direction of the sort currently applied to the displayed titles
    pub last_sort: Option<SortDirection>,
    pub form: Option<&'a PostForm>,
    pub loading: bool,
    pub status: Option<&'a StatusLine>,
    pub tick_count: u64,
}

impl App {
    /// Build the render model for the current state.
    pub fn view_state(&self) -> AppViewState<'_> {
        let users = self
            .users
            .iter()
            .enumerate()
            .map(|(i, user)| UserRow {
                id: user.id,
                username: &user.username,
                address: user.address_lines(),
                selected: i == self.users_index,
            })
            .collect();

        let posts = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| PostRow {
                id: post.id,
                title: self.displayed_title(i),
                body: &post.body,
                selected: i == self.posts_index,
                editing: self.form.is_some() && self.view.current_post_id == Some(post.id),
            })
            .collect();

        let (selected_index, loading) = match self.view.panel {
            Panel::Users => (self.users_index, self.users_loading),
            Panel::Posts => (self.posts_index, self.posts_loading),
        };

        AppViewState {
            panel: self.view.panel,
            users,
            posts,
            selected_index,
            current_user: self.current_user().map(|u| (u.username.as_str(), u.id)),
            current_user_id: self.view.current_user_id,
            current_post_id: self.view.current_post_id,
            last_sort: self.last_sort,
            form: self.form.as_ref(),
            loading,
            status: self.status.as_ref(),
            tick_count: self.tick_count,
        }
    }
}
