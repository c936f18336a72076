//! User-triggered operations: navigation, sorting, forms and CRUD requests.

use tracing::{debug, info, warn};

use super::{App, AppMessage, FormKind, PostForm, StatusLine};
use crate::models::{Id, NewPost, PostUpdate};
use crate::state::{sort_titles, ViewEvent};

impl App {
    /// Fetch the users list.
    pub fn load_users(&mut self) {
        self.users_loading = true;
        self.mark_dirty();

        let client = self.client().clone();
        self.spawn_request(async move { AppMessage::UsersLoaded(client.list_users().await) });
    }

    /// Show the posts panel for `user_id` and fetch its posts.
    pub fn view_posts(&mut self, user_id: Id) {
        self.view = self.view.apply(ViewEvent::ViewPostsClicked(user_id));
        self.form = None;
        self.posts.clear();
        self.displayed_titles.clear();
        self.last_sort = None;
        self.posts_index = 0;
        debug!(user_id, "showing posts panel");
        self.fetch_posts(user_id);
    }

    /// "View posts" on the selected user row.
    pub fn view_selected_user_posts(&mut self) {
        if let Some(user_id) = self.selected_user().map(|u| u.id) {
            self.view_posts(user_id);
        }
    }

    /// Refetch posts of the current user.
    pub fn refresh_posts(&mut self) {
        match self.view.current_user_id {
            Some(user_id) => self.fetch_posts(user_id),
            None => warn!("refresh requested with no current user"),
        }
    }

    fn fetch_posts(&mut self, user_id: Id) {
        self.posts_loading = true;
        self.mark_dirty();

        let client = self.client().clone();
        self.spawn_request(async move {
            AppMessage::PostsLoaded {
                user_id,
                result: client.list_posts(user_id).await,
            }
        });
    }

    /// Back to the users panel. Data and selection are kept.
    pub fn go_home(&mut self) {
        self.view = self.view.apply(ViewEvent::HomeClicked);
        self.close_form();
        self.mark_dirty();
    }

    /// Reorder the displayed titles, alternating ascending/descending.
    ///
    /// Only the title text moves; each row keeps its post's id and body.
    pub fn toggle_sort(&mut self) {
        let direction = self.view.next_sort_direction();
        sort_titles(&mut self.displayed_titles, direction);
        self.last_sort = Some(direction);
        self.view = self.view.apply(ViewEvent::SortToggled);
        debug!(?direction, "sorted post titles");
        self.mark_dirty();
    }

    pub fn select_next(&mut self) {
        let (index, len) = self.active_selection();
        if len > 0 && *index < len - 1 {
            *index += 1;
            self.mark_dirty();
        }
    }

    pub fn select_previous(&mut self) {
        let (index, _) = self.active_selection();
        if *index > 0 {
            *index -= 1;
            self.mark_dirty();
        }
    }

    fn active_selection(&mut self) -> (&mut usize, usize) {
        if self.view.posts_visible() {
            (&mut self.posts_index, self.posts.len())
        } else {
            (&mut self.users_index, self.users.len())
        }
    }

    /// Open the empty add-post form.
    pub fn open_create_form(&mut self) {
        self.view = self.view.apply(ViewEvent::EditClosed);
        self.form = Some(PostForm::create());
        self.mark_dirty();
    }

    /// Replace the selected row with an edit form pre-filled from the
    /// text the row currently shows.
    pub fn open_edit_form(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };
        let post_id = post.id;
        let form = PostForm::edit(self.displayed_title(self.posts_index), &post.body);

        self.view = self.view.apply(ViewEvent::EditClicked(post_id));
        self.form = Some(form);
        self.mark_dirty();
    }

    /// Close the form without sending anything.
    pub fn close_form(&mut self) {
        if self.form.take().is_some() {
            self.view = self.view.apply(ViewEvent::EditClosed);
            self.mark_dirty();
        }
    }

    /// Send the open form: `POST /posts` or `PUT /posts/{id}`.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        self.mark_dirty();

        let Some(user_id) = self.view.current_user_id else {
            warn!(kind = ?form.kind, "form submitted with no current user");
            self.view = self.view.apply(ViewEvent::EditClosed);
            self.set_status(StatusLine::error("Select a user before posting."));
            return;
        };

        let title = form.title.content().to_string();
        let body = form.body.content().to_string();
        let client = self.client().clone();

        match form.kind {
            FormKind::Create => {
                let post = NewPost::new(title, body, user_id);
                info!(user_id, "creating post");
                self.spawn_request(async move {
                    AppMessage::PostCreated(client.create_post(&post).await)
                });
            }
            FormKind::Edit => {
                let Some(post_id) = self.view.current_post_id else {
                    warn!("edit form submitted with no current post");
                    return;
                };
                let update = PostUpdate::new(post_id, title, body, user_id);
                info!(user_id, post_id, "updating post");
                self.spawn_request(async move {
                    AppMessage::PostUpdated {
                        post_id,
                        result: client.update_post(&update).await,
                    }
                });
                self.view = self.view.apply(ViewEvent::EditClosed);
            }
        }
    }

    /// `DELETE /posts/{id}` for the selected row. No confirmation.
    pub fn delete_selected_post(&mut self) {
        let Some(post_id) = self.selected_post().map(|p| p.id) else {
            return;
        };
        self.delete_post(post_id);
    }

    pub fn delete_post(&mut self, post_id: Id) {
        info!(post_id, "deleting post");
        let client = self.client().clone();
        self.spawn_request(async move {
            AppMessage::PostDeleted {
                post_id,
                result: client.delete_post(post_id).await,
            }
        });
    }
}
