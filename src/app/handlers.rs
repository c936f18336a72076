//! Key and message handlers for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::{App, AppMessage, StatusLine};
use crate::error::GatewayError;

impl App {
    /// Apply a gateway result to the app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        self.mark_dirty();

        match message {
            AppMessage::UsersLoaded(result) => {
                self.users_loading = false;
                match result {
                    Ok(users) => {
                        info!(count = users.len(), "users loaded");
                        self.users = users;
                        if self.users_index >= self.users.len() {
                            self.users_index = 0;
                        }
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::PostsLoaded { user_id, result } => {
                if self.view.current_user_id != Some(user_id) {
                    debug!(user_id, "dropping posts for a user no longer shown");
                    return;
                }
                self.posts_loading = false;
                match result {
                    Ok(posts) => {
                        info!(user_id, count = posts.len(), "posts loaded");
                        self.posts = posts;
                        self.posts_index = 0;
                        self.reset_displayed_titles();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::PostCreated(result) => match result {
                Ok(post) => {
                    info!(?post, "post created");
                    let post_id = post.id;
                    if self.view.current_user_id != Some(post.user_id) {
                        self.set_status(StatusLine::info(format!("Created post #{}", post_id)));
                    } else if self.posts.iter().any(|p| p.id == post_id) {
                        // Row ids must stay unique: update and delete match on them
                        debug!(post_id, "created post id already listed");
                        self.set_status(StatusLine::info(format!(
                            "Created post #{}; a post with that id is already listed",
                            post_id
                        )));
                    } else {
                        self.posts.push(post);
                        self.reset_displayed_titles();
                        self.set_status(StatusLine::info(format!("Created post #{}", post_id)));
                    }
                }
                Err(err) => self.report_error(&err),
            },
            AppMessage::PostUpdated { post_id, result } => match result {
                Ok(post) => {
                    info!(?post, "post updated");
                    if let Some(existing) = self.posts.iter_mut().find(|p| p.id == post_id) {
                        *existing = post;
                        self.reset_displayed_titles();
                    }
                    self.set_status(StatusLine::info(format!("Updated post #{}", post_id)));
                }
                Err(err) => self.report_error(&err),
            },
            AppMessage::PostDeleted { post_id, result } => match result {
                Ok(()) => {
                    info!(post_id, "post deleted");
                    let before = self.posts.len();
                    self.posts.retain(|p| p.id != post_id);
                    if self.posts.len() != before {
                        self.reset_displayed_titles();
                    }
                    self.set_status(StatusLine::info(format!("Deleted post #{}", post_id)));
                }
                Err(err) => self.report_error(&err),
            },
        }
    }

    fn report_error(&mut self, err: &GatewayError) {
        warn!(code = err.error_code(), error = %err, "gateway request failed");
        self.set_status(StatusLine::error(format!(
            "{} [{}]",
            err.user_message(),
            err.error_code()
        )));
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.form.is_some() {
            self.handle_form_key(key);
            return;
        }

        if self.view.posts_visible() {
            self.handle_posts_key(key);
        } else {
            self.handle_users_key(key);
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char('v') => self.view_selected_user_posts(),
            KeyCode::Char('r') => self.load_users(),
            _ => {}
        }
    }

    fn handle_posts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('d') => self.delete_selected_post(),
            KeyCode::Char('r') => self.refresh_posts(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.close_form();
                return;
            }
            KeyCode::Enter => {
                self.submit_form();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => form.focus = form.focus.toggle(),
            KeyCode::Backspace => form.focused_field_mut().backspace(),
            KeyCode::Delete => form.focused_field_mut().delete_char(),
            KeyCode::Left => form.focused_field_mut().move_cursor_left(),
            KeyCode::Right => form.focused_field_mut().move_cursor_right(),
            KeyCode::Home => form.focused_field_mut().move_cursor_home(),
            KeyCode::End => form.focused_field_mut().move_cursor_end(),
            KeyCode::Char(c) => form.focused_field_mut().insert_char(c),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Bracketed paste goes into the focused form field.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(form) = self.form.as_mut() {
            form.focused_field_mut().insert_str(text);
            self.mark_dirty();
        }
    }
}
