//! Type definitions for the application state.
//!
//! - [`PostForm`] - The add/edit post form
//! - [`FormField`] - Which form field has focus
//! - [`StatusLine`] - Latest message shown in the status bar

use chrono::{DateTime, Local};

use crate::widgets::TextField;

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Body,
}

impl FormField {
    pub fn toggle(self) -> Self {
        match self {
            FormField::Title => FormField::Body,
            FormField::Body => FormField::Title,
        }
    }
}

/// Whether the form creates a new post or replaces an existing one.
///
/// The id of the post being edited lives in the view store
/// (`ViewState::current_post_id`), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit,
}

/// The add-post / edit-post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub kind: FormKind,
    pub title: TextField,
    pub body: TextField,
    pub focus: FormField,
}

impl PostForm {
    /// Empty form for a new post.
    pub fn create() -> Self {
        Self {
            kind: FormKind::Create,
            title: TextField::new(),
            body: TextField::new(),
            focus: FormField::Title,
        }
    }

    /// Form pre-filled with the text currently shown for a post.
    pub fn edit(title: &str, body: &str) -> Self {
        Self {
            kind: FormKind::Edit,
            title: TextField::with_content(title),
            body: TextField::with_content(body),
            focus: FormField::Title,
        }
    }

    /// The field that receives typed characters.
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Body => &mut self.body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Latest status message, stamped with local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
            at: Local::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
            at: Local::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
