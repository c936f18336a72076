//! The view store: which panel is showing and what is selected.
//!
//! [`ViewState`] is a small `Copy` value. Handlers never poke at its fields;
//! they feed a [`ViewEvent`] to [`ViewState::apply`] and keep the returned
//! value.

use crate::models::Id;

use super::sort::SortDirection;

/// The two mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Users,
    Posts,
}

/// UI events that change the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// "View posts" pressed for a user
    ViewPostsClicked(Id),
    /// Back to the users list
    HomeClicked,
    /// Edit pressed on a post row
    EditClicked(Id),
    /// Edit form submitted or cancelled
    EditClosed,
    /// Sort toggle pressed
    SortToggled,
}

/// Session-scoped view state. Lives as long as the app; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// User whose posts are (or were last) shown
    pub current_user_id: Option<Id>,
    /// Post whose edit form is open
    pub current_post_id: Option<Id>,
    /// Whether the last sort applied was ascending
    pub sort_ascending: bool,
    /// Visible panel
    pub panel: Panel,
}

impl ViewState {
    /// Initial state: users panel, nothing selected, sort flag unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the state after `event`.
    #[must_use]
    pub fn apply(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::ViewPostsClicked(user_id) => Self {
                current_user_id: Some(user_id),
                current_post_id: None,
                panel: Panel::Posts,
                ..self
            },
            ViewEvent::HomeClicked => Self {
                panel: Panel::Users,
                ..self
            },
            ViewEvent::EditClicked(post_id) => Self {
                current_post_id: Some(post_id),
                ..self
            },
            ViewEvent::EditClosed => Self {
                current_post_id: None,
                ..self
            },
            ViewEvent::SortToggled => Self {
                sort_ascending: !self.sort_ascending,
                ..self
            },
        }
    }

    /// Direction the next sort toggle will apply.
    pub fn next_sort_direction(&self) -> SortDirection {
        if self.sort_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn users_visible(&self) -> bool {
        self.panel == Panel::Users
    }

    pub fn posts_visible(&self) -> bool {
        self.panel == Panel::Posts
    }
}
