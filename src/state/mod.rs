//! Session-scoped view state.
//!
//! - [`ViewState`]: current user/post selection, sort flag and visible panel
//! - [`sort_titles`]: first-character title ordering used by the sort toggle

mod sort;
mod view_store;

pub use sort::{sort_titles, SortDirection};
pub use view_store::{Panel, ViewEvent, ViewState};
