//! Title ordering for the sort toggle.
//!
//! Only the first character of each title is compared. Titles sharing a
//! first character keep their relative order, and an empty title sorts
//! before everything else in ascending order.

use std::cmp::Ordering;

/// Direction applied by one press of the sort toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "A→Z",
            SortDirection::Descending => "Z→A",
        }
    }
}

fn first_char_key(title: &str) -> Option<char> {
    title.chars().next()
}

/// Compare two titles by their first character. `None` (empty) is lowest.
fn compare_first_char(a: &str, b: &str) -> Ordering {
    first_char_key(a).cmp(&first_char_key(b))
}

/// Reorder `titles` in place by first character.
///
/// Uses a stable sort, so equal keys never swap.
pub fn sort_titles<S: AsRef<str>>(titles: &mut [S], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => {
            titles.sort_by(|a, b| compare_first_char(a.as_ref(), b.as_ref()))
        }
        SortDirection::Descending => {
            titles.sort_by(|a, b| compare_first_char(b.as_ref(), a.as_ref()))
        }
    }
}
