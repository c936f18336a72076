//! UI rendering for postboard.
//!
//! Screen layout, top to bottom:
//! - Header: app name, panel title, sort and loading indicators
//! - Body: the users panel or the posts panel (never both)
//! - Status bar: latest info/error message
//! - Footer: key hints for the current context
//!
//! Rendering reads only an [`AppViewState`]; nothing here mutates the app.

mod form;
pub mod helpers;
mod posts_panel;
mod status_bar;
pub mod theme;
mod users_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::Panel;
use crate::view_state::AppViewState;
use helpers::spinner_frame;
use theme::{COLOR_DIM, COLOR_HEADER};

/// Render the whole screen for the app's current state.
pub fn render(frame: &mut Frame, app: &App) {
    render_view(frame, &app.view_state());
}

/// Render a prepared view state.
pub fn render_view(frame: &mut Frame, view: &AppViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    match view.panel {
        Panel::Users => users_panel::render(frame, chunks[1], view),
        Panel::Posts => posts_panel::render(frame, chunks[1], view),
    }
    status_bar::render_status(frame, chunks[2], view);
    status_bar::render_hints(frame, chunks[3], view);
}

/// Title of the visible panel.
pub fn panel_title(view: &AppViewState) -> String {
    match view.panel {
        Panel::Users => "Users".to_string(),
        Panel::Posts => match (view.current_user, view.current_user_id) {
            (Some((username, id)), _) => format!("Posts by {} (user #{})", username, id),
            (None, Some(id)) => format!("Posts of user #{}", id),
            (None, None) => "Posts".to_string(),
        },
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let mut spans = vec![
        Span::styled(
            " postboard ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::raw(panel_title(view)),
    ];

    if view.panel == Panel::Posts {
        if let Some(direction) = view.last_sort {
            spans.push(Span::styled(
                format!("  sorted {}", direction.label()),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    if view.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} loading", spinner_frame(view.tick_count)),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
