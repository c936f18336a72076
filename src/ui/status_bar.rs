//! Status line and key-hint footer.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};
use crate::state::Panel;
use crate::view_state::AppViewState;

pub fn render_status(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let Some(status) = view.status else {
        return;
    };
    let color = if status.is_error() { COLOR_ERROR } else { COLOR_SUCCESS };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status.at.format("%H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(status.text.as_str(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_hints(frame: &mut Frame, area: Rect, view: &AppViewState) {
    frame.render_widget(
        Paragraph::new(key_hints(view)).style(Style::default().fg(COLOR_DIM)),
        area,
    );
}

/// Key hints for the current context.
pub fn key_hints(view: &AppViewState) -> &'static str {
    if view.form.is_some() {
        return " Tab switch field · Enter submit · Esc cancel";
    }
    match view.panel {
        Panel::Users => " ↑↓ move · Enter view posts · r reload · q quit",
        Panel::Posts => {
            " ↑↓ move · s sort · n new · e edit · d delete · r refresh · Esc back · q quit"
        }
    }
}
