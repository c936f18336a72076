//! Users panel: one entry per user with its address.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG, COLOR_TITLE};
use crate::view_state::{AppViewState, UserRow};

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Users ");

    if view.users.is_empty() {
        let text = if view.loading {
            "Loading users…"
        } else {
            "No users. Press r to reload."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(COLOR_DIM)).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view.users.iter().map(user_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(view.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn user_item<'a>(user: &UserRow<'a>) -> ListItem<'a> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            user.username,
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  #{}", user.id), Style::default().fg(COLOR_DIM)),
    ])];
    lines.extend(
        user.address
            .iter()
            .map(|line| Line::from(Span::styled(format!("  {}", line), Style::default().fg(COLOR_DIM)))),
    );
    lines.push(Line::from(""));
    ListItem::new(lines)
}
