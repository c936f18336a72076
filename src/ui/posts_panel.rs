//! Posts panel: the current user's posts.
//!
//! The edit form takes the place of the row being edited. The add form is
//! docked at the bottom of the panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::form::{self, FORM_HEIGHT};
use super::helpers::{first_line, truncate_to_width};
use super::panel_title;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG, COLOR_TITLE};
use crate::app::FormKind;
use crate::view_state::{AppViewState, PostRow};

/// Lines per post row: title and first body line.
const ROW_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let Some(form) = view.form else {
        render_list(frame, area, view, None);
        return;
    };

    let editing_row = match form.kind {
        FormKind::Edit => view.posts.iter().position(|post| post.editing),
        FormKind::Create => None,
    };

    match editing_row {
        Some(row) => {
            if let Some(form_area) = render_list(frame, area, view, Some(row)) {
                form::render(frame, form_area, form, view.current_post_id);
            }
        }
        None => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(FORM_HEIGHT)])
                .split(area);
            render_list(frame, chunks[0], view, None);
            form::render(frame, chunks[1], form, view.current_post_id);
        }
    }
}

/// Draw the list. With `inline_row`, that row is left blank at form height
/// and its on-screen area is returned.
fn render_list(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewState,
    inline_row: Option<usize>,
) -> Option<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", panel_title(view)));
    let inner = block.inner(area);

    if view.posts.is_empty() {
        let text = if view.loading {
            "Loading posts…"
        } else {
            "No posts. Press n to add one."
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(COLOR_DIM)).block(block),
            area,
        );
        return None;
    }

    // Two cells of border plus the highlight symbol
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = view
        .posts
        .iter()
        .enumerate()
        .map(|(i, post)| match inline_row {
            Some(row) if row == i => ListItem::new(vec![Line::from(""); FORM_HEIGHT as usize]),
            _ => post_item(post, text_width),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▶ ");

    // Keep the inline form scrolled into view
    let selected = inline_row.unwrap_or(view.selected_index);
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);

    let row = inline_row?;
    let offset = state.offset().min(row);
    let y = inner.y + ROW_HEIGHT * (row - offset) as u16;
    let height = FORM_HEIGHT.min(inner.bottom().saturating_sub(y));
    (height > 0).then(|| Rect::new(inner.x, y, inner.width, height))
}

fn post_item<'a>(post: &PostRow<'a>, width: usize) -> ListItem<'a> {
    let title = vec![
        Span::styled(
            truncate_to_width(post.title, width.saturating_sub(8)),
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  #{}", post.id), Style::default().fg(COLOR_DIM)),
    ];

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(
            truncate_to_width(first_line(post.body), width),
            Style::default().fg(COLOR_DIM),
        )),
    ])
}
