//! The add/edit post form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

use super::theme::{COLOR_FOCUS, COLOR_HEADER};
use crate::app::{FormField, FormKind, PostForm};
use crate::models::Id;
use crate::widgets::TextFieldWidget;

/// Rows taken by the form: outer border plus two 3-row fields.
pub const FORM_HEIGHT: u16 = 8;

pub fn form_title(form: &PostForm, post_id: Option<Id>) -> String {
    match (form.kind, post_id) {
        (FormKind::Create, _) => " Add Post ".to_string(),
        (FormKind::Edit, Some(id)) => format!(" Edit Post #{} ", id),
        (FormKind::Edit, None) => " Edit Post ".to_string(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, form: &PostForm, post_id: Option<Id>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_FOCUS))
        .title(form_title(form, post_id))
        .title_style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    frame.render_widget(
        TextFieldWidget::new(&form.title, "Title", form.focus == FormField::Title),
        rows[0],
    );
    frame.render_widget(
        TextFieldWidget::new(&form.body, "Body", form.focus == FormField::Body),
        rows[1],
    );
}
