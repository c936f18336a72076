use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_FOCUS};

/// A single-line text field used by the post forms.
///
/// Features:
/// - Insert, delete, backspace and bracketed-paste insertion
/// - Cursor movement (left/right/home/end)
/// - Horizontal scrolling when text exceeds widget width
///
/// The cursor is a character index, never a byte offset, so titles with
/// multi-byte characters edit correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in characters
    cursor_position: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `content`, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_content(content.into());
        field
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert pasted text. Newlines are folded to spaces since the field is single-line.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete the character at the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_position = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// First visible character so the cursor stays inside `visible_width` cells.
    fn scroll_offset(&self, visible_width: usize) -> usize {
        if visible_width == 0 || self.cursor_position < visible_width {
            0
        } else {
            self.cursor_position - visible_width + 1
        }
    }

    /// Render the field inside a bordered block titled `label`
    pub fn render_with_label(&self, area: Rect, buf: &mut Buffer, label: &str, focused: bool) {
        let border_color = if focused { COLOR_FOCUS } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(label.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let scroll_offset = self.scroll_offset(width);
        let visible: String = self
            .content
            .chars()
            .skip(scroll_offset)
            .take(width)
            .map(display_char)
            .collect();
        buf.set_string(inner.x, inner.y, &visible, Style::default().fg(COLOR_ACCENT));

        if focused {
            let cursor_x = (self.cursor_position - scroll_offset) as u16;
            if cursor_x < inner.width {
                let cursor_char = self
                    .content
                    .chars()
                    .nth(self.cursor_position)
                    .map(display_char)
                    .unwrap_or(' ');
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y,
                    cursor_char.to_string(),
                    Style::default().fg(ratatui::style::Color::Black).bg(COLOR_CURSOR),
                );
            }
        }
    }
}

/// One cell per stored char: control characters (prefilled bodies keep
/// their newlines) are drawn as spaces so the cursor column stays aligned.
fn display_char(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}

/// A renderable wrapper for [`TextField`] that implements the Widget trait
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    label: &'a str,
    focused: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(field: &'a TextField, label: &'a str, focused: bool) -> Self {
        Self {
            field,
            label,
            focused,
        }
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.field.render_with_label(area, buf, self.label, self.focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        field.insert_char('H');
        field.insert_char('i');
        assert_eq!(field.content(), "Hi");
        field.backspace();
        assert_eq!(field.content(), "H");
        assert_eq!(field.cursor_position(), 1);
    }

    #[test]
    fn test_with_content_puts_cursor_at_end() {
        let field = TextField::with_content("Hello");
        assert_eq!(field.cursor_position(), 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::with_content("café");
        field.move_cursor_left();
        field.delete_char();
        assert_eq!(field.content(), "caf");
        field.insert_char('é');
        field.insert_char('s');
        assert_eq!(field.content(), "cafés");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = TextField::with_content("X");
        field.move_cursor_home();
        field.move_cursor_left();
        assert_eq!(field.cursor_position(), 0);
        field.move_cursor_end();
        field.move_cursor_right();
        assert_eq!(field.cursor_position(), 1);
    }

    #[test]
    fn test_paste_folds_newlines() {
        let mut field = TextField::new();
        field.insert_str("line one\r\nline two");
        assert_eq!(field.content(), "line one line two");
    }

    #[test]
    fn test_clear() {
        let mut field = TextField::with_content("Hello World");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor_position(), 0);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let field = TextField::with_content("abcdefghij");
        assert_eq!(field.scroll_offset(4), 7);
        assert_eq!(field.scroll_offset(20), 0);
    }

    #[test]
    fn test_render_shows_tail_when_scrolled() {
        let field = TextField::with_content("abcdefghij");
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        TextFieldWidget::new(&field, "Title", true).render(area, &mut buf);
        let row: String = (1..5).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "hij ");
    }

    #[test]
    fn test_prefilled_newlines_render_as_spaces() {
        let field = TextField::with_content("ab\ncd");
        assert_eq!(field.content(), "ab\ncd");

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        TextFieldWidget::new(&field, "Body", true).render(area, &mut buf);

        let row: String = (1..7).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "ab cd ");
        // cursor sits just past "cd"
        assert_eq!(buf[(6, 1)].bg, COLOR_CURSOR);
    }
}
