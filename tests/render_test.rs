//! Full-screen render checks with ratatui's TestBackend.

mod common;

use common::{post, user};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postboard::adapters::MockHttpClient;
use postboard::app::App;
use postboard::gateway::PlaceholderClient;
use postboard::state::ViewEvent;
use postboard::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::Arc;

fn app() -> App {
    let mut app = App::new(PlaceholderClient::new(Arc::new(MockHttpClient::new())));
    app.users = vec![user(1, "Bret"), user(3, "Samantha")];
    app
}

fn app_with_posts() -> App {
    let mut app = app();
    app.view = app.view.apply(ViewEvent::ViewPostsClicked(3));
    app.posts = vec![
        post(21, "banana", "first body\nsecond line"),
        post(22, "Apple", "apple body"),
    ];
    app.displayed_titles = app.posts.iter().map(|p| p.title.clone()).collect();
    app
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_users_panel_shows_users_and_addresses() {
    let screen = render(&app());

    assert!(screen.contains("Users"));
    assert!(screen.contains("Bret"));
    assert!(screen.contains("Samantha"));
    assert!(screen.contains("Kulas Light"));
    assert!(screen.contains("92998-3874"));
    assert!(!screen.contains("Posts by"));
}

#[test]
fn test_posts_panel_hides_users() {
    let screen = render(&app_with_posts());

    assert!(screen.contains("Posts by Samantha"));
    assert!(screen.contains("banana"));
    assert!(screen.contains("first body"));
    assert!(!screen.contains("second line"));
    assert!(!screen.contains("Kulas Light"));
}

#[test]
fn test_sorted_titles_rendered_in_order() {
    let mut app = app_with_posts();
    app.toggle_sort();
    let screen = render(&app);

    let apple = screen.find("Apple").unwrap();
    let banana = screen.find("banana").unwrap();
    assert!(apple < banana);
    assert!(screen.contains("A→Z"));
}

#[test]
fn test_add_form_rendered() {
    let mut app = app_with_posts();
    app.open_create_form();
    for c in "Hello".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    let screen = render(&app);

    assert!(screen.contains("Add Post"));
    assert!(screen.contains("Title"));
    assert!(screen.contains("Hello"));
    assert!(screen.contains("Enter submit"));
}

#[test]
fn test_edit_form_replaces_row_in_place() {
    let mut app = app_with_posts();
    app.open_edit_form();
    let screen = render(&app);

    let form = screen.find("Edit Post #21").unwrap();
    let next_row = screen.find("Apple").unwrap();
    assert!(form < next_row, "edit form should sit where post #21 was");
    // Row 0 is replaced by the form; the body field shows its text
    assert!(!screen.contains("banana  #21"));
    assert!(screen.contains("first body second line"));
}

#[test]
fn test_edit_form_on_later_row_keeps_earlier_rows() {
    let mut app = app_with_posts();
    app.posts_index = 1;
    app.open_edit_form();
    let screen = render(&app);

    let earlier = screen.find("banana").unwrap();
    let form = screen.find("Edit Post #22").unwrap();
    assert!(earlier < form);
    assert!(!screen.contains("Apple  #22"));
}

#[test]
fn test_loading_placeholder() {
    let mut app = app();
    app.users.clear();
    app.users_loading = true;
    let screen = render(&app);

    assert!(screen.contains("Loading users"));
}
