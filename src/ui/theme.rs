//! Color theme constants for the postboard UI.

use ratatui::style::Color;

/// Panel and inactive field borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Regular foreground text
pub const COLOR_ACCENT: Color = Color::White;

/// Header / app name
pub const COLOR_HEADER: Color = Color::Cyan;

/// Border of the focused form field
pub const COLOR_FOCUS: Color = Color::Cyan;

/// Text cursor block
pub const COLOR_CURSOR: Color = Color::Magenta;

/// Dim text for secondary info (addresses, bodies, key hints)
pub const COLOR_DIM: Color = Color::Gray;

/// Background of the selected row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 60);

/// Post titles and usernames
pub const COLOR_TITLE: Color = Color::LightYellow;

/// Status bar: success/info
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Status bar: errors
pub const COLOR_ERROR: Color = Color::Red;
