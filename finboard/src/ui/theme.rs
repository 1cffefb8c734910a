//! Theme constants and style functions shared by every screen.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for successful outcomes and inflows
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for failures and validation messages
pub const COLOR_NEGATIVE: Color = Color::Red;

pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

pub const COLOR_HEADER: Color = Color::Yellow;

pub const COLOR_HELP_TEXT: Color = Color::Gray;

pub const COLOR_TITLE: Color = Color::Cyan;

pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for the focused input
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

pub const COLOR_PLACEHOLDER: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

pub const SCREEN_MARGIN: u16 = 2;

pub const TITLE_HEIGHT: u16 = 1;

pub const HELP_BAR_HEIGHT: u16 = 3;

/// Bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Line under each input for its validation message
pub const FIELD_ERROR_HEIGHT: u16 = 1;

pub const SUBMIT_HEIGHT: u16 = 3;

pub const TOAST_WIDTH: u16 = 52;

pub const TABLE_COLUMN_SPACING: u16 = 2;

// =============================================================================
// Style Functions
// =============================================================================

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn input_focused_border_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

pub fn input_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(COLOR_PLACEHOLDER)
}

pub fn field_error_style() -> Style {
    Style::default().fg(COLOR_NEGATIVE)
}

pub fn submit_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Positive = green, negative = red
pub fn amount_color(amount: f64) -> Color {
    if amount < 0.0 {
        COLOR_NEGATIVE
    } else {
        COLOR_POSITIVE
    }
}
