//! Layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    FIELD_ERROR_HEIGHT, HELP_BAR_HEIGHT, INPUT_HEIGHT, SCREEN_MARGIN, SUBMIT_HEIGHT,
    TITLE_HEIGHT, TOAST_WIDTH,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Stack of `fields` inputs, each followed by an error line, then the
/// submit control.
///
/// Returns (input/error pairs, submit_area)
pub fn form_layout(area: Rect, fields: usize) -> (Vec<(Rect, Rect)>, Rect) {
    let mut constraints = Vec::with_capacity(fields * 2 + 2);
    for _ in 0..fields {
        constraints.push(Constraint::Length(INPUT_HEIGHT));
        constraints.push(Constraint::Length(FIELD_ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(SUBMIT_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let pairs = (0..fields)
        .map(|i| (chunks[i * 2], chunks[i * 2 + 1]))
        .collect();

    (pairs, chunks[fields * 2])
}

/// Top-right corner area for `count` stacked toasts.
pub fn toast_area(area: Rect, count: usize) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = (count as u16).saturating_mul(3).min(area.height);

    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}
