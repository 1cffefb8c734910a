use ratatui::{layout::Rect, Frame};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

use crate::ui::theme;

/// Throbber with an optional label, shown while a submission is in flight
pub fn render_loading_indicator(f: &mut Frame, area: Rect, state: &ThrobberState, label: &str) {
    let throbber = Throbber::default()
        .label(label)
        .style(theme::loading_style())
        .throbber_set(BRAILLE_EIGHT);

    // Rendering advances nothing; the app tick drives the animation
    f.render_stateful_widget(throbber, area, &mut state.clone());
}
