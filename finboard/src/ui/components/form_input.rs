use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// One labelled form input
pub struct FormInput<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub error: Option<&'a str>,
}

impl FormInput<'_> {
    pub fn render(&self, f: &mut Frame, input_area: Rect, error_area: Rect) {
        let border_style = if self.focused {
            theme::input_focused_border_style()
        } else {
            theme::help_text_style()
        };

        let mut spans = if self.value.is_empty() {
            vec![Span::styled(self.placeholder, theme::placeholder_style())]
        } else {
            vec![Span::styled(self.value, theme::input_style())]
        };
        if self.focused {
            spans.push(Span::styled("▏", theme::input_focused_border_style()));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(self.label),
        );
        f.render_widget(input, input_area);

        if let Some(error) = self.error {
            let error = Paragraph::new(Span::styled(error, theme::field_error_style()));
            f.render_widget(error, error_area);
        }
    }
}
