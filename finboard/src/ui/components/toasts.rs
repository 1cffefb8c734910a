use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::deposit::effects::ToastLevel;
use crate::state::ToastEntry;
use crate::ui::{layouts, theme};

/// Stack active toasts in the top-right corner, newest last
pub fn render_toasts(f: &mut Frame, toasts: &[ToastEntry]) {
    if toasts.is_empty() {
        return;
    }

    let area = layouts::toast_area(f.area(), toasts.len());
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); toasts.len()])
        .split(area);

    for (entry, slot) in toasts.iter().zip(slots.iter()) {
        let (title, color) = match entry.toast.level {
            ToastLevel::Success => ("Sucesso", theme::COLOR_POSITIVE),
            ToastLevel::Error => ("Erro", theme::COLOR_NEGATIVE),
        };

        let toast = Paragraph::new(entry.toast.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            );

        f.render_widget(Clear, *slot);
        f.render_widget(toast, *slot);
    }
}
