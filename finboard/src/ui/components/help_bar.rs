//! Bottom help bar listing the keys of the current screen.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_DEPOSIT: &str =
    "Tab: próximo campo | Enter: enviar | Ctrl+P: depósito/fatura | Ctrl+T: transações | Esc: sair";

pub const HELP_TEXT_TRANSACTIONS: &str =
    "d: novo depósito | p: pagar fatura | j/k: navegar | q: sair";
