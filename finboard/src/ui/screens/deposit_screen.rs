use ratatui::{
    layout::{Alignment, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::deposit::{effects::ActiveScreen, messages, validation::Field};
use crate::state::{DepositScreenState, FORM_FIELDS};
use crate::ui::{
    components::{form_input::FormInput, help_bar, loading_indicator},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &DepositScreenState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());
    let invoice_payment = state.controller.form().invoice_payment;

    render_title(f, title_area, invoice_payment);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(messages::heading(invoice_payment))
        .title_style(theme::title_style());
    let form_area = block.inner(content_area);
    f.render_widget(block, content_area);

    let (inputs, submit_area) = layouts::form_layout(form_area, FORM_FIELDS.len());
    for (field, (input_area, error_area)) in FORM_FIELDS.iter().zip(inputs) {
        FormInput {
            label: field_label(*field),
            value: state.field_text(*field),
            placeholder: field_placeholder(*field),
            focused: state.focus == *field,
            error: state.controller.field_errors().message(*field),
        }
        .render(f, input_area, error_area);
    }

    render_submit(f, submit_area, state, invoice_payment);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_DEPOSIT);
}

fn render_title(f: &mut Frame, area: Rect, invoice_payment: bool) {
    let mode = if invoice_payment {
        "Pagamento de fatura"
    } else {
        "Depósito"
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(ActiveScreen::Deposit.title(), theme::title_style()),
        Span::raw("  "),
        Span::styled(format!("[{}]", mode), theme::help_text_style()),
    ]));
    f.render_widget(title, area);
}

fn render_submit(f: &mut Frame, area: Rect, state: &DepositScreenState, invoice_payment: bool) {
    if state.controller.is_loading() {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        f.render_widget(Block::default().borders(Borders::ALL), area);
        loading_indicator::render_loading_indicator(f, inner, &state.throbber, "Enviando...");
        return;
    }

    let submit = Paragraph::new(messages::submit_label(invoice_payment))
        .style(theme::submit_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(submit, area);
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Date => "Data",
        Field::Description => "Descrição",
        Field::TransferValue => "Valor",
    }
}

fn field_placeholder(field: Field) -> &'static str {
    match field {
        Field::Date => messages::DATE_PLACEHOLDER,
        Field::Description => messages::DESCRIPTION_PLACEHOLDER,
        Field::TransferValue => messages::AMOUNT_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::effects::Outbox;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &DepositScreenState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_deposit_copy() {
        let screen = rendered(&DepositScreenState::default());
        assert!(screen.contains("Realize o seu depósito"));
        assert!(screen.contains("Depositar agora"));
    }

    #[test]
    fn test_renders_field_errors_after_failed_submit() {
        let mut state = DepositScreenState::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut outbox = Outbox::new();
        let err = state.controller.begin_submit(today, &mut outbox).unwrap_err();
        state.controller.fail(&err, &mut outbox);

        let screen = rendered(&state);
        assert!(screen.contains("Obrigatório data"));
    }

    #[test]
    fn test_renders_invoice_payment_copy() {
        let mut state = DepositScreenState::default();
        state.controller.toggle_invoice_payment();

        let screen = rendered(&state);
        assert!(screen.contains("Realize o pagamento da sua fatura"));
        assert!(screen.contains("Pagar agora"));
    }
}
