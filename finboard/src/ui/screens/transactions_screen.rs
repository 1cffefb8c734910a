use ratatui::{
    prelude::*,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::deposit::effects::{ActiveScreen, PendingTransaction, TransactionKind};
use crate::state::{PostedTransaction, TransactionsState};
use crate::ui::{components::help_bar, layouts, theme};

pub fn render(
    f: &mut Frame,
    state: &TransactionsState,
    pending: Option<&PendingTransaction>,
) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = Paragraph::new(Span::styled(
        ActiveScreen::Transactions.title(),
        theme::title_style(),
    ));
    f.render_widget(title, title_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(content_area);

    render_pending(f, chunks[0], pending);
    render_posted(f, chunks[1], state);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_TRANSACTIONS);
}

fn render_pending(f: &mut Frame, area: Rect, pending: Option<&PendingTransaction>) {
    let text = match pending {
        Some(p) => Line::from(vec![
            Span::raw("Em andamento: "),
            Span::styled(kind_label(p.kind), theme::loading_style()),
        ]),
        None => Line::from(Span::styled(
            "Nenhuma transação em andamento",
            theme::help_text_style(),
        )),
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_posted(f: &mut Frame, area: Rect, state: &TransactionsState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Realizadas nesta sessão");

    if state.posted.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nenhuma transação realizada",
            theme::help_text_style(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Data"),
        Cell::from("Tipo"),
        Cell::from("Descrição"),
        Cell::from(Text::from("Valor").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state.posted.iter().map(posted_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .row_highlight_style(theme::selection_style())
    .block(block);

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn posted_row(posted: &PostedTransaction) -> Row<'_> {
    let lancamento = &posted.lancamento;
    Row::new(vec![
        Cell::from(lancamento.date.as_str()),
        Cell::from(kind_label(posted.kind)),
        Cell::from(lancamento.description.as_str()),
        Cell::from(
            Text::from(format!("R$ {:.2}", lancamento.amount))
                .right_aligned()
                .style(Style::default().fg(theme::amount_color(lancamento.amount))),
        ),
    ])
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "Depósito",
        TransactionKind::InvoicePayment => "Pagamento de fatura",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_api::endpoints::lancamentos::NewLancamento;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &TransactionsState, pending: Option<&PendingTransaction>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state, pending)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let screen = rendered(&TransactionsState::default(), None);
        assert!(screen.contains("Transações"));
        assert!(screen.contains("Nenhuma transação realizada"));
    }

    #[test]
    fn test_lists_posted_transactions() {
        let mut state = TransactionsState::default();
        state.record(PostedTransaction {
            kind: TransactionKind::InvoicePayment,
            lancamento: NewLancamento {
                account_id: 7.into(),
                date: "2026-10-16".to_string(),
                description: "Fatura outubro".to_string(),
                login: "ana".to_string(),
                plan_id: 33.into(),
                amount: 320.0,
            },
        });

        let pending = PendingTransaction {
            kind: TransactionKind::Deposit,
        };
        let screen = rendered(&state, Some(&pending));
        assert!(screen.contains("Fatura outubro"));
        assert!(screen.contains("R$ 320.00"));
        assert!(screen.contains("Em andamento: Depósito"));
    }
}
