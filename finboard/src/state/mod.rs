pub mod reducer;

use crate::deposit::effects::{
    ActiveScreen, Outbox, PendingTransaction, StoreAction, Toast, TransactionKind,
};
use crate::deposit::validation::Field;
use crate::deposit::DepositController;
use chrono::NaiveDate;
use dashboard_api::endpoints::lancamentos::NewLancamento;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Render ticks a toast stays on screen (the loop ticks every 100ms).
pub const TOAST_TTL_TICKS: u16 = 40;

/// Focus order of the deposit form inputs
pub const FORM_FIELDS: [Field; 3] = [Field::Date, Field::Description, Field::TransferValue];

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub toast: Toast,
    pub ttl: u16,
}

impl ToastEntry {
    pub fn new(toast: Toast) -> Self {
        Self {
            toast,
            ttl: TOAST_TTL_TICKS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: ActiveScreen,
    pub deposit: DepositScreenState,
    pub transactions: TransactionsState,

    /// Transaction the user set out to make, if any
    pub pending_transaction: Option<PendingTransaction>,

    pub toasts: Vec<ToastEntry>,

    /// Day submissions are checked against
    pub today: NaiveDate,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            screen: ActiveScreen::default(),
            deposit: DepositScreenState::default(),
            transactions: TransactionsState::default(),
            pending_transaction: None,
            toasts: Vec::new(),
            today,
            should_quit: false,
        }
    }

    pub fn push_toast(&mut self, toast: Toast) {
        tracing::debug!("Toast: {:?}", toast);
        self.toasts.push(ToastEntry::new(toast));
    }

    /// Apply what a submission emitted: toasts first, then store actions in
    /// the order they were dispatched.
    pub fn apply_outbox(&mut self, outbox: Outbox) {
        for toast in outbox.toasts {
            self.push_toast(toast);
        }

        for action in outbox.actions {
            tracing::info!("Store action: {:?}", action);
            match action {
                StoreAction::SetTransactionData(pending) => self.pending_transaction = pending,
                StoreAction::ChangeScreen(screen) => self.screen = screen,
            }
        }
    }

    /// Advance timers: expire toasts and spin the throbber while loading.
    pub fn tick(&mut self) {
        for entry in &mut self.toasts {
            entry.ttl = entry.ttl.saturating_sub(1);
        }
        self.toasts.retain(|entry| entry.ttl > 0);

        if let Some(throbber_state) = self.loading_state() {
            throbber_state.calc_next();
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        if self.deposit.controller.is_loading() {
            Some(&mut self.deposit.throbber)
        } else {
            None
        }
    }

    pub fn is_loading(&self) -> bool {
        self.deposit.controller.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

#[derive(Debug, Clone)]
pub struct DepositScreenState {
    pub controller: DepositController,
    pub focus: Field,
    pub throbber: ThrobberState,
}

impl Default for DepositScreenState {
    fn default() -> Self {
        Self {
            controller: DepositController::new(false),
            focus: Field::Date,
            throbber: ThrobberState::default(),
        }
    }
}

impl DepositScreenState {
    pub fn focus_next(&mut self) {
        let index = field_index(self.focus);
        self.focus = FORM_FIELDS[(index + 1) % FORM_FIELDS.len()];
    }

    pub fn focus_prev(&mut self) {
        let index = field_index(self.focus);
        self.focus = FORM_FIELDS[(index + FORM_FIELDS.len() - 1) % FORM_FIELDS.len()];
    }

    /// Text shown in the input for `field`
    pub fn field_text(&self, field: Field) -> &str {
        let form = self.controller.form();
        match field {
            Field::Date => &form.date,
            Field::Description => &form.description,
            Field::TransferValue => form.amount_input(),
        }
    }

    pub fn append_char(&mut self, c: char) {
        let focus = self.focus;
        self.edit_focused(|text| text.push(c), focus);
    }

    pub fn delete_char(&mut self) {
        let focus = self.focus;
        self.edit_focused(
            |text| {
                text.pop();
            },
            focus,
        );
    }

    pub fn clear_field(&mut self) {
        let focus = self.focus;
        self.edit_focused(String::clear, focus);
    }

    // The amount always goes through the form's change handler so the cap
    // applies to every keystroke.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String), field: Field) {
        let form = self.controller.form_mut();
        match field {
            Field::Date => edit(&mut form.date),
            Field::Description => edit(&mut form.description),
            Field::TransferValue => {
                let mut raw = form.amount_input().to_string();
                edit(&mut raw);
                form.set_amount(&raw);
            }
        }
    }
}

fn field_index(field: Field) -> usize {
    FORM_FIELDS.iter().position(|f| *f == field).unwrap_or(0)
}

/// A transaction booked during this session
#[derive(Debug, Clone, PartialEq)]
pub struct PostedTransaction {
    pub kind: TransactionKind,
    pub lancamento: NewLancamento,
}

#[derive(Default, Debug, Clone)]
pub struct TransactionsState {
    /// Most recent first
    pub posted: Vec<PostedTransaction>,
    pub table_state: RefCell<TableState>,
}

impl TransactionsState {
    pub fn record(&mut self, posted: PostedTransaction) {
        self.posted.insert(0, posted);
        self.table_state.borrow_mut().select(Some(0));
    }

    pub fn select_prev(&mut self) {
        let num_items = self.posted.len();
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            let selected = table_state.selected().unwrap_or(0);
            table_state.select(Some(if selected == 0 { num_items - 1 } else { selected - 1 }));
        }
    }

    pub fn select_next(&mut self) {
        let num_items = self.posted.len();
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            let selected = table_state.selected().unwrap_or(num_items - 1);
            table_state.select(Some((selected + 1) % num_items));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::effects::ToastLevel;

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut deposit = DepositScreenState::default();
        deposit.focus_prev();
        assert_eq!(deposit.focus, Field::TransferValue);
        deposit.focus_next();
        assert_eq!(deposit.focus, Field::Date);
        deposit.focus_next();
        assert_eq!(deposit.focus, Field::Description);
    }

    #[test]
    fn test_typing_amount_goes_through_cap() {
        let mut deposit = DepositScreenState {
            focus: Field::TransferValue,
            ..Default::default()
        };
        for c in "123456".chars() {
            deposit.append_char(c);
        }
        assert_eq!(deposit.controller.form().amount(), 10_000.0);
        assert_eq!(deposit.field_text(Field::TransferValue), "10000");

        deposit.delete_char();
        assert_eq!(deposit.controller.form().amount(), 1000.0);
    }

    #[test]
    fn test_clear_field_only_touches_focused_input() {
        let mut deposit = DepositScreenState::default();
        deposit.append_char('x');
        deposit.focus_next();
        deposit.append_char('y');

        deposit.clear_field();

        assert_eq!(deposit.field_text(Field::Date), "x");
        assert_eq!(deposit.field_text(Field::Description), "");
    }

    #[test]
    fn test_apply_outbox_runs_actions_in_order() {
        let mut state = AppState::default();
        state.pending_transaction = Some(PendingTransaction {
            kind: TransactionKind::InvoicePayment,
        });

        let mut outbox = Outbox::new();
        outbox.dispatch(StoreAction::SetTransactionData(None));
        outbox.dispatch(StoreAction::ChangeScreen(ActiveScreen::Transactions));
        outbox.toast(Toast::success("ok"));
        state.apply_outbox(outbox);

        assert_eq!(state.pending_transaction, None);
        assert_eq!(state.screen, ActiveScreen::Transactions);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].toast.level, ToastLevel::Success);
    }

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut state = AppState::default();
        state.push_toast(Toast::error("falhou"));

        for _ in 0..TOAST_TTL_TICKS - 1 {
            state.tick();
        }
        assert_eq!(state.toasts.len(), 1);

        state.tick();
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_posted_selection_wraps() {
        let mut transactions = TransactionsState::default();
        transactions.select_next();
        assert_eq!(transactions.table_state.borrow().selected(), None);

        for id in 0..2 {
            transactions.record(PostedTransaction {
                kind: TransactionKind::Deposit,
                lancamento: NewLancamento {
                    account_id: 1.into(),
                    date: "2026-10-16".to_string(),
                    description: format!("Depósito {}", id),
                    login: "ana".to_string(),
                    plan_id: 1.into(),
                    amount: 10.0,
                },
            });
        }

        transactions.select_prev();
        assert_eq!(transactions.table_state.borrow().selected(), Some(1));
        transactions.select_next();
        assert_eq!(transactions.table_state.borrow().selected(), Some(0));
    }
}
