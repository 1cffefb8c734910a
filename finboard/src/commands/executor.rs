use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::deposit::effects::{ActiveScreen, Outbox, PendingTransaction, TransactionKind};
use crate::deposit::DepositDraft;
use crate::events::AppCommand;
use crate::state::AppState;

/// Execute a command, spawning the network phase of a submission as a
/// background task
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    match command {
        AppCommand::SubmitDeposit => {
            if let Some(draft) = begin_deposit(state) {
                let data_loader = data_loader.clone();
                let today = state.today;
                let future = async move {
                    data_loader.post_deposit(today, draft).await;
                };

                task_manager.spawn_task("post_deposit", future);
            }
        }
        command => execute_command_sync(command, state),
    }
}

/// Synchronous command execution (no background tasks)
///
/// `SubmitDeposit` runs validation and raises the loading flag but does not
/// post; tests inject the matching `DataEvent` instead.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        AppCommand::Quit => state.should_quit = true,
        AppCommand::DismissToasts => state.toasts.clear(),

        AppCommand::FocusNextField => state.deposit.focus_next(),
        AppCommand::FocusPreviousField => state.deposit.focus_prev(),
        AppCommand::AppendFieldChar(c) => state.deposit.append_char(c),
        AppCommand::DeleteFieldChar => state.deposit.delete_char(),
        AppCommand::ClearField => state.deposit.clear_field(),

        AppCommand::ToggleInvoicePayment => {
            if state.deposit.controller.toggle_invoice_payment() {
                tracing::debug!(
                    "Invoice payment mode: {}",
                    state.deposit.controller.form().invoice_payment
                );
            }
        }

        AppCommand::SubmitDeposit => {
            begin_deposit(state);
        }

        AppCommand::ShowTransactions => {
            if !state.is_loading() {
                state.screen = ActiveScreen::Transactions;
            }
        }

        AppCommand::OpenDeposit { invoice_payment } => {
            if state.is_loading() {
                return;
            }
            let kind = TransactionKind::from_invoice_payment(invoice_payment);
            tracing::debug!("Opening form for {:?}", kind);

            state.pending_transaction = Some(PendingTransaction { kind });
            if state.deposit.controller.form().invoice_payment != invoice_payment {
                state.deposit.controller.toggle_invoice_payment();
            }
            state.screen = ActiveScreen::Deposit;
        }

        AppCommand::SelectNext => state.transactions.select_next(),
        AppCommand::SelectPrevious => state.transactions.select_prev(),
    }
}

/// First phase of a submission: validate on the UI loop. Failures settle
/// immediately; a draft is returned only when the network phase should run.
fn begin_deposit(state: &mut AppState) -> Option<DepositDraft> {
    let mut outbox = Outbox::new();
    let today = state.today;
    let controller = &mut state.deposit.controller;

    let draft = match controller.begin_submit(today, &mut outbox) {
        Ok(draft) => Some(draft),
        Err(e) => {
            controller.fail(&e, &mut outbox);
            None
        }
    };

    state.apply_outbox(outbox);
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::messages;
    use crate::deposit::validation::Field;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            execute_command_sync(AppCommand::AppendFieldChar(c), state);
        }
    }

    #[test]
    fn test_submit_with_valid_form_raises_loading() {
        let mut state = state();
        type_text(&mut state, "2026-10-16");
        execute_command_sync(AppCommand::FocusNextField, &mut state);
        type_text(&mut state, "Mesada");
        execute_command_sync(AppCommand::FocusNextField, &mut state);
        type_text(&mut state, "200");

        let draft = begin_deposit(&mut state).unwrap();

        assert!(state.is_loading());
        assert!(state.toasts.is_empty());
        assert_eq!(draft.amount, 200.0);
        assert_eq!(draft.kind, TransactionKind::Deposit);
    }

    #[test]
    fn test_submit_with_empty_form_settles_immediately() {
        let mut state = state();

        execute_command_sync(AppCommand::SubmitDeposit, &mut state);

        assert!(!state.is_loading());
        let messages: Vec<_> = state.toasts.iter().map(|t| t.toast.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                messages::INVALID_DATE.to_string(),
                messages::INVALID_AMOUNT.to_string(),
                messages::failure(false),
            ]
        );
        let errors = state.deposit.controller.field_errors();
        assert!(errors.contains(Field::Date));
        assert!(errors.contains(Field::Description));
        assert!(errors.contains(Field::TransferValue));
    }

    #[test]
    fn test_open_invoice_payment_sets_pending_and_mode() {
        let mut state = state();
        state.screen = ActiveScreen::Transactions;

        execute_command_sync(
            AppCommand::OpenDeposit {
                invoice_payment: true,
            },
            &mut state,
        );

        assert_eq!(state.screen, ActiveScreen::Deposit);
        assert!(state.deposit.controller.form().invoice_payment);
        assert_eq!(
            state.pending_transaction,
            Some(PendingTransaction {
                kind: TransactionKind::InvoicePayment
            })
        );

        execute_command_sync(
            AppCommand::OpenDeposit {
                invoice_payment: false,
            },
            &mut state,
        );
        assert!(!state.deposit.controller.form().invoice_payment);
    }

    #[test]
    fn test_show_transactions_refused_while_loading() {
        let mut state = state();
        type_text(&mut state, "2026-10-16");
        state.deposit.focus_next();
        type_text(&mut state, "Mesada");
        state.deposit.focus_next();
        type_text(&mut state, "20");
        execute_command_sync(AppCommand::SubmitDeposit, &mut state);

        execute_command_sync(AppCommand::ShowTransactions, &mut state);

        assert_eq!(state.screen, ActiveScreen::Deposit);
    }
}
