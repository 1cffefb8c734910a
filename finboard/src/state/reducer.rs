use super::{AppState, PostedTransaction};
use crate::deposit::effects::Outbox;
use crate::deposit::validation::Field;
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    let mut outbox = Outbox::new();

    match event {
        DataEvent::DepositPosted { lancamento } => {
            if !state.deposit.controller.is_loading() {
                tracing::warn!("Ignoring deposit result with no submission in flight");
                return;
            }

            // Mode toggles are refused while loading, so this is the mode the
            // transaction was submitted under.
            let kind = state.deposit.controller.kind();
            state.deposit.controller.complete(&mut outbox);
            state.deposit.focus = Field::Date;
            state
                .transactions
                .record(PostedTransaction { kind, lancamento });
        }

        DataEvent::DepositFailed { error } => {
            if !state.deposit.controller.is_loading() {
                tracing::warn!("Ignoring deposit failure with no submission in flight");
                return;
            }

            state.deposit.controller.fail(&error, &mut outbox);
        }
    }

    state.apply_outbox(outbox);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deposit::effects::{
        ActiveScreen, PendingTransaction, ToastLevel, TransactionKind,
    };
    use crate::deposit::{messages, DepositError};
    use chrono::NaiveDate;
    use dashboard_api::endpoints::lancamentos::NewLancamento;
    use dashboard_api::{DashboardApiError, StatusCode};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn submitting_state(invoice_payment: bool) -> AppState {
        let mut state = AppState::new(today());
        state.pending_transaction = Some(PendingTransaction {
            kind: TransactionKind::from_invoice_payment(invoice_payment),
        });

        let controller = &mut state.deposit.controller;
        if invoice_payment {
            controller.toggle_invoice_payment();
        }
        let form = controller.form_mut();
        form.date = "2026-10-16".to_string();
        form.description = "Fatura outubro".to_string();
        form.set_amount("320");

        controller
            .begin_submit(today(), &mut Outbox::new())
            .unwrap();
        state
    }

    fn lancamento() -> NewLancamento {
        NewLancamento {
            account_id: 7.into(),
            date: "2026-10-16".to_string(),
            description: "Fatura outubro".to_string(),
            login: "ana".to_string(),
            plan_id: 33.into(),
            amount: 320.0,
        }
    }

    #[test]
    fn test_posted_moves_to_transactions_and_clears_pending() {
        let mut state = submitting_state(true);

        reduce_data_event(
            &mut state,
            DataEvent::DepositPosted {
                lancamento: lancamento(),
            },
        );

        assert_eq!(state.screen, ActiveScreen::Transactions);
        assert_eq!(state.pending_transaction, None);
        assert!(!state.is_loading());
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].toast.message, "Pagamento realizado");
        assert_eq!(
            state.transactions.posted,
            vec![PostedTransaction {
                kind: TransactionKind::InvoicePayment,
                lancamento: lancamento(),
            }]
        );

        let form = state.deposit.controller.form();
        assert!(form.date.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.amount(), 0.0);
        assert!(form.invoice_payment);
    }

    #[test]
    fn test_failure_keeps_form_and_screen() {
        let mut state = submitting_state(false);

        reduce_data_event(
            &mut state,
            DataEvent::DepositFailed {
                error: Arc::new(DepositError::Api(DashboardApiError::Status {
                    status: StatusCode::BAD_GATEWAY,
                    body: String::new(),
                })),
            },
        );

        assert_eq!(state.screen, ActiveScreen::Deposit);
        assert!(state.pending_transaction.is_some());
        assert!(!state.is_loading());
        assert_eq!(state.toasts[0].toast.level, ToastLevel::Error);
        assert_eq!(state.toasts[0].toast.message, messages::failure(false));
        assert_eq!(state.deposit.controller.form().description, "Fatura outubro");
        assert!(state.transactions.posted.is_empty());
    }

    #[test]
    fn test_stray_result_without_submission_is_ignored() {
        let mut state = AppState::new(today());

        reduce_data_event(
            &mut state,
            DataEvent::DepositPosted {
                lancamento: lancamento(),
            },
        );

        assert_eq!(state.screen, ActiveScreen::Deposit);
        assert!(state.toasts.is_empty());
        assert!(state.transactions.posted.is_empty());
    }
}
