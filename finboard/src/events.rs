use crate::deposit::DepositError;
use dashboard_api::endpoints::lancamentos::NewLancamento;
use std::sync::Arc;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Deposit form
    FocusNextField,
    FocusPreviousField,
    AppendFieldChar(char),
    DeleteFieldChar,
    ClearField,
    ToggleInvoicePayment,
    SubmitDeposit,

    // Navigation
    ShowTransactions,
    OpenDeposit { invoice_payment: bool },
    SelectNext,
    SelectPrevious,

    DismissToasts,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    DepositPosted { lancamento: NewLancamento },
    DepositFailed { error: Arc<DepositError> },
}
