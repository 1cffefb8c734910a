//! What a submission hands back to the rest of the application: toasts to
//! show and store actions to dispatch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Screens the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    Deposit,
    Transactions,
}

impl ActiveScreen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Deposit => "Depósito",
            Self::Transactions => "Transações",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    InvoicePayment,
}

impl TransactionKind {
    pub fn from_invoice_payment(invoice_payment: bool) -> Self {
        if invoice_payment {
            Self::InvoicePayment
        } else {
            Self::Deposit
        }
    }

    pub fn is_invoice_payment(&self) -> bool {
        matches!(self, Self::InvoicePayment)
    }
}

/// Transaction the user set out to make, shared across screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub kind: TransactionKind,
}

/// Store actions the deposit flow dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    SetTransactionData(Option<PendingTransaction>),
    ChangeScreen(ActiveScreen),
}

/// Collected toasts and actions, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outbox {
    pub toasts: Vec<Toast>,
    pub actions: Vec<StoreAction>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty() && self.actions.is_empty()
    }
}
