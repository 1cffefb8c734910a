//! Deposit / invoice-payment submission.
//!
//! A submission runs in three phases so the network part can live on a
//! background task while form state stays on the UI loop:
//!
//! 1. [`DepositController::begin_submit`] raises the loading flag, runs the
//!    date and amount pre-checks and the schema, and yields a [`DepositDraft`].
//! 2. [`post_deposit`] fetches the account, fetches the category list and
//!    posts the transaction, strictly in that order.
//! 3. [`DepositController::complete`] or [`DepositController::fail`] emits
//!    toasts and store actions and lowers the loading flag.
//!
//! [`DepositController::submit`] chains the three for callers that own both
//! the form and the API handle.

pub mod effects;
pub mod form;
pub mod messages;
pub mod validation;

use chrono::NaiveDate;
use dashboard_api::endpoints::dashboard::Contas;
use dashboard_api::endpoints::lancamentos::{NewLancamento, Plano};
use dashboard_api::{Client, DashboardApiError, Request};
use effects::{ActiveScreen, Outbox, StoreAction, Toast, TransactionKind};
use form::DepositForm;
use std::future::Future;
use thiserror::Error;
use validation::{deposit_schema, FieldErrors, ValidationError};

/// Position of the deposit category in the server's category list.
pub const DEPOSIT_PLAN_INDEX: usize = 0;
/// Position of the invoice-payment category in the server's category list.
pub const INVOICE_PAYMENT_PLAN_INDEX: usize = 2;

/// Remote calls a submission makes.
pub trait DepositApi {
    fn fetch_accounts(
        &self,
        login: &str,
        day: NaiveDate,
    ) -> impl Future<Output = Result<Contas, DashboardApiError>> + Send;

    fn fetch_plans(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Vec<Plano>, DashboardApiError>> + Send;

    fn post_lancamento(
        &self,
        lancamento: NewLancamento,
    ) -> impl Future<Output = Result<(), DashboardApiError>> + Send;
}

impl DepositApi for Client {
    async fn fetch_accounts(
        &self,
        login: &str,
        day: NaiveDate,
    ) -> Result<Contas, DashboardApiError> {
        self.send(Request::dashboard().get(login, day)).await
    }

    async fn fetch_plans(&self, login: &str) -> Result<Vec<Plano>, DashboardApiError> {
        self.send(Request::lancamentos().plans(login)).await
    }

    async fn post_lancamento(&self, lancamento: NewLancamento) -> Result<(), DashboardApiError> {
        self.send(Request::lancamentos().create(lancamento))
            .await
            .map(|_| ())
    }
}

/// Session-derived inputs of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContext {
    pub login: String,
    pub today: NaiveDate,
}

impl SubmitContext {
    pub fn new(login: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            login: login.into(),
            today,
        }
    }

    pub fn for_today(login: impl Into<String>) -> Self {
        Self::new(login, chrono::Local::now().date_naive())
    }
}

/// Validated, trimmed form values ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositDraft {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl DepositDraft {
    pub fn plan_index(&self) -> usize {
        match self.kind {
            TransactionKind::Deposit => DEPOSIT_PLAN_INDEX,
            TransactionKind::InvoicePayment => INVOICE_PAYMENT_PLAN_INDEX,
        }
    }
}

#[derive(Error, Debug)]
pub enum DepositError {
    #[error("a submission is already in progress")]
    InFlight,

    #[error("date or amount rejected before submission")]
    Aborted,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("category list has no entry at position {index} (got {len})")]
    MissingPlan { index: usize, len: usize },

    #[error(transparent)]
    Api(#[from] DashboardApiError),
}

impl DepositError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(e) => Some(&e.errors),
            _ => None,
        }
    }
}

/// Fetch the account and category list, then post the transaction.
pub async fn post_deposit<A: DepositApi>(
    api: &A,
    ctx: &SubmitContext,
    draft: &DepositDraft,
) -> Result<NewLancamento, DepositError> {
    tracing::debug!("Fetching account context for {}", ctx.login);
    let contas = api.fetch_accounts(&ctx.login, ctx.today).await?;

    tracing::debug!("Fetching category list for {}", ctx.login);
    let plans = api.fetch_plans(&ctx.login).await?;

    let index = draft.plan_index();
    let plan = plans.get(index).ok_or(DepositError::MissingPlan {
        index,
        len: plans.len(),
    })?;

    let lancamento = NewLancamento {
        account_id: contas.bank_account.id,
        date: draft.date.clone(),
        description: draft.description.clone(),
        login: ctx.login.clone(),
        plan_id: plan.id,
        amount: draft.amount,
    };

    tracing::info!(
        "Posting {:?} of {} to account {} under category {}",
        draft.kind,
        lancamento.amount,
        lancamento.account_id,
        lancamento.plan_id
    );
    api.post_lancamento(lancamento.clone()).await?;

    Ok(lancamento)
}

/// Form controller: owns the form, the loading flag and the per-field errors.
#[derive(Debug, Clone, Default)]
pub struct DepositController {
    form: DepositForm,
    loading: bool,
    field_errors: FieldErrors,
}

impl DepositController {
    pub fn new(invoice_payment: bool) -> Self {
        Self {
            form: DepositForm::new(invoice_payment),
            ..Default::default()
        }
    }

    pub fn form(&self) -> &DepositForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DepositForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_invoice_payment(self.form.invoice_payment)
    }

    /// Switch between deposit and invoice payment. Ignored while loading.
    pub fn toggle_invoice_payment(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.form.invoice_payment = !self.form.invoice_payment;
        true
    }

    /// Raise the loading flag and validate the form.
    ///
    /// Both pre-checks and the schema always run, so a single attempt can
    /// report a pre-check toast and field errors together. A second call
    /// while loading is rejected with [`DepositError::InFlight`] and changes
    /// nothing.
    pub fn begin_submit(
        &mut self,
        today: NaiveDate,
        outbox: &mut Outbox,
    ) -> Result<DepositDraft, DepositError> {
        if self.loading {
            tracing::warn!("Submit ignored, a submission is already in progress");
            return Err(DepositError::InFlight);
        }

        self.loading = true;
        self.field_errors.clear();

        let mut abort = false;

        if !form::is_acceptable_date(&self.form.date, today) {
            outbox.toast(Toast::error(messages::INVALID_DATE));
            abort = true;
        }

        if !form::is_acceptable_amount(self.form.amount()) {
            outbox.toast(Toast::error(messages::INVALID_AMOUNT));
            abort = true;
        }

        deposit_schema().validate(&self.form.field_values())?;

        if abort {
            return Err(DepositError::Aborted);
        }

        Ok(DepositDraft {
            date: self.form.date.trim().to_string(),
            description: self.form.description.trim().to_string(),
            amount: self.form.amount(),
            kind: self.kind(),
        })
    }

    /// Successful post: clear the pending transaction, move to the
    /// transactions screen and reset the entered values.
    pub fn complete(&mut self, outbox: &mut Outbox) {
        let invoice_payment = self.form.invoice_payment;

        outbox.dispatch(StoreAction::SetTransactionData(None));
        outbox.dispatch(StoreAction::ChangeScreen(ActiveScreen::Transactions));
        outbox.toast(Toast::success(messages::success(invoice_payment)));

        self.form.clear();
        self.loading = false;
        tracing::info!("{:?} completed", self.kind());
    }

    pub fn fail(&mut self, error: &DepositError, outbox: &mut Outbox) {
        if matches!(error, DepositError::InFlight) {
            return;
        }

        tracing::error!("{:?} failed: {}", self.kind(), error);
        outbox.toast(Toast::error(messages::failure(self.form.invoice_payment)));

        if let Some(errors) = error.field_errors() {
            self.field_errors = errors.clone();
        }
        self.loading = false;
    }

    pub fn finish_submit(
        &mut self,
        result: &Result<NewLancamento, DepositError>,
        outbox: &mut Outbox,
    ) {
        match result {
            Ok(_) => self.complete(outbox),
            Err(e) => self.fail(e, outbox),
        }
    }

    /// Run a whole submission against `api`.
    pub async fn submit<A: DepositApi>(
        &mut self,
        api: &A,
        ctx: &SubmitContext,
        outbox: &mut Outbox,
    ) -> Result<NewLancamento, DepositError> {
        let result = match self.begin_submit(ctx.today, outbox) {
            Ok(draft) => post_deposit(api, ctx, &draft).await,
            Err(DepositError::InFlight) => return Err(DepositError::InFlight),
            Err(e) => Err(e),
        };

        self.finish_submit(&result, outbox);
        result
    }
}
