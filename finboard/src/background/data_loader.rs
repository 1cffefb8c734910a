use crate::deposit::{self, DepositDraft, SubmitContext};
use crate::events::DataEvent;
use chrono::NaiveDate;
use dashboard_api::Client;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the network phase of a submission and reports the outcome as a
/// [`DataEvent`].
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub login: String,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(
        api_client: Arc<Client>,
        login: impl Into<String>,
        data_tx: mpsc::UnboundedSender<DataEvent>,
    ) -> Self {
        Self {
            api_client,
            login: login.into(),
            data_tx,
        }
    }

    pub async fn post_deposit(&self, today: NaiveDate, draft: DepositDraft) {
        tracing::info!("Submitting {:?} for {}", draft.kind, self.login);
        let ctx = SubmitContext::new(self.login.clone(), today);

        let event = match deposit::post_deposit(self.api_client.as_ref(), &ctx, &draft).await {
            Ok(lancamento) => DataEvent::DepositPosted { lancamento },
            Err(e) => {
                tracing::error!("Failed to post {:?}: {}", draft.kind, e);
                DataEvent::DepositFailed { error: Arc::new(e) }
            }
        };

        // The receiver is gone only when the app is shutting down
        let _ = self.data_tx.send(event);
    }
}
