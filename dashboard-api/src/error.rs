use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardApiError {
    #[error("({status}) {body}")]
    Status { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session token is not a valid header value")]
    InvalidToken,
}

impl DashboardApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}
