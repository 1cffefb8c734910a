pub mod endpoints;
mod error;
pub mod repositories;
mod request;

pub use crate::error::DashboardApiError;
pub use crate::request::{ApiRequest, EmptyResponse, RequestData};
use repositories::*;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
pub use reqwest::StatusCode;

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// The dashboard API expects the raw session token in `Authorization`,
    /// without a `Bearer` scheme.
    pub fn new(base_url: &str, token: &str) -> Result<Self, DashboardApiError> {
        let mut auth = HeaderValue::from_str(token).map_err(|_| DashboardApiError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(DashboardApiError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, DashboardApiError>
    where
        R: ApiRequest,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        tracing::debug!("{} {}", R::METHOD, url);

        let builder = self.http.request(R::METHOD, &url);
        let builder = match request.data() {
            RequestData::Empty => builder,
            RequestData::Query(query) => builder.query(query),
            RequestData::Json(body) => builder.json(body),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !request.accepts(status) {
            tracing::warn!("{} {} answered {}", R::METHOD, url, status);
            return Err(DashboardApiError::Status { status, body });
        }

        // Some endpoints answer with an empty body; treat it as JSON null.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn dashboard() -> DashboardRepository {
        DashboardRepository::new()
    }

    pub fn lancamentos() -> LancamentoRepository {
        LancamentoRepository::new()
    }
}
