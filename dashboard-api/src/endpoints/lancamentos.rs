use super::{AccountId, PlanId};
use crate::request::{ApiRequest, EmptyResponse, RequestData};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

/// A category record (`plano de conta`) a transaction is booked under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plano {
    pub id: PlanId,
    #[serde(default, rename = "descricao")]
    pub description: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default, rename = "tipoMovimento")]
    pub movement_type: Option<String>,
}

/// Body of `POST /lancamentos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLancamento {
    #[serde(rename = "conta")]
    pub account_id: AccountId,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub login: String,
    #[serde(rename = "planoConta")]
    pub plan_id: PlanId,
    #[serde(rename = "valor")]
    pub amount: f64,
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct ListPlanosConta {
    login: String,
}

impl ListPlanosConta {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

impl ApiRequest for ListPlanosConta {
    type Data = Self;
    type Response = Vec<Plano>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/lancamentos/planos-conta".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLancamento {
    lancamento: NewLancamento,
}

impl CreateLancamento {
    pub fn new(lancamento: NewLancamento) -> Self {
        Self { lancamento }
    }
}

impl ApiRequest for CreateLancamento {
    type Data = NewLancamento;
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/lancamentos".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.lancamento)
    }

    // The server signals a booked transaction with exactly 200.
    fn accepts(&self, status: StatusCode) -> bool {
        status == StatusCode::OK
    }
}
