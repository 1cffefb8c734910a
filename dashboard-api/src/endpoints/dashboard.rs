use super::AccountId;
use crate::request::{ApiRequest, RequestData};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conta {
    pub id: AccountId,
    /// Current balance
    #[serde(default, rename = "saldo")]
    pub balance: f64,
}

// Requests

/// Dashboard summary for one user over a date range (`inicio`..=`fim`).
#[derive(Debug, Clone, Serialize)]
pub struct GetDashboard {
    #[serde(rename = "fim")]
    end: NaiveDate,
    #[serde(rename = "inicio")]
    start: NaiveDate,
    login: String,
}

impl GetDashboard {
    pub fn new(login: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            end: day,
            start: day,
            login: login.into(),
        }
    }
}

impl ApiRequest for GetDashboard {
    type Data = Self;
    type Response = Contas;

    fn endpoint(&self) -> Cow<'_, str> {
        "/dashboard".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contas {
    #[serde(rename = "contaBanco")]
    pub bank_account: Conta,
    #[serde(default, rename = "contaCredito")]
    pub credit_account: Option<Conta>,
}
