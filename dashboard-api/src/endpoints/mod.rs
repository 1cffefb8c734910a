pub mod dashboard;
pub mod lancamentos;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a bank or credit account (`conta`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a category record (`planoConta`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(i64);

impl PlanId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PlanId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
