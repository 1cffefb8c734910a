use crate::endpoints::{
    dashboard::GetDashboard,
    lancamentos::{CreateLancamento, ListPlanosConta, NewLancamento},
};
use chrono::NaiveDate;

#[derive(Default)]
pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self
    }

    /// Dashboard for a single day.
    pub fn get(&self, login: impl Into<String>, day: NaiveDate) -> GetDashboard {
        GetDashboard::new(login, day)
    }
}

#[derive(Default)]
pub struct LancamentoRepository;

impl LancamentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn plans(&self, login: impl Into<String>) -> ListPlanosConta {
        ListPlanosConta::new(login)
    }

    pub fn create(&self, lancamento: NewLancamento) -> CreateLancamento {
        CreateLancamento::new(lancamento)
    }
}
