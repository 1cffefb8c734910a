pub mod deposit_screen;
pub mod transactions_screen;
