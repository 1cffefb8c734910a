pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::deposit::effects::ActiveScreen;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    match state.screen {
        ActiveScreen::Deposit => deposit_screen::render(f, &state.deposit),
        ActiveScreen::Transactions => transactions_screen::render(
            f,
            &state.transactions,
            state.pending_transaction.as_ref(),
        ),
    }

    // Toasts float above whichever screen is showing
    components::toasts::render_toasts(f, &state.toasts);
}
