use crate::deposit::effects::ActiveScreen;
use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    // Ctrl+C always quits
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    match state.screen {
        ActiveScreen::Deposit => handle_deposit_keys(event, state),
        ActiveScreen::Transactions => handle_transactions_keys(event, state),
    }
}

fn handle_deposit_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let loading = state.is_loading();

    if event.modifiers.ctrl {
        return match event.key {
            Key::Char('u') if !loading => Some(AppCommand::ClearField),
            Key::Char('p') if !loading => Some(AppCommand::ToggleInvoicePayment),
            Key::Char('t') if !loading => Some(AppCommand::ShowTransactions),
            _ => None,
        };
    }

    match event.key {
        // Submit is always forwarded; the controller refuses re-entry itself
        Key::Enter => Some(AppCommand::SubmitDeposit),
        Key::Esc if !state.toasts.is_empty() => Some(AppCommand::DismissToasts),
        Key::Esc => Some(AppCommand::Quit),
        Key::Tab | Key::Down => Some(AppCommand::FocusNextField),
        Key::BackTab | Key::Up => Some(AppCommand::FocusPreviousField),

        // The entered values are frozen until the submission settles
        _ if loading => None,
        Key::Backspace => Some(AppCommand::DeleteFieldChar),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendFieldChar(c)),
        _ => None,
    }
}

fn handle_transactions_keys(event: KeyEvent, _state: &AppState) -> Option<AppCommand> {
    if event.modifiers.ctrl {
        return None;
    }

    match event.key {
        Key::Char('d') => Some(AppCommand::OpenDeposit {
            invoice_payment: false,
        }),
        Key::Char('p') => Some(AppCommand::OpenDeposit {
            invoice_payment: true,
        }),
        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('q') | Key::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}
