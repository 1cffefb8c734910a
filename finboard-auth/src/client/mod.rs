mod config;
mod session_store;

pub use config::Settings;
pub use session_store::SessionStore;

use crate::common::Session;
use crate::error::AuthError;
use std::io::{BufRead, Write};

/// Resolve the session before starting the TUI.
///
/// Configured credentials win, then a previously stored session; otherwise the
/// user is asked for login and token on the terminal and the result is stored.
pub fn authenticate(settings: &Settings) -> Result<Session, AuthError> {
    let store = SessionStore::new()?;
    resolve_session(settings, &store, prompt_credentials)
}

pub(crate) fn resolve_session<F>(
    settings: &Settings,
    store: &SessionStore,
    prompt: F,
) -> Result<Session, AuthError>
where
    F: FnOnce() -> Result<(String, String), AuthError>,
{
    if let Some((login, token)) = settings.credentials() {
        tracing::info!("Using configured session for {}", login);
        return Ok(Session::new(login, token));
    }

    if let Some(session) = store.load_session()? {
        tracing::info!("Using stored session for {}", session.login);
        return Ok(session);
    }

    let (login, token) = prompt()?;
    let session = Session::new(login, token);
    store.save_session(&session)?;
    Ok(session)
}

fn prompt_credentials() -> Result<(String, String), AuthError> {
    println!("\n=== Finboard login ===\n");
    let login = prompt_line("Login: ")?;
    let token = prompt_line("Token: ")?;

    if login.is_empty() {
        return Err(AuthError::MissingCredentials("login is empty"));
    }
    if token.is_empty() {
        return Err(AuthError::MissingCredentials("token is empty"));
    }

    Ok((login, token))
}

fn prompt_line(label: &str) -> Result<String, AuthError> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
