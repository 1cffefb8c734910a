// Types shared with the dashboard client
pub mod common;

mod client;
mod error;

pub use client::{authenticate, SessionStore, Settings};
pub use common::{Session, StoredSession};
pub use error::AuthError;
