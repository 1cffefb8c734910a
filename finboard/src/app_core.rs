use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = background tasks, test = synchronous)
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core without terminal dependencies
///
/// Generic over H (handler). The handler decides how commands run: in
/// production submissions post from a background task, in tests state is
/// updated synchronously and network results are injected as data events.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self::with_state(handler, AppState::default())
    }

    pub fn with_state(handler: H, ui_state: AppState) -> Self {
        Self { ui_state, handler }
    }

    /// Translate a key press to an AppCommand and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            tracing::debug!("Executing command: {:?}", command);
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle a data event (async results, or injected in tests)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Advance timers; `today` follows the wall clock across midnight
    pub fn tick(&mut self, today: chrono::NaiveDate) {
        self.ui_state.today = today;
        self.ui_state.tick();
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
