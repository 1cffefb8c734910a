use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::deposit::effects::ActiveScreen;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use chrono::NaiveDate;

/// Mock handler for tests: commands run synchronously, nothing is posted
#[derive(Default)]
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Test app whose submissions are checked against a fixed day
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            core: AppCore::with_state(MockDataHandler::new(), AppState::new(today)),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_ctrl(&mut self, c: char) {
        self.core.handle_key(KeyEvent::with_ctrl(Key::Char(c)));
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate the outcome of a post)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self) {
        let today = self.state().today;
        self.core.tick(today);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn toast_messages(&self) -> Vec<&str> {
        self.state()
            .toasts
            .iter()
            .map(|entry| entry.toast.message.as_str())
            .collect()
    }

    pub fn assert_screen(&self, expected: ActiveScreen) {
        assert_eq!(
            self.state().screen,
            expected,
            "Expected different screen. Current: {:?}",
            self.state().screen
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
