use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::AppState;
use dashboard_api::Client;
use finboard_auth::{Session, Settings};

type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Production handler: submissions post from background tasks
struct TaskHandler {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
}

impl DataEventHandler for TaskHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.data_loader);
    }
}

pub struct App {
    settings: Settings,
    session: Session,
}

impl App {
    pub fn new(settings: Settings, session: Session) -> Self {
        Self { settings, session }
    }

    pub async fn run(&self) -> Result<()> {
        let client = Client::new(&self.settings.api_url, self.session.token.expose_secret())?;
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        let data_loader = DataLoader::new(Arc::new(client), self.session.login.clone(), data_tx);

        let core = AppCore::new(TaskHandler {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
        });

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal, core, data_rx).await;

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Term,
        mut core: AppCore<TaskHandler>,
        mut data_rx: mpsc::UnboundedReceiver<DataEvent>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop as {}", self.session.login);

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.tick(chrono::Local::now().date_naive());
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        // Dropping the core cancels any submission still in flight
        Ok(())
    }

    fn init(&self) -> Result<Term, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(&self, mut terminal: Term) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
