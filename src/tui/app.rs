//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::api::{FetchError, RecordSource};
use crate::model::MarginRecord;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    source: Arc<dyn RecordSource>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App fetching from the given source.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        let label = source.label();
        Self {
            source,
            state: AppState::new(label),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Initial data fetch
        self.spawn_fetch(&events);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    // Redraw only; the clock in the header advances.
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.spawn_fetch(&events),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(_)) => {
                    // Layout adapts on the next draw.
                }
                Ok(Event::Fetched(result)) => self.apply_fetch(result),
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Starts a fire-and-forget fetch on a background thread. The result
    /// comes back exactly once through the event channel.
    fn spawn_fetch(&mut self, events: &EventHandler) {
        if self.state.store.loading {
            return;
        }
        self.state.store.fetch_started();

        let tx = events.sender();
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.fetch();
            // The receiver only goes away on shutdown.
            let _ = tx.send(Event::Fetched(result));
        });
    }

    /// Applies a finished fetch to the store.
    fn apply_fetch(&mut self, result: Result<Vec<MarginRecord>, FetchError>) {
        // Any "fetch in progress" style message is obsolete now.
        self.state.status_message = None;
        match result {
            Ok(records) => {
                info!("fetch fulfilled with {} records", records.len());
                self.state.store.fetch_succeeded(records);
                self.state.selected_row = 0;
            }
            Err(err) => {
                warn!("fetch rejected: {}", err);
                self.state.store.fetch_failed(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SampleSource;
    use crate::model::sample_records;

    fn app_mid_fetch() -> App {
        let mut app = App::new(Arc::new(SampleSource::immediate()));
        app.state.store.fetch_started();
        app.state.status_message = Some("Fetch already in progress".to_string());
        app
    }

    #[test]
    fn successful_fetch_clears_status_message() {
        let mut app = app_mid_fetch();
        app.apply_fetch(Ok(sample_records()));

        assert_eq!(app.state.status_message, None);
        assert!(!app.state.store.loading);
        assert_eq!(app.state.store.records.len(), 5);
        assert_eq!(app.state.selected_row, 0);
    }

    #[test]
    fn failed_fetch_clears_status_message_and_sets_error() {
        let mut app = app_mid_fetch();
        app.apply_fetch(Err(FetchError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }));

        assert_eq!(app.state.status_message, None);
        assert!(!app.state.store.loading);
        assert_eq!(
            app.state.store.error.as_deref(),
            Some("HTTP 500: Internal Server Error")
        );
    }
}
