use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use crate::config::Config;
use crate::input::InputState;
use crate::lookup::{LookupRequest, LookupResponse, LookupService, WorkerHandle, spawn_worker};
use crate::result_box::ResultBoxState;
use crate::search::{DropdownLayout, SearchState};

/// Longest the event loop waits for input when no timer is pending
pub const IDLE_POLL: Duration = Duration::from_millis(16);

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    ResultBox,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub result_box: ResultBoxState,
    pub focus: Focus,
    /// Where the dropdown rows were drawn on the last frame
    pub dropdown: Option<DropdownLayout>,
    pub input_area: Option<Rect>,
    pub should_quit: bool,
    /// Config problem to surface in the footer
    pub config_warning: Option<String>,
    worker: Option<WorkerHandle>,
}

impl App {
    /// Create the app and spawn a lookup worker backed by `service`
    pub fn new(config: &Config, service: Arc<dyn LookupService>, warning: Option<String>) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let worker = spawn_worker(service, request_rx, response_tx);

        let mut app = Self::with_channels(config, request_tx, response_rx, warning);
        app.worker = Some(worker);
        app
    }

    /// Create the app talking to an externally owned worker
    pub fn with_channels(
        config: &Config,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
        warning: Option<String>,
    ) -> Self {
        let mut search = SearchState::new(&config.search);
        search.set_channels(request_tx, response_rx);
        search.on_focus();

        Self {
            input: InputState::new(),
            search,
            result_box: ResultBoxState::new(),
            focus: Focus::SearchInput,
            dropdown: None,
            input_area: None,
            should_quit: false,
            config_warning: warning,
            worker: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Advance timers and drain lookup responses. Returns true if a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.search.tick(now)
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.search.next_deadline(now) {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Move focus between the search input and the detail box
    pub fn set_focus(&mut self, focus: Focus, now: Instant) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::SearchInput => self.search.on_focus(),
            Focus::ResultBox => self.search.on_blur(now),
        }
    }

    /// Replace the input text with the controller's query after a commit
    pub(super) fn sync_input_with_search(&mut self) {
        self.input.set_text(self.search.query());
    }

    /// Detach from the worker and stop it; later responses are never applied
    pub fn shutdown(&mut self) {
        self.search.unmount();
        if let Some(worker) = self.worker.take() {
            worker.join();
        }
    }

    #[cfg(test)]
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.search.unmount();
    }
}
