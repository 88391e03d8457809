//! Debounced suggestion controller
//!
//! Turns keystrokes into a throttled sequence of lookups, reconciles responses
//! that may arrive out of order, and keeps a wrapping cursor over the current
//! suggestion list. All handlers take the current time explicitly so the
//! presentation loop (and tests) own the clock.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::cursor::SuggestionCursor;
use super::debouncer::Debouncer;
use crate::character::Character;
use crate::config::SearchConfig;
use crate::lookup::{LookupRequest, LookupResponse};

/// Receives the record chosen by a commit
pub trait SelectionConsumer {
    fn on_select(&mut self, character: &Character);
}

/// Navigation keys understood by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    NavigateUp,
    NavigateDown,
    Commit,
    Other,
}

/// A lookup that has been sent and not yet answered
#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: u64,
    query: String,
}

/// Search input state for one mounted control
pub struct SearchState {
    query: String,
    suggestions: Vec<Character>,
    cursor: SuggestionCursor,
    focused: bool,
    /// When a pending blur takes effect
    blur_deadline: Option<Instant>,
    blur_grace: Duration,
    min_query_chars: usize,
    debouncer: Debouncer,
    /// ID of the most recently issued lookup; responses with any other ID are stale
    request_id: u64,
    in_flight: Option<InFlight>,
    /// Set by a commit until the next edit or applied response
    committed: bool,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
}

impl SearchState {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            cursor: SuggestionCursor::new(),
            focused: false,
            blur_deadline: None,
            blur_grace: Duration::from_millis(config.blur_grace_ms),
            min_query_chars: config.min_query_chars,
            debouncer: Debouncer::new(config.debounce_ms),
            request_id: 0,
            in_flight: None,
            committed: false,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    // ---------------------------------------------------------------------
    // Presentation outputs
    // ---------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Character] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.cursor.active_within(self.suggestions.len())
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a lookup for the current query is awaiting its response
    pub fn is_loading(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.query == self.query.trim())
    }

    pub fn is_suggestion_list_visible(&self) -> bool {
        self.focused && !self.suggestions.is_empty()
    }

    pub fn is_no_results_visible(&self) -> bool {
        self.focused
            && !self.committed
            && self.suggestions.is_empty()
            && self.query.chars().count() >= self.min_query_chars
    }

    /// Earliest instant at which `tick` has timer work to do
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let debounce = self.debouncer.time_remaining(now).map(|left| now + left);
        match (debounce, self.blur_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ---------------------------------------------------------------------
    // Presentation events
    // ---------------------------------------------------------------------

    /// The input text changed; re-arm the debounce window
    pub fn on_text_change(&mut self, text: &str, now: Instant) {
        if text == self.query {
            return;
        }
        self.query = text.to_string();
        self.committed = false;
        self.debouncer.schedule(now);
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
        self.blur_deadline = None;
    }

    /// Start the blur grace period; the list hides once it has elapsed
    pub fn on_blur(&mut self, now: Instant) {
        if self.focused && self.blur_deadline.is_none() {
            self.blur_deadline = Some(now + self.blur_grace);
        }
    }

    /// Handle a navigation key. Returns true if the key was consumed.
    pub fn on_key(
        &mut self,
        key: SearchKey,
        consumer: &mut dyn SelectionConsumer,
        now: Instant,
    ) -> bool {
        match key {
            SearchKey::NavigateDown => {
                self.cursor.navigate_next(self.suggestions.len());
                !self.suggestions.is_empty()
            }
            SearchKey::NavigateUp => {
                self.cursor.navigate_previous(self.suggestions.len());
                !self.suggestions.is_empty()
            }
            SearchKey::Commit => match self.active_index() {
                Some(index) => self.commit(index, consumer, now),
                None => false,
            },
            SearchKey::Other => false,
        }
    }

    /// Pointer activation of a suggestion row, regardless of the active index
    pub fn on_row_activate(
        &mut self,
        index: usize,
        consumer: &mut dyn SelectionConsumer,
        now: Instant,
    ) -> bool {
        self.commit(index, consumer, now)
    }

    /// Advance timers and apply any lookup responses that have arrived
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(deadline) = self.blur_deadline
            && now >= deadline
        {
            self.blur_deadline = None;
            self.focused = false;
            changed = true;
        }

        if self.debouncer.fire_if_due(now) {
            self.issue_lookup();
            changed = true;
        }

        changed | self.poll_responses()
    }

    /// Tear down: cancel pending timers and detach from the worker
    ///
    /// Nothing issued before this call can mutate the state afterwards.
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
        self.blur_deadline = None;
        self.in_flight = None;
        self.request_tx = None;
        self.response_rx = None;
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    fn commit(
        &mut self,
        index: usize,
        consumer: &mut dyn SelectionConsumer,
        now: Instant,
    ) -> bool {
        let Some(character) = self.suggestions.get(index).cloned() else {
            return false;
        };

        consumer.on_select(&character);

        // The query now holds the selected name: look it up like any other
        // edit, and make anything still in flight stale.
        self.query = character.name;
        self.debouncer.schedule(now);
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight = None;
        self.replace_suggestions(Vec::new());
        self.committed = true;
        true
    }

    fn issue_lookup(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let query = self.query.trim().to_string();

        if query.chars().count() < self.min_query_chars {
            log::debug!("Query {:?} below minimum length, clearing suggestions", query);
            self.in_flight = None;
            self.replace_suggestions(Vec::new());
            return;
        }

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(LookupRequest::Lookup {
                query: query.clone(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Issued lookup {} for {:?}", request_id, query);
            self.in_flight = Some(InFlight { request_id, query });
        } else {
            log::warn!("Lookup worker unavailable, dropping query {:?}", query);
            self.in_flight = None;
            self.committed = false;
            self.replace_suggestions(Vec::new());
        }
    }

    fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        loop {
            let response = match self.response_rx.as_ref().map(Receiver::try_recv) {
                Some(Ok(response)) => response,
                Some(Err(TryRecvError::Disconnected)) => {
                    log::warn!("Lookup worker disconnected");
                    self.response_rx = None;
                    break;
                }
                Some(Err(TryRecvError::Empty)) | None => break,
            };
            changed |= self.apply_response(response);
        }

        changed
    }

    /// Apply a response if it is still current. Returns true if applied.
    fn apply_response(&mut self, response: LookupResponse) -> bool {
        if response.request_id != self.request_id || response.query != self.query.trim() {
            log::debug!(
                "Discarding stale response {} for {:?} (current: {} {:?})",
                response.request_id,
                response.query,
                self.request_id,
                self.query.trim()
            );
            return false;
        }

        self.in_flight = None;
        self.committed = false;

        match response.result {
            Ok(characters) => {
                log::debug!(
                    "Lookup {} returned {} suggestions",
                    response.request_id,
                    characters.len()
                );
                self.replace_suggestions(characters);
            }
            Err(e) => {
                log::error!("Lookup for {:?} failed: {}", response.query, e);
                self.replace_suggestions(Vec::new());
            }
        }
        true
    }

    fn replace_suggestions(&mut self, suggestions: Vec<Character>) {
        self.suggestions = suggestions;
        self.cursor.clear();
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
