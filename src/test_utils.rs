#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
    use tokio::sync::oneshot;

    use crate::app::App;
    use crate::character::Character;
    use crate::config::Config;
    use crate::lookup::{LookupError, LookupRequest, LookupResponse, LookupService};
    use crate::search::{SearchState, SelectionConsumer};

    pub const QUIET: Duration = Duration::from_millis(300);
    pub const GRACE: Duration = Duration::from_millis(100);

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn characters(names: &[&str]) -> Vec<Character> {
        names.iter().map(|name| Character::new(*name)).collect()
    }

    /// Consumer that records every selection it receives
    #[derive(Debug, Default)]
    pub struct RecordingConsumer {
        pub selected: Vec<Character>,
    }

    impl SelectionConsumer for RecordingConsumer {
        fn on_select(&mut self, character: &Character) {
            self.selected.push(character.clone());
        }
    }

    /// Search state wired to in-memory channels
    ///
    /// The returned receiver sees every request the state issues; responses are
    /// injected through the returned sender.
    pub struct Harness {
        pub state: SearchState,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl Harness {
        pub fn new() -> Self {
            let (request_tx, requests) = unbounded_channel();
            let (responses, response_rx) = mpsc::channel();
            let mut state = SearchState::new(&Config::default().search);
            state.set_channels(request_tx, response_rx);
            Self {
                state,
                requests,
                responses,
            }
        }

        /// Drain every request issued so far
        pub fn issued(&mut self) -> Vec<LookupRequest> {
            let mut issued = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                issued.push(request);
            }
            issued
        }

        /// Type `text` at `now` and let the quiet window elapse
        pub fn type_and_settle(&mut self, text: &str, now: Instant) -> Instant {
            self.state.on_text_change(text, now);
            let fired_at = now + QUIET;
            self.state.tick(fired_at);
            fired_at
        }

        pub fn respond(&self, request_id: u64, query: &str, names: &[&str]) {
            self.responses
                .send(LookupResponse {
                    request_id,
                    query: query.to_string(),
                    result: Ok(characters(names)),
                })
                .unwrap();
        }

        pub fn fail(&self, request_id: u64, query: &str, error: LookupError) {
            self.responses
                .send(LookupResponse {
                    request_id,
                    query: query.to_string(),
                    result: Err(error),
                })
                .unwrap();
        }
    }

    /// App wired to in-memory channels instead of a worker thread
    pub fn test_app() -> (App, UnboundedReceiver<LookupRequest>, Sender<LookupResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let app = App::with_channels(&Config::default(), request_tx, response_rx, None);
        (app, request_rx, response_tx)
    }

    /// In-memory lookup service
    ///
    /// Answers from a fixed table (unknown queries yield no results), records
    /// every query it sees, and can hold individual queries until released.
    #[derive(Default)]
    pub struct FakeLookup {
        results: HashMap<String, Vec<Character>>,
        failing: bool,
        calls: Arc<Mutex<Vec<String>>>,
        gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    }

    impl FakeLookup {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn with_results(mut self, query: &str, names: &[&str]) -> Self {
            self.results.insert(query.to_string(), characters(names));
            self
        }

        /// Hold lookups for `query` until the returned sender fires
        pub fn gate(&self, query: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(query.to_string(), rx);
            tx
        }

        pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.calls)
        }
    }

    impl LookupService for FakeLookup {
        fn lookup(&self, query: &str) -> BoxFuture<'static, Result<Vec<Character>, LookupError>> {
            self.calls.lock().unwrap().push(query.to_string());

            let gate = self.gates.lock().unwrap().remove(query);
            let result = if self.failing {
                Err(LookupError::Network("connection refused".to_string()))
            } else {
                Ok(self.results.get(query).cloned().unwrap_or_default())
            };

            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            .boxed()
        }
    }

    /// Wait for a worker response, failing the test after `timeout_ms`
    pub fn recv_response(rx: &Receiver<LookupResponse>, timeout_ms: u64) -> LookupResponse {
        rx.recv_timeout(Duration::from_millis(timeout_ms))
            .expect("worker did not respond in time")
    }

    pub fn request_channel() -> (
        UnboundedSender<LookupRequest>,
        UnboundedReceiver<LookupRequest>,
    ) {
        unbounded_channel()
    }
}
