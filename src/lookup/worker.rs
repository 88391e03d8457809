//! Lookup Worker Thread
//!
//! Runs lookups on a background thread so the UI never blocks on the network.
//! Receives requests via channel, drives them on a single-threaded tokio
//! runtime, and sends tagged responses back to the main thread.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use futures::future::BoxFuture;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::{LookupError, LookupRequest, LookupResponse, LookupService};
use crate::character::Character;
use crate::error::SwsearchError;

/// Owner of a running worker; dropping it shuts the worker down
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Stop accepting requests and abort in-flight lookups
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    #[cfg(test)]
    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Shut down and wait for the thread to exit
    pub fn join(mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("Lookup worker thread panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the lookup worker thread
///
/// Each request is run as its own task, so lookups may overlap and responses
/// may arrive out of order. Every response carries the request ID and query it
/// was issued for; the receiver decides whether it is still current.
pub fn spawn_worker(
    service: Arc<dyn LookupService>,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> WorkerHandle {
    let shutdown = CancellationToken::new();
    let worker_shutdown = shutdown.clone();

    let thread = std::thread::Builder::new()
        .name("swsearch-lookup".to_string())
        .spawn(move || worker_loop(service, request_rx, response_tx, worker_shutdown));

    let thread = match thread {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("Failed to spawn lookup worker: {}", e);
            None
        }
    };

    WorkerHandle { shutdown, thread }
}

fn worker_loop(
    service: Arc<dyn LookupService>,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("{}", SwsearchError::Runtime(e.to_string()));
            return;
        }
    };

    runtime.block_on(process_requests(service, request_rx, response_tx, shutdown));

    log::debug!("Lookup worker thread shutting down");
}

/// Dispatch requests until shutdown or until the request channel closes
async fn process_requests(
    service: Arc<dyn LookupService>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(LookupRequest::Lookup { query, request_id }) => {
                    log::debug!("Lookup {} started for {:?}", request_id, query);
                    let lookup = service.lookup(&query);
                    tokio::spawn(run_lookup(
                        lookup,
                        query,
                        request_id,
                        response_tx.clone(),
                        shutdown.child_token(),
                    ));
                }
                None => break,
            },
        }
    }
}

async fn run_lookup(
    lookup: BoxFuture<'static, Result<Vec<Character>, LookupError>>,
    query: String,
    request_id: u64,
    response_tx: Sender<LookupResponse>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        _ = cancel.cancelled() => Err(LookupError::Cancelled),
        result = lookup => result,
    };

    if response_tx
        .send(LookupResponse {
            request_id,
            query,
            result,
        })
        .is_err()
    {
        log::debug!("Dropping response {} (receiver gone)", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
