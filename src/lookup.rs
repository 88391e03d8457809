//! Lookup service abstraction
//!
//! Defines the LookupService trait, LookupError types, and the message types
//! exchanged with the lookup worker thread.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::character::Character;

pub mod swapi;
pub mod worker;

pub use swapi::SwapiClient;
pub use worker::{WorkerHandle, spawn_worker};

/// Errors that can occur during a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Lookup service returned {code}: {reason}")]
    Status { code: u16, reason: String },

    /// Body was not the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Lookup aborted by worker shutdown
    #[error("Lookup cancelled")]
    Cancelled,
}

/// Something that turns a trimmed query into candidate records
///
/// Returned futures must be `'static` so the worker can run several lookups
/// side by side.
pub trait LookupService: Send + Sync {
    fn lookup(&self, query: &str) -> BoxFuture<'static, Result<Vec<Character>, LookupError>>;
}

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Lookup {
        /// Trimmed query
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the lookup worker
#[derive(Debug)]
pub struct LookupResponse {
    /// Request ID this response belongs to
    pub request_id: u64,
    /// Query the request was issued for
    pub query: String,
    pub result: Result<Vec<Character>, LookupError>,
}
