//! SWAPI people search client
//!
//! Issues `GET {base_url}/people/?search=<query>` and extracts the `results`
//! array as characters.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::{LookupError, LookupService};
use crate::character::Character;
use crate::config::LookupConfig;

/// Async HTTP client for the SWAPI `people` endpoint
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    people_url: String,
}

impl SwapiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            client,
            people_url: people_url(base_url),
        })
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn people_url(&self) -> &str {
        &self.people_url
    }
}

impl LookupService for SwapiClient {
    fn lookup(&self, query: &str) -> BoxFuture<'static, Result<Vec<Character>, LookupError>> {
        let client = self.client.clone();
        let url = self.people_url.clone();
        let query = query.to_string();

        async move {
            let response = client
                .get(&url)
                .query(&[("search", query.as_str())])
                .send()
                .await
                .map_err(|e| LookupError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status {
                    code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            }

            let body: Value = response.json().await.map_err(|e| {
                if e.is_decode() {
                    LookupError::Malformed(e.to_string())
                } else {
                    LookupError::Network(e.to_string())
                }
            })?;

            parse_people_response(body)
        }
        .boxed()
    }
}

fn people_url(base_url: &str) -> String {
    format!("{}/people/", base_url.trim_end_matches('/'))
}

/// Extract characters from a `people` search body
///
/// The body must be an object whose `results` field is an array of records
/// that each carry at least a `name`.
pub fn parse_people_response(body: Value) -> Result<Vec<Character>, LookupError> {
    let results = match body {
        Value::Object(mut map) => map.remove("results"),
        other => {
            return Err(LookupError::Malformed(format!(
                "expected an object, got {}",
                value_kind(&other)
            )));
        }
    };

    match results {
        Some(items @ Value::Array(_)) => {
            serde_json::from_value(items).map_err(|e| LookupError::Malformed(e.to_string()))
        }
        Some(other) => Err(LookupError::Malformed(format!(
            "`results` is {} instead of an array",
            value_kind(&other)
        ))),
        None => Err(LookupError::Malformed("missing `results` field".to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "swapi_tests.rs"]
mod swapi_tests;
