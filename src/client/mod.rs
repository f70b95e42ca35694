//! HTTP client for the remote user directory that seeds the store.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It performs the one read the contact book needs:
//! fetching the full list of people and mapping them to contacts.

mod async_wrapper;
pub use async_wrapper::{AsyncSourceClient, ContactSource};

use crate::config::Config;
use crate::error::{LoadError, LoadResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::Contact;
use serde::Deserialize;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Response wrapper for the user directory endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    /// The list of people
    pub users: Vec<Contact>,
}

/// Accepted response bodies: the wrapped directory shape or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceBody {
    Wrapped(UsersResponse),
    Bare(Vec<Contact>),
}

/// HTTP client for the user directory.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SourceClient {
    /// Full URL of the directory listing
    url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SourceClient {
    /// Create a new SourceClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            url: config.source_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a SourceClient for an explicit URL (useful for testing).
    #[doc(hidden)]
    pub fn with_url(url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Report into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every contact the directory returns, in the order given.
    pub fn fetch_contacts(&self) -> LoadResult<Vec<Contact>> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", self.url);

        let response = match self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let error = map_error(e);
                tracing::error!("GET {} - Error: {:?}", self.url, error);
                return Err(error);
            }
        };

        let body = response
            .into_string()
            .map_err(|e| LoadError::Http(e.to_string()))?;

        let contacts = match serde_json::from_str::<SourceBody>(&body) {
            Ok(SourceBody::Wrapped(wrapped)) => wrapped.users,
            Ok(SourceBody::Bare(contacts)) => contacts,
            // Re-parse as the primary shape so the error names the real problem
            Err(_) => serde_json::from_str::<UsersResponse>(&body)?.users,
        };

        tracing::debug!("GET {} - {} contacts", self.url, contacts.len());
        Ok(contacts)
    }
}

/// Map a ureq error to a LoadError.
fn map_error(error: ureq::Error) -> LoadError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                404 => LoadError::NotFound(message),
                _ => LoadError::Api {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                LoadError::Http("Connection failed".to_string())
            } else if is_timeout(&transport) {
                LoadError::Timeout
            } else {
                LoadError::Http(transport.to_string())
            }
        }
    }
}

/// Whether a transport failure is an expired read or connect timeout.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport.kind() == ureq::ErrorKind::Io
        && transport
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(|e| is_timeout_kind(e.kind()))
            .unwrap_or(false)
}

fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
