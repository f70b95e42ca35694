//! Async seam for the bulk-load source.
//!
//! [`ContactSource`] is what the session awaits at startup. The HTTP
//! implementation runs the blocking [`SourceClient`] on tokio's blocking
//! pool so the event loop is never stalled by the fetch.

use crate::client::SourceClient;
use crate::error::{LoadError, LoadResult};
use crate::models::Contact;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces the initial contact list, once, as a completed sequence.
#[async_trait]
pub trait ContactSource: Send + Sync {
    async fn fetch_contacts(&self) -> LoadResult<Vec<Contact>>;
}

/// Async wrapper around the synchronous SourceClient.
#[derive(Clone)]
pub struct AsyncSourceClient {
    client: Arc<SourceClient>,
}

impl AsyncSourceClient {
    pub fn new(client: SourceClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactSource for AsyncSourceClient {
    async fn fetch_contacts(&self) -> LoadResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.fetch_contacts())
            .await
            .map_err(|e| LoadError::Http(format!("Task join error: {}", e)))?
    }
}
