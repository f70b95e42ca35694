use async_trait::async_trait;
use contact_book::error::{LoadError, LoadResult};
use contact_book::models::Contact;
use contact_book::ContactSource;
use std::sync::{Arc, Mutex};

/// Mock bulk-load source for testing.
///
/// Returns a fixed contact list, or fails when configured to, and counts
/// how many times it was fetched.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactSource {
    contacts: Arc<Mutex<Vec<Contact>>>,
    failure: Arc<Mutex<Option<String>>>,
    fetch_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactSource {
    /// Create a source that returns `contacts`.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
            failure: Arc::new(Mutex::new(None)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a source whose fetch always fails with `message`.
    pub fn failing(message: &str) -> Self {
        let source = Self::new(Vec::new());
        *source.failure.lock().unwrap() = Some(message.to_string());
        source
    }

    /// Number of fetches so far.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl ContactSource for MockContactSource {
    async fn fetch_contacts(&self) -> LoadResult<Vec<Contact>> {
        *self.fetch_count.lock().unwrap() += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(LoadError::Http(message));
        }
        Ok(self.contacts.lock().unwrap().clone())
    }
}
