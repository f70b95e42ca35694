//! Headless presentation session.
//!
//! Holds what a contact-list screen holds between events: the search text,
//! an optional open form and an optional delete awaiting confirmation. Each
//! handler issues at most one store operation.

use super::form::{FormMode, FormState};
use crate::client::ContactSource;
use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::store::{ContactStore, SearchOutcome, NO_RESULTS_MESSAGE};
use serde::Serialize;
use tracing::{debug, error, info};

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Row {
    /// An interactive contact row.
    Contact(Contact),

    /// Informational text, not selectable.
    Message { text: String },
}

/// Drives a [`ContactStore`] from user events.
#[derive(Debug, Default)]
pub struct ContactSession {
    store: ContactStore,
    query: String,
    form: Option<FormState>,
    pending_delete: Option<ContactId>,
}

impl ContactSession {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Seed the store from `source`.
    ///
    /// A failed fetch is logged and swallowed; the store keeps whatever it
    /// held before. Returns whether the load happened.
    pub async fn bootstrap(&mut self, source: &dyn ContactSource) -> bool {
        match source.fetch_contacts().await {
            Ok(contacts) => {
                self.store.bulk_load(contacts);
                info!(count = self.store.len(), "Contacts loaded");
                true
            }
            Err(e) => {
                self.store.metrics().record_load_failure();
                error!("Error fetching contacts: {}", e);
                false
            }
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Search text changed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Render the current query.
    pub fn rows(&self) -> Vec<Row> {
        match self.store.search(&self.query) {
            SearchOutcome::Found { contacts } => contacts.into_iter().map(Row::Contact).collect(),
            SearchOutcome::Empty { message } => vec![Row::Message { text: message }],
        }
    }

    /// Notice shown when the collection itself holds nothing.
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.store.is_empty().then_some(NO_RESULTS_MESSAGE)
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    /// The open form's draft, for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut ContactDraft> {
        self.form.as_mut().map(|form| &mut form.draft)
    }

    /// Add action: open a blank form.
    pub fn open_create(&mut self) {
        self.form = Some(FormState::create());
    }

    /// Row activated: open a form pre-filled from `contact`.
    pub fn open_edit(&mut self, contact: &Contact) {
        self.form = Some(FormState::edit(contact));
    }

    /// Close the form without touching the store.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Dispatch the open form to `add` or `update`.
    ///
    /// The form closes on success. A validation failure keeps it open with
    /// its draft; a missing target closes it. With no form open this does
    /// nothing and returns `Ok(None)`.
    pub fn submit_form(&mut self) -> StoreResult<Option<Contact>> {
        let Some(form) = self.form.take() else {
            return Ok(None);
        };

        let result = match &form.mode {
            FormMode::Create => self.store.add(form.draft.clone()),
            FormMode::Edit(id) => self.store.update(id, form.draft.clone()),
        };

        match result {
            Ok(contact) => Ok(Some(contact)),
            Err(e @ StoreError::Validation(_)) => {
                debug!("Form rejected: {}", e);
                self.form = Some(form);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete action: ask for confirmation before removing `id`.
    pub fn request_delete(&mut self, id: ContactId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&ContactId> {
        self.pending_delete.as_ref()
    }

    /// Confirmed: delete the pending contact. Returns whether one was removed.
    pub fn confirm_delete(&mut self) -> bool {
        match self.pending_delete.take() {
            Some(id) => self.store.delete(&id),
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
