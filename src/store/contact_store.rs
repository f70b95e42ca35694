//! The authoritative in-memory contact collection.

use super::id_allocator::IdAllocator;
use super::search::{self, SearchOutcome};
use crate::domain::{ContactId, ValidationError};
use crate::error::{StoreError, StoreResult};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactDraft};
use std::collections::HashSet;
use tracing::{debug, warn};

/// How drafts are checked before `add` and `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Reject drafts whose first name is empty.
    #[default]
    RequireFirstName,

    /// Accept any draft.
    Permissive,
}

impl ValidationPolicy {
    fn check(self, draft: &ContactDraft) -> Result<(), ValidationError> {
        match self {
            Self::RequireFirstName if draft.first_name.is_empty() => {
                Err(ValidationError::EmptyField("firstName"))
            }
            _ => Ok(()),
        }
    }
}

/// Owns the ordered contact collection and its query/mutation protocol.
///
/// Insertion order is preserved; ids are unique within the collection and
/// never reused. Every mutation validates before touching the collection, so
/// a failed call leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    ids: IdAllocator,
    policy: ValidationPolicy,
    metrics: Metrics,
}

impl ContactStore {
    /// Create an empty store with the default validation policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Report operations into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The collection in stored order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replace the whole collection, keeping the given order.
    ///
    /// Loaded records are trusted and not validated. A repeated id keeps its
    /// first occurrence; later ones are dropped.
    pub fn bulk_load(&mut self, contacts: Vec<Contact>) {
        let offered = contacts.len();
        let mut seen = HashSet::with_capacity(offered);
        let mut loaded: Vec<Contact> = Vec::with_capacity(offered);

        for contact in contacts {
            self.ids.observe(&contact.id);
            if !seen.insert(contact.id.clone()) {
                warn!(id = %contact.id, "Dropping contact with duplicate id from bulk load");
                continue;
            }
            loaded.push(contact);
        }

        debug!(offered, loaded = loaded.len(), "Bulk load applied");
        self.metrics.record_contacts_loaded(loaded.len());
        self.contacts = loaded;
    }

    /// Append a new contact built from `draft` under a fresh id.
    pub fn add(&mut self, draft: ContactDraft) -> StoreResult<Contact> {
        self.policy.check(&draft)?;

        let contact = Contact::new(self.ids.allocate(), draft);
        debug!(id = %contact.id, "Contact added");
        self.contacts.push(contact.clone());
        self.metrics.record_contact_added();
        Ok(contact)
    }

    /// Replace the fields of the contact with `id`, in place.
    pub fn update(&mut self, id: &ContactId, draft: ContactDraft) -> StoreResult<Contact> {
        let position = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        self.policy.check(&draft)?;

        let contact = &mut self.contacts[position];
        contact.apply(draft);
        debug!(id = %id, position, "Contact updated");
        self.metrics.record_contact_updated();
        Ok(contact.clone())
    }

    /// Remove the contact with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &ContactId) -> bool {
        match self.position(id) {
            Some(position) => {
                self.contacts.remove(position);
                debug!(id = %id, "Contact deleted");
                self.metrics.record_contact_deleted();
                true
            }
            None => {
                debug!(id = %id, "Delete skipped, no such contact");
                false
            }
        }
    }

    /// Filter by case-insensitive substring of first name or phone.
    ///
    /// An empty query returns the whole collection. A non-empty query that
    /// matches nothing yields [`SearchOutcome::Empty`].
    pub fn search(&self, query: &str) -> SearchOutcome {
        self.metrics.record_search();

        if query.is_empty() {
            return SearchOutcome::Found {
                contacts: self.contacts.clone(),
            };
        }

        let needle = query.to_lowercase();
        let contacts: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|contact| search::matches(contact, &needle))
            .cloned()
            .collect();

        debug!(query, matched = contacts.len(), "Search completed");

        if contacts.is_empty() {
            SearchOutcome::no_results()
        } else {
            SearchOutcome::Found { contacts }
        }
    }

    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }
}
