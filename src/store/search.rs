//! Search outcome and contact matching.

use crate::models::Contact;
use serde::Serialize;

/// Message carried by an empty search outcome.
pub const NO_RESULTS_MESSAGE: &str = "No contacts found.";

/// Result of [`ContactStore::search`](super::ContactStore::search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchOutcome {
    /// Matching contacts in collection order. May be empty only for an empty
    /// query over an empty collection.
    Found { contacts: Vec<Contact> },

    /// A non-empty query matched nothing.
    Empty { message: String },
}

impl SearchOutcome {
    pub(crate) fn no_results() -> Self {
        Self::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }

    /// The matched contacts; empty for the `Empty` variant.
    pub fn contacts(&self) -> &[Contact] {
        match self {
            Self::Found { contacts } => contacts,
            Self::Empty { .. } => &[],
        }
    }

    /// Consume the outcome, keeping only the contacts.
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            Self::Found { contacts } => contacts,
            Self::Empty { .. } => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Case-insensitive substring match on first name or phone.
///
/// `needle` must already be lower-cased. Empty fields never match.
pub(crate) fn matches(contact: &Contact, needle: &str) -> bool {
    field_contains(&contact.first_name, needle) || field_contains(&contact.phone, needle)
}

fn field_contains(field: &str, needle: &str) -> bool {
    !field.is_empty() && field.to_lowercase().contains(needle)
}
