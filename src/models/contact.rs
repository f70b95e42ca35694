//! Contact model representing a person in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer treating `null` and absent text fields as empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A contact in the collection.
///
/// Optional fields are plain strings; an empty string means the field is
/// absent. Unknown keys in source records (the user directory carries many)
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, immutable once assigned
    pub id: ContactId,

    /// First name
    #[serde(default, deserialize_with = "deserialize_text")]
    pub first_name: String,

    /// Last name
    #[serde(default, deserialize_with = "deserialize_text")]
    pub last_name: String,

    /// Phone number, free-form
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
}

impl Contact {
    /// Create a contact from an id and the draft's field values.
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
        }
    }

    /// Replace the editable fields with the draft's values, keeping the id.
    pub fn apply(&mut self, draft: ContactDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.phone = draft.phone;
    }

    /// First and last name joined by a space, skipping empty parts.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Unsaved field values for a contact being created or edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone: contact.phone.clone(),
        }
    }
}
