//! Create/edit form state.

use crate::domain::ContactId;
use crate::models::{Contact, ContactDraft};

/// Which store operation a submit dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Submit calls `add`.
    Create,

    /// Submit calls `update` on the given contact.
    Edit(ContactId),
}

/// An open form: its mode plus the draft being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: ContactDraft,
}

impl FormState {
    /// An empty draft for a new contact.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ContactDraft::default(),
        }
    }

    /// A draft pre-filled from `contact`, targeting its id.
    pub fn edit(contact: &Contact) -> Self {
        Self {
            mode: FormMode::Edit(contact.id.clone()),
            draft: ContactDraft::from(contact),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Label for the submit action.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit(_) => "Update",
        }
    }
}
