//! In-memory test doubles for the contact book's external seams.

mod mock_contact_source;

pub use mock_contact_source::MockContactSource;
