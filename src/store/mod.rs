//! In-memory contact store.
//!
//! [`ContactStore`] owns the ordered collection and is the only component
//! that mutates it. Callers seed it with a bulk load, then issue one
//! operation per user action and render whatever comes back.

mod contact_store;
mod id_allocator;
mod search;

pub use contact_store::{ContactStore, ValidationPolicy};
pub use id_allocator::IdAllocator;
pub use search::{SearchOutcome, NO_RESULTS_MESSAGE};
