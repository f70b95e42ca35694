//! Presentation session layer.
//!
//! The session stands in for the screen that drives the store: it owns the
//! transient form and confirmation state and turns search outcomes into
//! rows. It holds no UI toolkit types, so every event path is testable.

mod contact_session;
mod form;

pub use contact_session::{ContactSession, Row};
pub use form::{FormMode, FormState};
