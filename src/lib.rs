//! Contact Book - an in-memory contact store with search, add, edit and delete.
//!
//! The store is seeded once from a remote user directory and then mutated by
//! user events. Everything lives in memory for the life of the process.
//!
//! # Architecture
//!
//! - **store**: The authoritative ordered collection and its query/mutation protocol
//! - **session**: Headless presentation state (search text, create/edit form, delete confirmation)
//! - **client**: HTTP bulk-load source behind the async `ContactSource` trait
//! - **models**: Contact record and draft
//! - **domain**: Validated value objects (`ContactId`)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Operation and HTTP counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod session;
pub mod store;

pub use client::{AsyncSourceClient, ContactSource, SourceClient};
pub use config::Config;
pub use domain::{ContactId, ValidationError};
pub use error::{ConfigError, LoadError, StoreError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactDraft};
pub use session::{ContactSession, FormMode, FormState, Row};
pub use store::{ContactStore, SearchOutcome, ValidationPolicy};
