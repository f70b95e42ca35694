//! Data models for the contact book.
//!
//! This module contains the contact record and the draft used to create or
//! edit one.

pub mod contact;

pub use contact::{Contact, ContactDraft};
