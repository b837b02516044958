//! Domain models for the blog reader core.
//!
//! # Responsibility
//! - Define the catalog record rendered by the list and detail views.
//! - Define the registration form state and its validation rules.
//!
//! # Invariants
//! - Every article is identified by a stable positive integer id.
//! - Form state lives and dies with the registration view; it is never
//!   persisted.

pub mod article;
pub mod register_form;
