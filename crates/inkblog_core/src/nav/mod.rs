//! Route table and view resolution.
//!
//! # Responsibility
//! - Map request paths to views and redirects.
//!
//! # Invariants
//! - An unmatched path never fails; it redirects to the not-found view.

pub mod router;
