//! Credential verification seam for the session gate.
//!
//! # Responsibility
//! - Define the verification capability the gate is built against.
//!
//! # Invariants
//! - Verification is pure; persistence belongs to the session repository.

pub mod verifier;
