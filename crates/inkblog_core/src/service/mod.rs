//! Use-case services over the catalog and session store.
//!
//! # Responsibility
//! - Provide stable entry points for the view layer.
//! - Keep services storage-agnostic behind the repository traits.

pub mod blog_service;
pub mod register_service;
pub mod session_service;
