//! UI-facing bindings for the inkblog core.

pub mod api;
