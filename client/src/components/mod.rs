//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decorative and navigation pieces shared across pages. Components read
//! shared state from Leptos context providers and never talk to the backend.

pub mod intro_loader;
pub mod navbar;
pub mod reveal;
pub mod starfield;
