//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Each model is provided once by `App` as an `RwSignal` context.

pub mod auth;
pub mod ui;
