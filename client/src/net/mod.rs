//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps status codes onto `AuthError`;
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
