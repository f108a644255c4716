//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session calls, redirects) and
//! delegates decoration to `components`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
