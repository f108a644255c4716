//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The bearer token itself lives in
//! `localStorage` (see `session::store`); this holds only the hydrated user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the initial current-user fetch has settled.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state for a known user (or none).
    #[must_use]
    pub fn settled(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Whether a protected route should bounce to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
