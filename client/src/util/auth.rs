//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes (`/dashboard`, `/profile`) apply identical unauthenticated
//! redirect behavior, and every page that changes the session updates the
//! shared `AuthState` the same way.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::auth::{AuthState, should_redirect_unauth};

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Record a freshly authenticated user.
pub fn set_user(auth: RwSignal<AuthState>, user: User) {
    auth.set(AuthState::settled(Some(user)));
}

/// Drop the in-memory user; the route guard then redirects.
pub fn clear_user(auth: RwSignal<AuthState>) {
    auth.set(AuthState::settled(None));
}
