//! Compile-time client configuration.
//!
//! The API base URL is baked in at build time from `CHAI_API_BASE_URL` so the
//! same WASM bundle can be pointed at a local or hosted backend without a
//! runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback when `CHAI_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// How long the intro splash stays up before the routes render.
pub const INTRO_DURATION_MS: u32 = 3800;

/// Resolved API base URL with any trailing `/` removed.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CHAI_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
