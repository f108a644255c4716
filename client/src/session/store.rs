//! Bearer-token persistence.
//!
//! TRADE-OFFS
//! ==========
//! The token lives in `localStorage` so it survives reloads. Storage access
//! is best-effort: a browser that blocks storage behaves like a logged-out
//! session rather than an error. SSR paths no-op.

use crate::config::TOKEN_STORAGE_KEY;

/// Slot holding the current bearer token.
pub trait TokenStore {
    /// Stored token, if any. Blank values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` slot under [`TOKEN_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            if raw.trim().is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = TOKEN_STORAGE_KEY;
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    log::warn!("could not persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}
