//! Session handling against the remote auth API.
//!
//! ARCHITECTURE
//! ============
//! `Session` owns the login/signup/refresh/logout/discord-link flows. It is
//! generic over two seams: [`AuthApi`] (the HTTP transport) and
//! [`TokenStore`] (the persisted bearer token). Pages use
//! [`Session::browser`]; tests substitute in-memory fakes.
//!
//! INVARIANTS
//! ==========
//! - A failed login never leaves a token behind. A signup the backend
//!   accepted always keeps its token, even if loading the member fails.
//! - With no stored token, `fetch_current_user` answers `None` without a
//!   network request.
//! - Calls are awaited one after another; there are no retries or timeouts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub mod error;
pub mod signup;
pub mod store;

pub use error::AuthError;
pub use signup::SignupForm;
pub use store::{LocalStorageTokenStore, TokenStore};

use crate::net::api::HttpAuthApi;
use crate::net::types::{LoginRequest, SignupRequest, TokenResponse, User};

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";

/// Remote auth API operations.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, body: &LoginRequest) -> Result<TokenResponse, AuthError>;
    /// `POST /auth/signup`.
    async fn signup(&self, body: &SignupRequest) -> Result<TokenResponse, AuthError>;
    /// `GET /me` with the bearer token.
    async fn current_user(&self, token: &str) -> Result<User, AuthError>;
    /// `GET /discord/oauth/url` with the bearer token.
    async fn discord_oauth_url(&self, token: &str) -> Result<String, AuthError>;
}

/// Session used by the pages: real HTTP plus `localStorage`.
pub type BrowserSession = Session<HttpAuthApi, LocalStorageTokenStore>;

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Session controller over an API transport and a token slot.
pub struct Session<A, S> {
    api: A,
    store: S,
}

impl BrowserSession {
    #[must_use]
    pub fn browser() -> Self {
        Self::new(HttpAuthApi::from_config(), LocalStorageTokenStore)
    }
}

impl<A: AuthApi, S: TokenStore> Session<A, S> {
    #[must_use]
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Log in, store the issued token, and load the member.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the backend rejects the pair;
    /// [`AuthError::RequestFailed`] for transport failures. In both cases no
    /// token is stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let body = LoginRequest { email: normalize_email(email), password: password.to_owned() };
        let issued = self.api.login(&body).await.inspect_err(|e| {
            log::warn!("login rejected: {e}");
        })?;
        let token = self.store_issued(issued)?;
        match self.api.current_user(&token).await {
            Ok(user) => {
                log::info!("logged in as {}", user.email);
                Ok(user)
            }
            Err(e) => {
                self.store.clear();
                Err(e)
            }
        }
    }

    /// Register a new member, store the issued token, and load the member.
    ///
    /// Once the backend has issued a token the account exists, so the token
    /// is kept even when loading the member fails; that case answers
    /// `Ok(None)` and a later `fetch_current_user` retries.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] before any request when a required selection
    /// is missing; [`AuthError::RequestFailed`] with the backend's detail
    /// (or a generic message) otherwise.
    pub async fn signup(&self, form: &SignupForm) -> Result<Option<User>, AuthError> {
        let body = form.validate()?;
        let issued = self.api.signup(&body).await.map_err(|e| {
            log::warn!("signup rejected: {e}");
            match e {
                AuthError::RequestFailed(_) => e,
                _ => AuthError::RequestFailed(SIGNUP_FAILED_MESSAGE.to_owned()),
            }
        })?;
        let token = self.store_issued(issued)?;
        match self.api.current_user(&token).await {
            Ok(user) => {
                log::info!("signed up as {}", user.email);
                Ok(Some(user))
            }
            Err(e) => {
                log::warn!("signed up but member fetch failed: {e}");
                Ok(None)
            }
        }
    }

    /// Load the member for the stored token.
    ///
    /// Returns `Ok(None)` without contacting the backend when no token is
    /// stored, and clears the token when the backend rejects it.
    ///
    /// # Errors
    ///
    /// [`AuthError::RequestFailed`] when the backend could not be reached or
    /// failed for a reason other than authorization.
    pub async fn fetch_current_user(&self) -> Result<Option<User>, AuthError> {
        let Some(token) = self.store.get() else {
            return Ok(None);
        };
        match self.api.current_user(&token).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthError::Unauthorized) => {
                log::info!("stored token rejected; clearing session");
                self.store.clear();
                Ok(None)
            }
            Err(e) => {
                log::warn!("current user fetch failed: {e}");
                Err(e)
            }
        }
    }

    /// Forget the stored token. No server call is made.
    pub fn logout(&self) {
        self.store.clear();
        log::info!("logged out");
    }

    /// Fetch the Discord OAuth URL the browser should navigate to.
    ///
    /// # Errors
    ///
    /// [`AuthError::Unauthorized`] when no token is stored, otherwise
    /// whatever the backend call produced.
    pub async fn start_discord_link(&self) -> Result<String, AuthError> {
        let token = self.store.get().ok_or(AuthError::Unauthorized)?;
        self.api.discord_oauth_url(&token).await.inspect_err(|e| {
            log::warn!("discord link failed: {e}");
        })
    }

    fn store_issued(&self, issued: TokenResponse) -> Result<String, AuthError> {
        let token = issued.token.trim();
        if token.is_empty() {
            return Err(AuthError::RequestFailed("Server did not issue a session token".to_owned()));
        }
        self.store.set(token);
        Ok(token.to_owned())
    }
}
