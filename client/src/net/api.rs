//! REST client for the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `RequestFailed`, since the token
//! only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are mapped onto `AuthError` here so the session layer never
//! inspects HTTP details: `401` on login is `InvalidCredentials`, `401` on an
//! authenticated call is `Unauthorized`, anything else non-2xx carries the
//! backend's `detail` when it is a plain string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, SignupRequest, TokenResponse, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::session::{AuthApi, AuthError};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const CURRENT_USER_PATH: &str = "/me";
pub const DISCORD_OAUTH_URL_PATH: &str = "/discord/oauth/url";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// Which kind of call produced a response; decides what `401` means.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CallKind {
    Login,
    Signup,
    Authenticated,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fallback_message(kind: CallKind, status: u16) -> String {
    match kind {
        CallKind::Signup => crate::session::SIGNUP_FAILED_MESSAGE.to_owned(),
        CallKind::Login | CallKind::Authenticated => format!("request failed: {status}"),
    }
}

/// Map a non-success status and its raw body onto an `AuthError`.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(kind: CallKind, status: u16, body: &str) -> AuthError {
    match (kind, status) {
        (CallKind::Login, 401) => AuthError::InvalidCredentials,
        (CallKind::Authenticated, 401) => AuthError::Unauthorized,
        _ => {
            let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message());
            AuthError::request_failed(detail, &fallback_message(kind, status))
        }
    }
}

/// `AuthApi` over HTTP against a fixed base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Use the compile-time configured base URL.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        crate::config::join_url(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    kind: CallKind,
) -> Result<T, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_for_status(kind, status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| AuthError::RequestFailed(format!("unexpected response: {e}")))
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> AuthError {
    AuthError::RequestFailed(e.to_string())
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, body: &LoginRequest) -> Result<TokenResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp, CallKind::Login).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(AuthError::RequestFailed(SERVER_UNAVAILABLE.to_owned()))
        }
    }

    async fn signup(&self, body: &SignupRequest) -> Result<TokenResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(SIGNUP_PATH))
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp, CallKind::Signup).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(AuthError::RequestFailed(SERVER_UNAVAILABLE.to_owned()))
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(CURRENT_USER_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            read_json(resp, CallKind::Authenticated).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(AuthError::RequestFailed(SERVER_UNAVAILABLE.to_owned()))
        }
    }

    async fn discord_oauth_url(&self, token: &str) -> Result<String, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(DISCORD_OAUTH_URL_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
            let body: super::types::DiscordUrlResponse = read_json(resp, CallKind::Authenticated).await?;
            Ok(body.url)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(AuthError::RequestFailed(SERVER_UNAVAILABLE.to_owned()))
        }
    }
}
