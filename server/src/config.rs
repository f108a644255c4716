//! Server configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present. The
//! Leptos site settings (site root, default address, reload port) come from
//! the workspace `[[workspace.metadata.leptos]]` block or its `LEPTOS_*`
//! overrides; only what Leptos does not cover lives here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PORT` override; binds `0.0.0.0:<port>` instead of the Leptos site address.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen on all interfaces at this port
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match get("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(
                raw.parse::<u16>()
                    .map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw })?,
            ),
            None => None,
        };
        Ok(Self { port })
    }

    /// Address to bind, preferring the `PORT` override.
    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        self.port.map_or(site_addr, |port| SocketAddr::from(([0, 0, 0, 0], port)))
    }
}
