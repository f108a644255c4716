//! Startup errors for the SSR host.

use std::net::SocketAddr;

/// Errors that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
