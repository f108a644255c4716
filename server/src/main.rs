//! SSR host for the Chai Street frontend.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config.bind_addr(leptos_options.site_addr);
    let site_root = leptos_options.site_root.clone();

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %site_root, "chai street listening");
    axum::serve(listener, app).await?;
    Ok(())
}
