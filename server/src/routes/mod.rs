//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the frontend: Leptos SSR for the app routes, and the
//! site root (compiled `/pkg` bundle plus the copied `server/public` assets)
//! for everything else. Unknown paths render the app shell, so the client's
//! not-found view answers them. Authentication lives on the remote API the
//! client calls directly.

pub mod health;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use chai_client::app::{App, shell};

/// Full application router: health probe, SSR routes, and site assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options);

    health::routes()
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
