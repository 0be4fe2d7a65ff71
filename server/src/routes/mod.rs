//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering of the portal pages, the hydrated bundle
//! under `/pkg`, static assets from the site root, and a health probe under a
//! single Axum router. The page itself never calls back into this server.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that exist independently of the Leptos app.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Load the Leptos configuration and build the full router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section, or bad `LEPTOS_*`
/// environment overrides).
pub fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(app(conf.leptos_options))
}

/// Full router for the given Leptos options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join(&*leptos_options.site_pkg_dir)))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
