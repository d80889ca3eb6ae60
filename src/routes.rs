//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the page routes; the compiled WASM bundle and the
//! screenshots are static files. Anything else that is not a file on disk
//! redirects to the landing page.

use std::path::Path;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Full application router: SSR pages + static files + health check.
pub fn app(config: &ServerConfig) -> Router {
    let leptos_options = config.leptos.clone();
    let routes = generate_route_list(client::app::App);
    let site_root = leptos_options.site_root.to_string();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    leptos_router
        .merge(static_routes(Path::new(&site_root), &config.assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Health check, WASM bundle, screenshots and the redirecting fallback.
fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    let site_files = ServeDir::new(site_root).fallback(redirect_home.into_service());

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback_service(site_files)
}

async fn redirect_home() -> Redirect {
    Redirect::temporary("/")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
