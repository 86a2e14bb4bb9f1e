//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the product API and stitches it with Leptos SSR
//! rendering of the dashboards under a single Axum router. The API is also
//! usable on its own when no Leptos site configuration is present.

pub mod products;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Product API routes. Any origin may call them; the dashboards may be served
/// from a different host than the API.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(::products::REGISTER_PATH, post(products::register))
        .route("/api/products/verify/{code}", get(products::verify))
        .route("/api/products/{product_id}", get(products::get_product))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API only, with request tracing and compression.
pub fn app(state: AppState) -> Router {
    api_routes(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// API routes + Leptos SSR dashboards at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles built by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
