//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering, the compiled WASM/JS/CSS bundle
//! under `/pkg`, and a health probe into a single Axum router. Image analysis
//! is not served here; the browser calls the analysis service directly.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend: health probe + static bundle + SSR pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service(&pkg_mount(&pkg_dir), ServeDir::new(pkg_path(&site_root, &pkg_dir)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// URL prefix the bundle is served under, e.g. `/pkg`.
fn pkg_mount(pkg_dir: &str) -> String {
    format!("/{}", pkg_dir.trim_matches('/'))
}

/// Directory the bundle is read from.
fn pkg_path(site_root: &Path, pkg_dir: &str) -> PathBuf {
    site_root.join(pkg_dir.trim_matches('/'))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
