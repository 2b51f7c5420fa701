//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the page routes (generated from the route table and
//! guarded by the access gate), the health check, and the optional static
//! asset directory under a single Axum router.

pub mod gate;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(redirect_root_to_dashboard))
        .route("/healthz", get(healthz))
        .merge(pages::router(state.clone()))
        .fallback(pages::not_found);

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_dashboard() -> Redirect {
    Redirect::temporary("/dashboard")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
