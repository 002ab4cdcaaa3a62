//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two JSON endpoints for saving and loading shared gardens, a viewer page
//! route, and static file serving for the frontend bundle and sprite
//! images. Read-only viewer mode is a client-side affordance; the server
//! enforces nothing beyond 404s for unknown ids.

pub mod gardens;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the static asset directory for the frontend bundle and sprites.
fn assets_dir() -> PathBuf {
    std::env::var("ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets"))
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = assets_dir();
    // The viewer page is the same bundle; client routing reads the id from
    // the path and fetches `/api/garden/:id`.
    let viewer = ServeFile::new(assets.join("index.html"));
    let static_files = ServeDir::new(&assets).append_index_html_on_directories(true);

    Router::new()
        .route("/api/garden", post(gardens::create_garden))
        .route("/api/garden/{id}", get(gardens::get_garden))
        .route_service("/garden/{id}", viewer)
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_assembles_with_all_layers() {
        let _ = app(AppState::new());
    }
}
