//! Garden save/load routes.
//!
//! The store is deliberately trusting: whatever JSON the client posts is
//! stored verbatim and echoed back on read. Snapshot versioning and the
//! upgrade chain live entirely in the client engine.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::state::{AppState, next_garden_id};

#[derive(Debug, Serialize)]
pub struct CreateGardenResponse {
    pub id: String,
    pub link: String,
}

/// `POST /api/garden` — store a snapshot, return its id and viewer link.
pub async fn create_garden(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Json<CreateGardenResponse> {
    let id = next_garden_id();
    let link = format!("/garden/{id}");

    {
        let mut gardens = state.gardens.write().await;
        if gardens.insert(id.clone(), body).is_some() {
            tracing::warn!(%id, "timestamp collision, previous garden overwritten");
        }
    }

    tracing::info!(%id, "garden stored");
    Json(CreateGardenResponse { id, link })
}

/// `GET /api/garden/:id` — return the stored snapshot verbatim.
pub async fn get_garden(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let gardens = state.gardens.read().await;
    match gardens.get(&id) {
        Some(body) => Json(body.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Not found" })),
        )
            .into_response(),
    }
}

#[cfg(test)]
#[path = "gardens_test.rs"]
mod tests;
