use axum::body::to_bytes;
use axum::response::IntoResponse;
use serde_json::json;

use super::*;
use crate::state::test_helpers::seed_garden;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_id_and_viewer_link() {
    let state = AppState::new();
    let body = json!({"grid": [[0, 1], [1, 0]], "version": 5, "cols": 2, "rows": 2});

    let Json(response) = create_garden(State(state.clone()), Json(body)).await;
    assert_eq!(response.link, format!("/garden/{}", response.id));
    assert!(response.id.parse::<u128>().is_ok());
    assert!(state.gardens.read().await.contains_key(&response.id));
}

#[tokio::test]
async fn create_then_read_returns_exact_posted_body() {
    let state = AppState::new();
    let posted = json!({"grid": [[0, 1], [1, 0]], "version": 5, "cols": 2, "rows": 2});

    let Json(created) = create_garden(State(state.clone()), Json(posted.clone())).await;
    let response = get_garden(State(state), Path(created.id)).await;
    assert_eq!(body_json(response).await, posted);
}

#[tokio::test]
async fn read_does_not_reshape_arbitrary_payloads() {
    // The store is schemaless; even a non-snapshot body round-trips.
    let state = AppState::new();
    let posted = json!({"anything": ["goes", 42, null], "nested": {"deep": true}});
    let id = seed_garden(&state, posted.clone()).await;

    let response = get_garden(State(state), Path(id)).await;
    assert_eq!(body_json(response).await, posted);
}

#[tokio::test]
async fn unknown_id_is_a_structured_404() {
    let state = AppState::new();
    let response = get_garden(State(state), Path("doesnotexist".to_owned()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn colliding_ids_overwrite_silently() {
    let state = AppState::new();
    let id = seed_garden(&state, json!({"version": 1})).await;
    {
        let mut gardens = state.gardens.write().await;
        gardens.insert(id.clone(), json!({"version": 5}));
    }
    let response = get_garden(State(state), Path(id)).await;
    assert_eq!(body_json(response).await, json!({"version": 5}));
}
