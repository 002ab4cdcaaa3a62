//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the single in-memory garden map: snapshot id -> stored JSON
//! body, verbatim as posted. Gardens live for the process lifetime only;
//! there is no expiry, listing, or deletion.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the map is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Stored gardens keyed by creation-timestamp id.
    pub gardens: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mint a garden id from the current time in milliseconds.
///
/// Rapid concurrent creates can mint the same id; the later write wins.
/// Known limitation, kept for link compatibility with existing shares.
#[must_use]
pub fn next_garden_id() -> String {
    let ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis());
    ms.to_string()
}
