//! Service status route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use lahja_lexicon::Language;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status — remote availability and active lexical settings.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let service = state.service();
    let remote = service.remote();
    let lexical = service.lexical();

    let languages: Vec<serde_json::Value> = Language::ALL
        .iter()
        .map(|l| {
            serde_json::json!({
                "language": l,
                "dialects": lexical.dictionary(*l).len(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "remoteAvailable": remote.is_available(),
        "remoteClassifier": remote.name(),
        "weighting": lexical.weighting(),
        "languages": languages,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, router, send};

    #[tokio::test]
    async fn test_status_shape() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(app, get("/api/status")).await;

        assert_eq!(status, 200);
        assert_eq!(body["remoteAvailable"], false);
        assert_eq!(body["remoteClassifier"], "unavailable");
        assert_eq!(body["weighting"], "position-tiered");
        assert_eq!(body["languages"].as_array().unwrap().len(), 2);
        assert!(body["version"].is_string());
    }
}
