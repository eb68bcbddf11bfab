//! Dictionary inspection route.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use lahja_lexicon::Language;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/dialects/{language}", get(list_dialects))
}

/// GET /api/dialects/{language} — identifiers, metadata and markers in dictionary order.
async fn list_dialects(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> impl IntoResponse {
    let language: Language = match language.parse() {
        Ok(l) => l,
        Err(e) => return error_response(&e),
    };

    let service = state.service();
    let dictionary = service.lexical().dictionary(language);

    let dialects: Vec<serde_json::Value> = dictionary
        .entries()
        .iter()
        .map(|entry| {
            let info = dictionary.info(entry.id);
            serde_json::json!({
                "id": entry.id,
                "name": info.map(|i| i.display_name).unwrap_or(entry.id),
                "description": info.map(|i| i.description),
                "markers": entry.markers,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "language": language,
            "dialects": dialects,
        })),
    )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{get, router, send};

    #[tokio::test]
    async fn test_list_english() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(app, get("/api/dialects/english")).await;

        assert_eq!(status, 200);
        assert_eq!(body["language"], "english");
        let dialects = body["dialects"].as_array().unwrap();
        assert_eq!(dialects.len(), 4);
        assert_eq!(dialects[0]["id"], "american");
        assert_eq!(dialects[0]["name"], "American English");
        assert!(dialects[1]["markers"]
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m == "lorry"));
    }

    #[tokio::test]
    async fn test_list_unknown_language() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, _) = send(app, get("/api/dialects/klingon")).await;
        assert_eq!(status, 400);
    }
}
