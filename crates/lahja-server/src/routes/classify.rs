//! Classification route.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use lahja_lexicon::Language;
use serde::Deserialize;
use tracing::info;

use super::{error_response, json_ok};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/classify", post(classify))
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    pub language: String,
}

/// POST /api/classify — ranked dialects for `{text, language}`.
async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let start = Instant::now();

    let text = req.text.trim();
    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "text must not be empty" })),
        );
    }

    let language: Language = match req.language.parse() {
        Ok(l) => l,
        Err(e) => return error_response(&e),
    };

    let service = state.service();
    match service.classify(text, language).await {
        Ok(classification) => {
            info!(
                "Classified {} chars of {} via {} in {}ms",
                text.chars().count(),
                language,
                classification.source,
                start.elapsed().as_millis()
            );
            json_ok(&classification)
        }
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::routes::test_support::{json_request, router, send};

    #[tokio::test]
    async fn test_classify_arabic() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(
            app,
            json_request("POST", "/api/classify", json!({"text": "إيه", "language": "arabic"})),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["source"], "lexical");
        assert_eq!(body["results"][0]["dialect"], "Egyptian Arabic");
        assert_eq!(body["results"][0]["confidence"], 0.6);
        assert!(body["results"][0]["description"].is_string());
    }

    #[tokio::test]
    async fn test_classify_english_shape() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(
            app,
            json_request(
                "POST",
                "/api/classify",
                json!({"text": "I love my lorry and the petrol station", "language": "English"}),
            ),
        )
        .await;

        assert_eq!(status, 200);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["dialect"], "British English");
        assert_eq!(results[1]["dialect"], "American English");
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(
            app,
            json_request("POST", "/api/classify", json!({"text": "   ", "language": "arabic"})),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_classify_rejects_unknown_language() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = router(&dir);
        let (status, body) = send(
            app,
            json_request("POST", "/api/classify", json!({"text": "bonjour", "language": "french"})),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("french"));
    }
}
