//! Runtime configuration routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use lahja_core::{LahjaConfig, WeightingPolicy};
use serde::Deserialize;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/config", get(get_config).put(update_config))
}

#[derive(Debug, Deserialize)]
pub struct ConfigUpdate {
    pub weighting: Option<String>,
}

fn config_response(config: &LahjaConfig) -> serde_json::Value {
    serde_json::json!({
        "weighting": config.lexicon.weighting,
        "englishMatchWeight": config.lexicon.english_match_weight,
        "arabicBaselines": config.lexicon.arabic_baselines,
        "englishBaselines": config.lexicon.english_baselines,
        "remoteConfigured": config.remote.endpoint.is_some(),
        "remoteTimeoutMs": config.remote.timeout_ms,
    })
}

/// GET /api/config — active settings (remote endpoint not exposed).
async fn get_config(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(config_response(&state.config.read()))
}

/// PUT /api/config — change the weighting policy and persist it.
async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ConfigUpdate>,
) -> impl IntoResponse {
    if let Some(raw) = &update.weighting {
        let policy: WeightingPolicy = match raw.parse() {
            Ok(p) => p,
            Err(e) => return error_response(&e),
        };
        if let Err(e) = state.set_weighting(policy) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Failed to save config: {}", e) })),
            );
        }
    }

    (StatusCode::OK, Json(config_response(&state.config.read())))
}
