//! HTTP route handlers under `/api`.

pub mod classify;
pub mod config;
pub mod dialects;
pub mod status;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use axum::Router;
use lahja_core::Error;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(classify::routes())
        .merge(dialects::routes())
        .merge(status::routes())
        .merge(config::routes())
}

/// Map a core error onto an HTTP status and `{error}` body.
pub fn error_response(err: &Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        Error::InvalidArgument(_) | Error::Config(_) => StatusCode::BAD_REQUEST,
        Error::Remote(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

/// 200 with `value` as the body, or the mapped error if it fails to serialize.
pub fn json_ok<T: Serialize>(value: &T) -> (StatusCode, Json<serde_json::Value>) {
    match serde_json::to_value(value) {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(e) => error_response(&Error::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn test_json_ok_serializes_body() {
        let (status, Json(body)) = json_ok(&serde_json::json!({ "ok": true }));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[test]
    fn test_json_ok_maps_serialization_failure() {
        let (status, Json(body)) = json_ok(&Unserializable);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("cannot serialize"));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use lahja_core::LahjaConfig;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Router backed by default config saved under a temp dir.
    pub fn router(dir: &tempfile::TempDir) -> (Router, Arc<AppState>) {
        let config = LahjaConfig::load(&dir.path().join("lahja.json"));
        let state = Arc::new(AppState::new(config).unwrap());
        (super::build_router(state.clone()), state)
    }

    /// Send one request and decode the JSON response.
    pub async fn send(
        router: Router,
        request: Request<Body>,
    ) -> (axum::http::StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }
}
