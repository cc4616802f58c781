//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{reason, rotation, statistics};
use super::state::AppState;
use crate::utils::current_iso8601;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The UI may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/mic-drop-reason", post(reason::mic_drop_reason))
        .route("/api/rotation", get(rotation::get_rotation))
        .route("/api/rotation/spin", post(rotation::spin))
        .route("/api/rotation/skip", post(rotation::skip))
        .route("/api/rotation/accept", post(rotation::accept))
        .route("/api/rotation/reset", post(rotation::reset))
        .route(
            "/api/statistics",
            get(statistics::get_statistics).delete(statistics::clear_statistics),
        )
        .route("/api/statistics/leaderboard", get(statistics::leaderboard))
        .route("/api/statistics/recent", get(statistics::recent))
        .route(
            "/api/statistics/skip-reasons/:presenter",
            get(statistics::skip_reasons),
        )
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": current_iso8601(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::from_config(
            &Config::default(),
            Arc::new(MemoryStore::new()),
        ));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "OK");
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
