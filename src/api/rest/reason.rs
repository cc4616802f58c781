//! Mic-drop reason endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, PresenterRequest};
use crate::api::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReasonResponse {
    pub reason: String,
}

/// POST /api/mic-drop-reason
///
/// Never fails once a presenter is given: upstream problems fall back to the
/// local generator.
pub async fn mic_drop_reason(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PresenterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let presenter = match &payload {
        Ok(Json(request)) => request.presenter().trim().to_string(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable reason request");
            String::new()
        }
    };

    if presenter.is_empty() {
        return ApiError::bad_request("Presenter name is required")
            .with_status(StatusCode::BAD_REQUEST);
    }

    let reason = state.reasons.generate(&presenter).await;
    (StatusCode::OK, Json(ReasonResponse { reason })).into_response()
}
