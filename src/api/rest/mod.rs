//! REST API module for HTTP endpoints
//!
//! - `POST /api/mic-drop-reason` - Generate a reason for a presenter
//! - `GET /api/rotation` and `POST /api/rotation/{spin,skip,accept,reset}`
//! - `GET|DELETE /api/statistics`, leaderboard, recent, skip reasons

pub mod reason;
pub mod rotation;
pub mod statistics;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::session::SessionError;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "CONFLICT".to_string(),
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        match self {
            SessionError::MissingPresenter | SessionError::UnknownPresenter(_) => {
                ApiError::bad_request(self.to_string()).with_status(StatusCode::BAD_REQUEST)
            }
            SessionError::NotSelected(_) | SessionError::NotAvailable(_) => {
                ApiError::conflict(self.to_string()).with_status(StatusCode::CONFLICT)
            }
        }
    }
}

/// Body naming a presenter, with an optional reason
#[derive(Debug, Default, Deserialize)]
pub struct PresenterRequest {
    #[serde(default)]
    pub presenter: Option<String>,
    #[serde(default)]
    pub reason: String,
}

impl PresenterRequest {
    pub fn presenter(&self) -> &str {
        self.presenter.as_deref().unwrap_or("")
    }
}

/// Unwrap a JSON body, answering unreadable ones with an `ApiError`
pub fn presenter_body(
    payload: Result<Json<PresenterRequest>, JsonRejection>,
) -> Result<PresenterRequest, Response> {
    payload.map(|Json(request)| request).map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable request body");
        ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
            .with_status(StatusCode::BAD_REQUEST)
    })
}
