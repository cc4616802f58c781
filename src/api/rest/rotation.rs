//! Rotation endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::{presenter_body, PresenterRequest};
use crate::api::state::AppState;
use crate::session::RotationView;
use crate::types::PresentationRecord;

#[derive(Debug, Serialize)]
pub struct SpinResponse {
    /// `null` once the cycle is exhausted
    pub presenter: Option<String>,
    pub rotation: RotationView,
}

#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub record: PresentationRecord,
    pub rotation: RotationView,
}

/// GET /api/rotation
pub async fn get_rotation(State(state): State<Arc<AppState>>) -> Json<RotationView> {
    Json(state.session.lock().snapshot())
}

/// POST /api/rotation/spin
pub async fn spin(State(state): State<Arc<AppState>>) -> Json<SpinResponse> {
    let mut session = state.session.lock();
    let presenter = session.spin();

    Json(SpinResponse {
        presenter,
        rotation: session.snapshot(),
    })
}

/// POST /api/rotation/skip - skip a waiting presenter or decline the pick
pub async fn skip(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PresenterRequest>, JsonRejection>,
) -> Result<Json<OutcomeResponse>, Response> {
    let request = presenter_body(payload)?;
    let mut session = state.session.lock();
    let record = session
        .skip(request.presenter(), &request.reason)
        .map_err(IntoResponse::into_response)?;

    Ok(Json(OutcomeResponse {
        record,
        rotation: session.snapshot(),
    }))
}

/// POST /api/rotation/accept
pub async fn accept(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PresenterRequest>, JsonRejection>,
) -> Result<Json<OutcomeResponse>, Response> {
    let request = presenter_body(payload)?;
    let mut session = state.session.lock();
    let record = session
        .accept(request.presenter())
        .map_err(IntoResponse::into_response)?;

    Ok(Json(OutcomeResponse {
        record,
        rotation: session.snapshot(),
    }))
}

/// POST /api/rotation/reset
pub async fn reset(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock();
    session.reset();
    Json(session.snapshot())
}
