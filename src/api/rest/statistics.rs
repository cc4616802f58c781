//! Statistics endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::types::{LeaderboardEntry, PresentationRecord, SkipReason, StatisticsState};

/// Query parameters for the recent list
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// GET /api/statistics
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Json<StatisticsState> {
    Json(state.session.lock().ledger().state().clone())
}

/// DELETE /api/statistics
///
/// Irreversible. Confirming with the user is the client's job.
pub async fn clear_statistics(State(state): State<Arc<AppState>>) -> Json<StatisticsState> {
    let mut session = state.session.lock();
    session.clear_statistics();
    Json(session.ledger().state().clone())
}

/// GET /api/statistics/leaderboard
pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardEntry>> {
    let session = state.session.lock();
    Json(session.ledger().leaderboard(session.rotation().roster()))
}

/// GET /api/statistics/recent?limit=N
pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> Json<Vec<PresentationRecord>> {
    Json(state.session.lock().ledger().recent(params.limit).to_vec())
}

/// GET /api/statistics/skip-reasons/:presenter
pub async fn skip_reasons(
    State(state): State<Arc<AppState>>,
    Path(presenter): Path<String>,
) -> Json<Vec<SkipReason>> {
    Json(state.session.lock().ledger().skip_reasons(&presenter))
}
