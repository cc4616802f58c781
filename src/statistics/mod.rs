//! Statistics Ledger - presentation history and counts
//!
//! Every rotation outcome becomes one immutable [`PresentationRecord`],
//! prepended to a newest-first log. Per-presenter counters are updated in the
//! same step and are never recomputed from the log, so truncating the log
//! for storage size leaves the totals intact.

mod query;

use std::sync::Arc;

use crate::store::{load_json, save_json, StateStore, STATISTICS_KEY};
use crate::types::{PresentationRecord, StatisticsState};
use crate::utils::now_millis;

/// Default number of records kept in the log
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Persisted ids further ahead of the clock than this are not trusted
const MAX_ID_SKEW_MS: i64 = 24 * 60 * 60 * 1000;

pub struct StatisticsLedger {
    state: StatisticsState,
    store: Arc<dyn StateStore>,
    /// Log length cap, `0` keeps everything
    history_limit: usize,
    /// Highest record id handed out so far
    last_id: i64,
}

impl StatisticsLedger {
    /// Load with the default history cap
    pub fn load(store: Arc<dyn StateStore>) -> Self {
        Self::with_history_limit(store, DEFAULT_HISTORY_LIMIT)
    }

    /// Load from `store`; missing, corrupt or inconsistent records start empty
    pub fn with_history_limit(store: Arc<dyn StateStore>, history_limit: usize) -> Self {
        let state = match load_json::<StatisticsState>(store.as_ref(), STATISTICS_KEY) {
            Some(state) if state.is_consistent() => state,
            Some(_) => {
                tracing::warn!("persisted statistics have inconsistent totals, starting empty");
                StatisticsState::default()
            }
            None => StatisticsState::default(),
        };

        let horizon = now_millis().timestamp_millis().saturating_add(MAX_ID_SKEW_MS);
        let last_id = state
            .recent_presentations
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .filter(|id| *id <= horizon)
            .max()
            .unwrap_or(0);

        tracing::debug!(
            total = state.total_presentations,
            records = state.recent_presentations.len(),
            history_limit,
            "statistics loaded"
        );

        Self {
            state,
            store,
            history_limit,
            last_id,
        }
    }

    /// Append one outcome to the ledger
    ///
    /// Skips bump `skippedCounts` only. Anything else counts as a
    /// presentation and moves `lastPresenter`/`lastPresentation`. The reason
    /// is kept on the record either way.
    pub fn record_presentation(
        &mut self,
        presenter: &str,
        skipped: bool,
        accepted: Option<bool>,
        reason: &str,
    ) -> PresentationRecord {
        let presented_at = now_millis();
        let id = presented_at
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        self.last_id = id;

        let record = PresentationRecord {
            id: id.to_string(),
            presenter: presenter.to_string(),
            presented_at,
            skipped,
            accepted,
            acceptance_reason: reason.to_string(),
        };

        self.state.recent_presentations.insert(0, record.clone());
        if self.history_limit > 0 {
            self.state.recent_presentations.truncate(self.history_limit);
        }

        if record.is_presentation() {
            *self
                .state
                .presentation_counts
                .entry(presenter.to_string())
                .or_insert(0) += 1;
            self.state.total_presentations += 1;
            self.state.last_presentation = Some(presented_at);
            self.state.last_presenter = Some(presenter.to_string());
        } else {
            *self
                .state
                .skipped_counts
                .entry(presenter.to_string())
                .or_insert(0) += 1;
        }

        self.persist();

        tracing::debug!(presenter, skipped, ?accepted, "presentation recorded");

        record
    }

    /// Wipe everything, counts included
    pub fn clear_statistics(&mut self) {
        self.state = StatisticsState::default();
        self.persist();
        tracing::info!("statistics cleared");
    }

    pub fn state(&self) -> &StatisticsState {
        &self.state
    }

    pub fn last_presenter(&self) -> Option<&str> {
        self.state.last_presenter.as_deref()
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), STATISTICS_KEY, &self.state) {
            tracing::warn!(error = %e, "failed to persist statistics");
        }
    }
}
