//! Statistics state types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PresentationRecord;

/// Persisted statistics record
///
/// The counters are maintained incrementally and stay authoritative even
/// when `recent_presentations` has been truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsState {
    pub presentation_counts: BTreeMap<String, u64>,
    pub skipped_counts: BTreeMap<String, u64>,
    /// Newest first
    pub recent_presentations: Vec<PresentationRecord>,
    pub total_presentations: u64,
    pub last_presentation: Option<DateTime<Utc>>,
    pub last_presenter: Option<String>,
}

impl StatisticsState {
    /// Total must equal the sum of the per-presenter counts
    pub fn is_consistent(&self) -> bool {
        self.presentation_counts.values().sum::<u64>() == self.total_presentations
    }

    /// Anything worth showing (or clearing)?
    pub fn has_data(&self) -> bool {
        self.total_presentations > 0 || !self.recent_presentations.is_empty()
    }

    pub fn presentations_for(&self, presenter: &str) -> u64 {
        self.presentation_counts.get(presenter).copied().unwrap_or(0)
    }

    pub fn skips_for(&self, presenter: &str) -> u64 {
        self.skipped_counts.get(presenter).copied().unwrap_or(0)
    }
}

/// One row of the presentation leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub presentations: u64,
    pub skipped: u64,
}
