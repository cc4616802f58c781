//! Read-only views over the ledger

use crate::types::{LeaderboardEntry, PresentationRecord, SkipReason};

use super::StatisticsLedger;

impl StatisticsLedger {
    /// Skip reasons given for `presenter`, newest first
    ///
    /// Only skipped records with a non-empty reason are included.
    pub fn skip_reasons(&self, presenter: &str) -> Vec<SkipReason> {
        self.state
            .recent_presentations
            .iter()
            .filter(|r| r.presenter == presenter && r.skipped && !r.acceptance_reason.is_empty())
            .map(|r| SkipReason {
                reason: r.acceptance_reason.clone(),
                date: r.presented_at,
            })
            .collect()
    }

    /// One row per roster member, most presentations first
    ///
    /// Ties keep roster order.
    pub fn leaderboard(&self, roster: &[String]) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = roster
            .iter()
            .map(|name| LeaderboardEntry {
                name: name.clone(),
                presentations: self.state.presentations_for(name),
                skipped: self.state.skips_for(name),
            })
            .collect();

        entries.sort_by(|a, b| b.presentations.cmp(&a.presentations));
        entries
    }

    /// The `limit` newest records
    pub fn recent(&self, limit: usize) -> &[PresentationRecord] {
        let end = limit.min(self.state.recent_presentations.len());
        &self.state.recent_presentations[..end]
    }

    pub fn has_data(&self) -> bool {
        self.state.has_data()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::store::MemoryStore;

    use super::*;

    fn ledger() -> StatisticsLedger {
        StatisticsLedger::load(Arc::new(MemoryStore::new()))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_skip_reasons_filtering_and_order() {
        let mut ledger = ledger();
        ledger.record_presentation("Tim", true, None, "dentist");
        ledger.record_presentation("Tim", true, None, "");
        ledger.record_presentation("Dimy", true, None, "not me");
        ledger.record_presentation("Tim", false, Some(true), "ignored");
        ledger.record_presentation("Tim", true, Some(false), "no slides");

        let reasons = ledger.skip_reasons("Tim");
        let texts: Vec<&str> = reasons.iter().map(|r| r.reason.as_str()).collect();

        assert_eq!(texts, vec!["no slides", "dentist"]);
        assert!(reasons[0].date >= reasons[1].date);

        // Restartable: a second call yields the same sequence
        assert_eq!(ledger.skip_reasons("Tim"), reasons);
        assert!(ledger.skip_reasons("Nobody").is_empty());
    }

    #[test]
    fn test_leaderboard() {
        let mut ledger = ledger();
        ledger.record_presentation("B", false, Some(true), "");
        ledger.record_presentation("B", false, Some(true), "");
        ledger.record_presentation("C", false, Some(true), "");
        ledger.record_presentation("A", true, None, "");

        let board = ledger.leaderboard(&names(&["A", "B", "C", "D"]));
        let order: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(order, vec!["B", "C", "A", "D"]);
        assert_eq!(board[0].presentations, 2);
        assert_eq!(board[2].skipped, 1);
        assert_eq!(board[3].presentations, 0);
    }

    #[test]
    fn test_recent_and_has_data() {
        let mut ledger = ledger();
        assert!(!ledger.has_data());
        assert!(ledger.recent(10).is_empty());

        for name in ["A", "B", "C"] {
            ledger.record_presentation(name, true, None, "");
        }

        assert!(ledger.has_data());
        let recent: Vec<&str> = ledger.recent(2).iter().map(|r| r.presenter.as_str()).collect();
        assert_eq!(recent, vec!["C", "B"]);
        assert_eq!(ledger.recent(10).len(), 3);
    }
}
