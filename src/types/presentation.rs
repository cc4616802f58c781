//! Presentation record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single rotation outcome in the ledger
///
/// Records are immutable once created. `accepted` is `None` until the
/// presenter confirmed or declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    pub id: String,
    pub presenter: String,
    pub presented_at: DateTime<Utc>,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default)]
    pub accepted: Option<bool>,
    /// Decline or skip reason; empty when none was given
    #[serde(default)]
    pub acceptance_reason: String,
}

impl PresentationRecord {
    /// Whether this record counts as a presentation that happened
    pub fn is_presentation(&self) -> bool {
        !self.skipped
    }
}

/// A skip reason with the time it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipReason {
    pub reason: String,
    pub date: DateTime<Utc>,
}

/// What happened to a presenter, as recorded by the orchestration layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Selected and accepted
    Presented,
    /// Bypassed straight from the available list
    Skipped,
    /// Selected, then declined
    Declined,
}

impl Outcome {
    /// `(skipped, accepted)` as stored on the record
    pub fn flags(self) -> (bool, Option<bool>) {
        match self {
            Outcome::Presented => (false, Some(true)),
            Outcome::Skipped => (true, None),
            Outcome::Declined => (true, Some(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_names() {
        let json = r#"{
            "id": "1718000000000",
            "presenter": "Tim",
            "presented_at": "2024-06-10T06:13:20.000Z",
            "skipped": true,
            "accepted": null,
            "acceptance_reason": "on holiday"
        }"#;

        let record: PresentationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.presenter, "Tim");
        assert!(record.skipped);
        assert_eq!(record.accepted, None);
        assert_eq!(record.acceptance_reason, "on holiday");
        assert!(!record.is_presentation());

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("presented_at").is_some());
        assert!(value.get("acceptance_reason").is_some());
        assert_eq!(value["accepted"], serde_json::Value::Null);
    }

    #[test]
    fn test_outcome_flags() {
        assert_eq!(Outcome::Presented.flags(), (false, Some(true)));
        assert_eq!(Outcome::Skipped.flags(), (true, None));
        assert_eq!(Outcome::Declined.flags(), (true, Some(false)));
    }
}
