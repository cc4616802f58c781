//! Rotation state types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Persisted rotation record
///
/// A presenter is in exactly one of `available` or `used` during a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// Presenters not yet selected or skipped in the current cycle
    pub available: Vec<String>,
    /// Presenters that left `available`, in the order they left
    pub used: Vec<String>,
    /// Most recently selected (not skipped) presenter
    #[serde(default)]
    pub last: Option<String>,
}

impl RotationState {
    /// Initial state for a new cycle: everyone available, nobody used.
    pub fn fresh(roster: &[String]) -> Self {
        Self {
            available: roster.to_vec(),
            used: Vec::new(),
            last: None,
        }
    }

    /// True once every presenter has been selected or skipped.
    ///
    /// A never-started rotation (empty roster) is not complete.
    pub fn is_complete(&self) -> bool {
        self.available.is_empty() && !self.used.is_empty()
    }

    /// Check that `available` and `used` partition the roster.
    pub fn is_consistent_with(&self, roster: &[String]) -> bool {
        let expected: HashSet<&str> = roster.iter().map(String::as_str).collect();
        let mut seen = HashSet::with_capacity(expected.len());

        for name in self.available.iter().chain(self.used.iter()) {
            if !expected.contains(name.as_str()) || !seen.insert(name.as_str()) {
                return false;
            }
        }

        if seen.len() != expected.len() {
            return false;
        }

        match &self.last {
            Some(last) => expected.contains(last.as_str()),
            None => true,
        }
    }
}
