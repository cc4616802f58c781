//! Session orchestration
//!
//! Ties the rotation engine and the ledger together the way a single user
//! drives them: spin, then accept or decline the pick, or skip someone who
//! is still waiting. Skips and declines share one entry point so both are
//! recorded the same way.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::rotation::RotationEngine;
use crate::statistics::StatisticsLedger;
use crate::store::StateStore;
use crate::types::{Outcome, PresentationRecord};

/// Rejected user intents; none of them change any state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Presenter name is required")]
    MissingPresenter,

    #[error("Unknown presenter: {0}")]
    UnknownPresenter(String),

    #[error("{0} is not the selected presenter")]
    NotSelected(String),

    #[error("{0} is not waiting in the current rotation")]
    NotAvailable(String),
}

/// Rotation as shown to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationView {
    pub roster: Vec<String>,
    pub available: Vec<String>,
    pub used: Vec<String>,
    pub last: Option<String>,
    pub is_complete: bool,
    /// Selected presenter awaiting accept or decline
    pub pending: Option<String>,
}

pub struct Session<R: Rng = StdRng> {
    rotation: RotationEngine<R>,
    ledger: StatisticsLedger,
    pending: Option<String>,
}

impl Session<StdRng> {
    /// Load both components from `store` using `config`
    pub fn open(config: &Config, store: Arc<dyn StateStore>) -> Self {
        let rotation = RotationEngine::load(config.roster.clone(), store.clone());
        let ledger = StatisticsLedger::with_history_limit(store, config.history_limit);
        Self::new(rotation, ledger)
    }
}

impl<R: Rng> Session<R> {
    /// A freshly initialized rotation inherits the ledger's last presenter
    pub fn new(mut rotation: RotationEngine<R>, ledger: StatisticsLedger) -> Self {
        if !rotation.restored() && rotation.last_presenter().is_none() {
            if let Some(last) = ledger.last_presenter() {
                if rotation.remember_last(last) {
                    tracing::debug!(presenter = last, "rotation seeded with last presenter");
                }
            }
        }

        Self {
            rotation,
            ledger,
            pending: None,
        }
    }

    /// Select the next presenter; `None` when everyone had their turn
    pub fn spin(&mut self) -> Option<String> {
        let picked = self.rotation.select_presenter();
        self.pending = picked.clone();
        picked
    }

    /// The selected presenter takes the mic
    pub fn accept(&mut self, presenter: &str) -> Result<PresentationRecord, SessionError> {
        let presenter = self.check_roster(presenter)?;

        if self.pending.as_deref() != Some(presenter.as_str()) {
            return Err(SessionError::NotSelected(presenter));
        }

        self.pending = None;
        Ok(self.record(&presenter, Outcome::Presented, ""))
    }

    /// Skip a waiting presenter, or decline the current pick
    pub fn skip(&mut self, presenter: &str, reason: &str) -> Result<PresentationRecord, SessionError> {
        let presenter = self.check_roster(presenter)?;

        let outcome = if self.pending.as_deref() == Some(presenter.as_str()) {
            self.pending = None;
            Outcome::Declined
        } else if self.rotation.skip_presenter(&presenter) {
            Outcome::Skipped
        } else {
            return Err(SessionError::NotAvailable(presenter));
        };

        Ok(self.record(&presenter, outcome, reason.trim()))
    }

    /// Start a new cycle; statistics are kept
    pub fn reset(&mut self) {
        self.pending = None;
        self.rotation.reset_rotation();
    }

    pub fn clear_statistics(&mut self) {
        self.ledger.clear_statistics();
    }

    pub fn snapshot(&self) -> RotationView {
        RotationView {
            roster: self.rotation.roster().to_vec(),
            available: self.rotation.available().to_vec(),
            used: self.rotation.used().to_vec(),
            last: self.rotation.last_presenter().map(str::to_string),
            is_complete: self.rotation.is_complete(),
            pending: self.pending.clone(),
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn rotation(&self) -> &RotationEngine<R> {
        &self.rotation
    }

    pub fn ledger(&self) -> &StatisticsLedger {
        &self.ledger
    }

    fn check_roster(&self, presenter: &str) -> Result<String, SessionError> {
        let presenter = presenter.trim();

        if presenter.is_empty() {
            return Err(SessionError::MissingPresenter);
        }
        if !self.rotation.roster().iter().any(|p| p == presenter) {
            return Err(SessionError::UnknownPresenter(presenter.to_string()));
        }

        Ok(presenter.to_string())
    }

    fn record(&mut self, presenter: &str, outcome: Outcome, reason: &str) -> PresentationRecord {
        let (skipped, accepted) = outcome.flags();
        tracing::info!(presenter, ?outcome, "rotation outcome");
        self.ledger
            .record_presentation(presenter, skipped, accepted, reason)
    }
}
