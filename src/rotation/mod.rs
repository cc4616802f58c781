//! Rotation Engine - fair presenter selection
//!
//! Each cycle visits every roster member exactly once. A presenter leaves
//! `available` either by being selected or by being skipped, and only an
//! explicit reset starts the next cycle.
//!
//! # Selection
//!
//! ```text
//! eligible = available \ {last}
//! if eligible is empty: eligible = available   (single-candidate tail)
//! pick uniformly from eligible, move it to the end of `used`, set last
//! ```
//!
//! The random source is injected so tests can seed it.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::store::{load_json, save_json, StateStore, ROTATION_KEY};
use crate::types::RotationState;

/// Rotation state machine bound to a roster and a store
pub struct RotationEngine<R: Rng = StdRng> {
    roster: Vec<String>,
    state: RotationState,
    store: Arc<dyn StateStore>,
    rng: R,
    restored: bool,
}

impl RotationEngine<StdRng> {
    /// Load the engine with an entropy-seeded random source
    pub fn load(roster: Vec<String>, store: Arc<dyn StateStore>) -> Self {
        Self::with_rng(roster, store, StdRng::from_entropy())
    }
}

impl<R: Rng> RotationEngine<R> {
    /// Load the engine from `store`, falling back to a fresh cycle
    ///
    /// A persisted record that does not partition `roster` (for example
    /// after the roster was edited) is treated like a corrupt one.
    pub fn with_rng(roster: Vec<String>, store: Arc<dyn StateStore>, rng: R) -> Self {
        let persisted: Option<RotationState> = load_json(store.as_ref(), ROTATION_KEY);

        let (state, restored) = match persisted {
            Some(state) if state.is_consistent_with(&roster) => (state, true),
            Some(_) => {
                tracing::warn!("persisted rotation does not match the roster, starting fresh");
                (RotationState::fresh(&roster), false)
            }
            None => (RotationState::fresh(&roster), false),
        };

        let engine = Self {
            roster,
            state,
            store,
            rng,
            restored,
        };

        if !engine.restored {
            engine.persist();
        }

        tracing::debug!(
            available = engine.state.available.len(),
            used = engine.state.used.len(),
            restored = engine.restored,
            "rotation loaded"
        );

        engine
    }

    /// Pick the next presenter, or `None` when the cycle is exhausted
    ///
    /// Never returns the previous pick while another candidate remains.
    pub fn select_presenter(&mut self) -> Option<String> {
        let count = self.state.available.len();
        if count == 0 {
            return None;
        }

        let last = self.state.last.as_deref();
        let eligible: Vec<usize> = (0..count)
            .filter(|&i| Some(self.state.available[i].as_str()) != last)
            .collect();

        let index = if eligible.is_empty() {
            self.rng.gen_range(0..count)
        } else {
            eligible[self.rng.gen_range(0..eligible.len())]
        };

        let chosen = self.state.available.remove(index);
        self.state.used.push(chosen.clone());
        self.state.last = Some(chosen.clone());
        self.persist();

        tracing::debug!(presenter = %chosen, remaining = self.state.available.len(), "presenter selected");

        Some(chosen)
    }

    /// Move `name` from `available` to `used` without presenting
    ///
    /// Returns `false` (and changes nothing) when `name` is not available.
    pub fn skip_presenter(&mut self, name: &str) -> bool {
        let Some(index) = self.state.available.iter().position(|p| p == name) else {
            return false;
        };

        let skipped = self.state.available.remove(index);
        self.state.used.push(skipped);
        self.persist();

        tracing::debug!(presenter = name, "presenter skipped");
        true
    }

    /// Start a new cycle with the whole roster available
    pub fn reset_rotation(&mut self) {
        self.state = RotationState::fresh(&self.roster);
        self.persist();
        tracing::debug!("rotation reset");
    }

    /// Record `name` as the previous pick without moving anyone
    ///
    /// Ignored for names outside the roster.
    pub fn remember_last(&mut self, name: &str) -> bool {
        if !self.roster.iter().any(|p| p == name) {
            return false;
        }

        self.state.last = Some(name.to_string());
        self.persist();
        true
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn available(&self) -> &[String] {
        &self.state.available
    }

    pub fn used(&self) -> &[String] {
        &self.state.used
    }

    pub fn last_presenter(&self) -> Option<&str> {
        self.state.last.as_deref()
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    /// Whether the state came from the store rather than a fresh start
    pub fn restored(&self) -> bool {
        self.restored
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), ROTATION_KEY, &self.state) {
            tracing::warn!(error = %e, "failed to persist rotation state");
        }
    }
}
