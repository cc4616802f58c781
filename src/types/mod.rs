//! Data types for the presenter rotation
//!
//! This module contains the persisted records and the values handed to the
//! UI layer.

mod presentation;
mod rotation;
mod statistics;

pub use presentation::{Outcome, PresentationRecord, SkipReason};
pub use rotation::RotationState;
pub use statistics::{LeaderboardEntry, StatisticsState};
