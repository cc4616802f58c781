//! Who Gets the Mic? - fair presenter rotation
//!
//! Rotates presenter selection among a fixed roster and keeps a ledger of
//! what happened (presented, skipped, declined with a reason).
//!
//! # Features
//!
//! - **Fair cycles**: everyone is picked once before anyone is picked again
//! - **No immediate repeats**: the previous pick is excluded while others remain
//! - **Durable state**: rotation and statistics survive restarts and recover
//!   from corrupt files
//! - **Mic-drop reasons**: optional AI text with a local template fallback
//!
//! # Modules
//!
//! - `types`: Persisted records (RotationState, StatisticsState, PresentationRecord)
//! - `store`: Key-value persistence port with file and memory stores
//! - `rotation`: The Rotation Engine
//! - `statistics`: The Statistics Ledger
//! - `session`: Spin / accept / skip orchestration over both
//! - `reason`: Mic-drop reason generation
//! - `config`: Environment configuration
//! - `api`: Axum HTTP surface
//! - `utils`: Atomic writes and timestamps
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mic_rotation::{Config, JsonFileStore, Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let store = Arc::new(JsonFileStore::open(&config.data_dir)?);
//!     let mut session = Session::open(&config, store);
//!
//!     if let Some(presenter) = session.spin() {
//!         session.accept(&presenter)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod reason;
pub mod rotation;
pub mod session;
pub mod statistics;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use reason::{ReasonError, ReasonGenerator, ReasonSource};
pub use rotation::RotationEngine;
pub use session::{RotationView, Session, SessionError};
pub use statistics::StatisticsLedger;
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError};
pub use types::{
    LeaderboardEntry, Outcome, PresentationRecord, RotationState, SkipReason, StatisticsState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
