//! Utility functions and helpers
//!
//! Atomic file writes and timestamp helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, cleanup_temp_files};
pub use time::{current_iso8601, now_millis, to_iso8601};
