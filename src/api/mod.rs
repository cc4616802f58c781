//! API module for HTTP endpoints
//!
//! This module exposes the rotation, the statistics and reason generation
//! to the UI.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
