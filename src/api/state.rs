//! Shared application state for HTTP handlers

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::reason::ReasonGenerator;
use crate::session::Session;
use crate::store::StateStore;

/// One session (single user) plus the reason generator
///
/// Handlers lock the session only for synchronous work; the guard is never
/// held across an `.await`.
pub struct AppState {
    pub session: Mutex<Session>,
    pub reasons: ReasonGenerator,
}

impl AppState {
    pub fn new(session: Session, reasons: ReasonGenerator) -> Self {
        Self {
            session: Mutex::new(session),
            reasons,
        }
    }

    /// Build everything `config` describes on top of `store`
    pub fn from_config(config: &Config, store: Arc<dyn StateStore>) -> Self {
        let session = Session::open(config, store);
        let reasons = ReasonGenerator::from_api_key(
            config.openai_api_key.as_deref(),
            &config.openai_model,
            config.reason_timeout,
        );
        Self::new(session, reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_from_config_without_key_is_local() {
        let config = Config::default();
        let state = AppState::from_config(&config, Arc::new(MemoryStore::new()));

        assert!(!state.reasons.is_remote());
        assert_eq!(state.session.lock().snapshot().available, config.roster);
    }
}
