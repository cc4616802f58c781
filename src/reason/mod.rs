//! Mic-drop reasons
//!
//! A reason is a short celebratory sentence naming the selected presenter.
//! The remote text generator is optional: any failure, or its absence,
//! falls back to the local template generator, so generating a reason
//! never fails.

mod openai;
mod templates;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::{OpenAiReasonSource, DEFAULT_OPENAI_MODEL, OPENAI_CHAT_URL};
pub use templates::{fallback_reason, ADJECTIVES, TEMPLATES};

/// Why a remote reason could not be produced
#[derive(Debug, Error)]
pub enum ReasonError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream returned no text")]
    EmptyResponse,
}

/// A remote text generator
#[async_trait]
pub trait ReasonSource: Send + Sync {
    async fn fetch_reason(&self, presenter: &str) -> Result<String, ReasonError>;
}

/// Remote-first reason generator with local fallback
#[derive(Clone, Default)]
pub struct ReasonGenerator {
    remote: Option<Arc<dyn ReasonSource>>,
}

impl ReasonGenerator {
    /// Templates only
    pub fn local() -> Self {
        Self { remote: None }
    }

    pub fn with_source(source: Arc<dyn ReasonSource>) -> Self {
        Self {
            remote: Some(source),
        }
    }

    /// Remote generation when a credential is configured, templates otherwise
    pub fn from_api_key(api_key: Option<&str>, model: &str, timeout: Duration) -> Self {
        let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
            tracing::info!("using fallback reason generator (set OPENAI_API_KEY for AI-powered reasons)");
            return Self::local();
        };

        match OpenAiReasonSource::new(api_key, model, timeout) {
            Ok(source) => {
                tracing::info!(model = source.model(), "OpenAI reason generation enabled");
                Self::with_source(Arc::new(source))
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not build OpenAI client, using fallback reasons");
                Self::local()
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// A reason for `presenter`; always succeeds
    pub async fn generate(&self, presenter: &str) -> String {
        if let Some(remote) = &self.remote {
            match remote.fetch_reason(presenter).await {
                Ok(reason) => return reason,
                Err(e) => tracing::warn!(presenter, error = %e, "remote reason failed, using fallback"),
            }
        }

        local_reason(presenter)
    }
}

fn local_reason(presenter: &str) -> String {
    fallback_reason(presenter, &mut rand::thread_rng())
}
