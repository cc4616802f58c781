//! OpenAI chat-completions reason source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ReasonError, ReasonSource};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a witty assistant that creates fun, one-sentence \
\"mic-drop reasons\" for why someone should present next. Be playful, positive, and include \
their name. Keep it under 20 words and make it energetic!";

/// Asks a chat model for a reason; one attempt, no retries
#[derive(Clone)]
pub struct OpenAiReasonSource {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiReasonSource {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ReasonError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: OPENAI_CHAT_URL.to_string(),
        })
    }

    /// Point at a compatible endpoint instead of api.openai.com
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, presenter: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Create a fun mic-drop reason for {presenter} to present next."),
                },
            ],
            max_tokens: 50,
            temperature: 0.9,
        }
    }
}

#[async_trait]
impl ReasonSource for OpenAiReasonSource {
    async fn fetch_reason(&self, presenter: &str) -> Result<String, ReasonError> {
        let body = self.build_request(presenter);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReasonError::Status(status.as_u16()));
        }

        let parsed: ChatCompletionResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ReasonError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
