//! Flashcard generation through an OpenAI-compatible chat completions API.

use flashcard_core::pipeline::{user_prompt, SYSTEM_PROMPT};
use flashcard_core::{CollaboratorError, FlashcardGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::config::Config;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Generator backed by a chat completions endpoint.
///
/// [`FlashcardGenerator::generate`] blocks on the runtime it was created on,
/// so call it from a blocking task, not from an async handler directly.
pub struct OpenAiGenerator {
    client: Client,
    handle: Handle,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    /// Returns `None` when no API key is configured.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openai_key.clone()?;
        Some(Self {
            client: Client::new(),
            handle: Handle::current(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.openai_model.clone(),
        })
    }

    async fn complete(&self, notes: &str) -> Result<String, CollaboratorError> {
        let url = format!("{}/chat/completions", self.base_url);
        let prompt = user_prompt(notes);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        tracing::info!(model = %self.model, chars = notes.len(), "requesting flashcards");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CollaboratorError::new(format!("network error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CollaboratorError::new(format!(
                "completion request failed: {status} - {message}"
            )));
        }

        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|e| CollaboratorError::new(format!("invalid completion response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CollaboratorError::new("completion response had no content"))
    }
}

impl FlashcardGenerator for OpenAiGenerator {
    fn generate(&self, notes: &str) -> Result<String, CollaboratorError> {
        self.handle.block_on(self.complete(notes))
    }
}
