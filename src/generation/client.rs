// src/generation/client.rs
//! HTTP client for the external chat completion service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{GenerationError, Section};

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Fixed generation parameters. Intentionally not configurable so every
/// section is drafted with the same model behavior.
const MODEL: &str = "llama-3.1-70b-versatile";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Seam for the guidance orchestrator and handlers, so callers can be
/// exercised without a live service.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        section: Section,
        prompt: &str,
        context: &str,
    ) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// One network call per generation request; no retries, no caching.
pub struct GenerationClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GenerationClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn call(&self, rendered_prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: rendered_prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        info!("Calling chat completion service: {}", self.base_url);

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!("Chat completion response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!("Chat completion service error {}: {}", status, body);
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;

        // A response with no text content degrades to an empty string
        // rather than an error.
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!("Generated content length: {}", content.len());

        Ok(content)
    }
}

#[async_trait]
impl ContentGenerator for GenerationClient {
    async fn generate(
        &self,
        section: Section,
        prompt: &str,
        context: &str,
    ) -> Result<String, GenerationError> {
        let rendered = section.render_prompt(prompt, context);
        self.call(&rendered).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_without_calling_out() {
        // Unroutable base URL: if the client attempted a network call the
        // error would be Transport, not MissingCredential.
        let client =
            GenerationClient::new(None).with_base_url("http://127.0.0.1:0".to_string());
        let err = client
            .generate(Section::Skills, "p", "c")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[test]
    fn test_response_content_degrades_to_empty() {
        let raw = r#"{"choices":[{"message":{"content":null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        assert_eq!(content, "");
    }

    #[test]
    fn test_response_without_choices_degrades_to_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
