use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use codepulse_core::model::{AiSettings, AiSettingsDraft, AiSettingsError};

use crate::error::EditorialError;

/// A chat-completions backend that turns one user prompt into reply text.
#[async_trait]
pub trait Completions: Send + Sync {
    /// Whether a request can be attempted at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Send `prompt` as a single user message and return the reply content.
    ///
    /// # Errors
    ///
    /// Returns `EditorialError` when the backend is disabled, the request
    /// fails, or the reply carries no content.
    async fn complete(&self, prompt: &str) -> Result<String, EditorialError>;
}

/// Read completions settings from `CODEPULSE_AI_API_KEY`,
/// `CODEPULSE_AI_BASE_URL` and `CODEPULSE_AI_MODEL`.
///
/// # Errors
///
/// Returns `AiSettingsError` if the configured base URL is invalid.
pub fn ai_settings_from_env() -> Result<AiSettings, AiSettingsError> {
    AiSettingsDraft {
        api_key: env::var("CODEPULSE_AI_API_KEY").ok(),
        model: env::var("CODEPULSE_AI_MODEL").ok(),
        base_url: env::var("CODEPULSE_AI_BASE_URL").ok(),
    }
    .validate()
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct CompletionsClient {
    client: Client,
    settings: AiSettings,
}

impl CompletionsClient {
    #[must_use]
    pub fn new(settings: AiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl Completions for CompletionsClient {
    fn enabled(&self) -> bool {
        self.settings.is_enabled()
    }

    async fn complete(&self, prompt: &str) -> Result<String, EditorialError> {
        let api_key = self.settings.api_key().ok_or(EditorialError::Disabled)?;

        let url = format!("{}/chat/completions", self.settings.base_url());
        let payload = ChatRequest {
            model: self.settings.model(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(%url, model = payload.model, "sending completions request");
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EditorialError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(EditorialError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_model_and_single_user_message() {
        let payload = ChatRequest {
            model: "sonar-pro",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "sonar-pro",
                "messages": [{ "role": "user", "content": "hi" }]
            })
        );
    }

    #[test]
    fn response_tolerates_extra_fields_and_null_content() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":null}}],"citations":[]}"#,
        )
        .unwrap();
        assert!(body.choices[0].message.content.is_none());
    }

    #[tokio::test]
    async fn client_without_key_is_disabled() {
        let client = CompletionsClient::new(AiSettings::default());
        assert!(!client.enabled());
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, EditorialError::Disabled));
    }
}
