//! Chat-completion client for recipe remixes

use super::prompt::RemixPrompt;
use crate::error::{Error, RemixError, Result};
use crate::recipe::Recipe;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_MAX_TOKENS: u32 = 400;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Produces a themed rewrite of a recipe
#[async_trait]
pub trait Remixer: Send + Sync {
    async fn remix(&self, recipe: &Recipe, theme: &str) -> std::result::Result<String, RemixError>;
}

#[async_trait]
impl<T: Remixer + ?Sized> Remixer for std::sync::Arc<T> {
    async fn remix(&self, recipe: &Recipe, theme: &str) -> std::result::Result<String, RemixError> {
        (**self).remix(recipe, theme).await
    }
}

/// Settings for an OpenAI-compatible chat-completion endpoint
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

/// Remixer backed by a chat-completion API
pub struct ChatRemixer {
    client: Client,
    settings: ChatSettings,
}

impl ChatRemixer {
    pub fn new(settings: ChatSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::HttpClient(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    fn headers(&self, api_key: &str) -> std::result::Result<HeaderMap, RemixError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let value = format!("Bearer {}", api_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value)
                .map_err(|e| RemixError::Unconfigured(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl Remixer for ChatRemixer {
    async fn remix(&self, recipe: &Recipe, theme: &str) -> std::result::Result<String, RemixError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RemixError::Unconfigured("no API key configured".to_string()))?;

        let prompt = RemixPrompt::build(recipe, theme);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(
            "Requesting remix of '{}' with theme '{}' from {}",
            recipe.name, theme, self.settings.endpoint
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .headers(self.headers(api_key)?)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemixError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Remix provider returned {}: {}", status, text);
            return Err(RemixError::Network(format!("HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| RemixError::Network(format!("Failed to read response: {}", e)))?;

        extract_completion(&text)
    }
}

/// Pull the trimmed content of the first choice out of a chat-completion body
pub fn extract_completion(body: &str) -> std::result::Result<String, RemixError> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| RemixError::MalformedResponse(format!("Invalid JSON: {}", e)))?;

    let choices = parsed
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| RemixError::MalformedResponse("Missing choices".to_string()))?;

    choices
        .first()
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| RemixError::MalformedResponse("Missing message content".to_string()))
}
