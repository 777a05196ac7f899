//! OpenAI-compatible chat-completions client for the narrative model.
//!
//! Works against any server exposing `/v1/chat/completions` (vLLM,
//! llama.cpp, hosted gateways). Credentials and model selection stay in
//! the caller-supplied configuration; the engine never reads them.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::narrative::{ModelConnector, ModelError, NarrativeModel};

/// Configuration for the chat-completions endpoint.
#[derive(Clone, Debug)]
pub struct HttpModelConfig {
    /// Base URL of the server, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Model name; `None` lets the server pick its default.
    pub model: Option<String>,
    /// Bearer token, if the endpoint wants one.
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Transport-level timeout; the engine's own 8 s race sits on top.
    pub timeout: Duration,
}

impl Default for HttpModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            model: None,
            api_key: None,
            max_tokens: 1024,
            temperature: 0.8,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize, Debug)]
struct ChatCompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize, Debug)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Narrative model backed by an OpenAI-compatible HTTP endpoint.
pub struct HttpNarrativeModel {
    config: HttpModelConfig,
    client: reqwest::Client,
}

impl HttpNarrativeModel {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: HttpModelConfig) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl NarrativeModel for HttpNarrativeModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let mut builder = self.client.post(&url).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("status {status}: {body}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Api(e.to_string()))?;

        completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or(ModelError::Empty)
    }
}

/// Connector that builds the HTTP model on first use.
pub struct HttpModelConnector {
    config: HttpModelConfig,
}

impl HttpModelConnector {
    #[must_use]
    pub const fn new(config: HttpModelConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ModelConnector for HttpModelConnector {
    async fn connect(&self) -> Result<Arc<dyn NarrativeModel>, ModelError> {
        Ok(Arc::new(HttpNarrativeModel::new(self.config.clone())?))
    }
}
