use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BackendError, CompletionBackend};
use crate::config::Config;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Reference backend calling the OpenAI Responses API
pub struct OpenAiBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiBackend {
    /// Create a backend with an explicit API key
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// Create a backend with the API key taken from `OPENAI_API_KEY`
    pub fn from_env(config: &Config) -> Result<Self, BackendError> {
        let api_key = env_api_key(API_KEY_VAR)?;
        Self::new(api_key, config)
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

/// Read an API key from the environment; empty values count as unset
fn env_api_key(var: &'static str) -> Result<String, BackendError> {
    std::env::var(var)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(BackendError::MissingCredential { var })
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponsesReply {
    /// Concatenate every `output_text` part of the reply
    fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect()
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, BackendError> {
        debug!(
            model = %self.model,
            temperature,
            prompt_len = prompt.len(),
            "dispatching completion request"
        );

        let body = ResponsesRequest {
            model: &self.model,
            input: prompt,
            temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, message });
        }

        let reply: ResponsesReply = response.json().await?;
        let text = reply.output_text();
        if text.is_empty() {
            return Err(BackendError::MissingOutput);
        }
        Ok(text)
    }
}
