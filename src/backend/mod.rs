mod openai;
mod stub;

pub use openai::OpenAiBackend;
pub use stub::{StubBackend, StubCall};

use async_trait::async_trait;
use thiserror::Error;

/// A text-completion capability: prompt in, completion out.
///
/// Anything implementing this trait can back an
/// [`AgentRuntime`](crate::agent::AgentRuntime); the pipeline never looks
/// past this signature.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Complete `prompt` at the given sampling temperature.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, BackendError>;
}

/// Failures raised by a completion backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status
    #[error("completion API returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    /// The response parsed but carried no output text
    #[error("completion response contained no output text")]
    MissingOutput,
    /// No API key available at construction time
    #[error("{var} must be set in the environment")]
    MissingCredential { var: &'static str },
    /// Raised by scripted test doubles when no rule matches the prompt
    #[error("no scripted response for prompt: {0:?}")]
    UnexpectedPrompt(String),
}
