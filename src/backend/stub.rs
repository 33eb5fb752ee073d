use async_trait::async_trait;
use parking_lot::Mutex;

use super::{BackendError, CompletionBackend};

const PREVIEW_CHARS: usize = 120;

/// One recorded backend invocation
#[derive(Debug, Clone, PartialEq)]
pub struct StubCall {
    pub prompt: String,
    pub temperature: f32,
}

enum Outcome {
    Reply(String),
    Fail(String),
}

struct Rule {
    needle: String,
    outcome: Outcome,
}

/// Scripted completion backend for tests and offline runs.
///
/// Rules are checked in registration order; the first rule whose needle is a
/// substring of the prompt decides the outcome. A prompt matching no rule
/// fails with [`BackendError::UnexpectedPrompt`]. Every invocation is
/// recorded, including failing ones.
pub struct StubBackend {
    rules: Vec<Rule>,
    calls: Mutex<Vec<StubCall>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply with `text` when the prompt contains `needle`
    pub fn reply_when(mut self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            outcome: Outcome::Reply(text.into()),
        });
        self
    }

    /// Fail with an API-style error when the prompt contains `needle`
    pub fn fail_when(mut self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            outcome: Outcome::Fail(message.into()),
        });
        self
    }

    /// All recorded calls, in invocation order
    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().clone()
    }

    /// Number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Recorded prompts, in invocation order
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.prompt.clone()).collect()
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, BackendError> {
        self.calls.lock().push(StubCall {
            prompt: prompt.to_string(),
            temperature,
        });

        for rule in &self.rules {
            if prompt.contains(&rule.needle) {
                return match &rule.outcome {
                    Outcome::Reply(text) => Ok(text.clone()),
                    Outcome::Fail(message) => Err(BackendError::Api {
                        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                        message: message.clone(),
                    }),
                };
            }
        }

        Err(BackendError::UnexpectedPrompt(preview(prompt)))
    }
}

/// Shorten a prompt for error messages
fn preview(prompt: &str) -> String {
    if prompt.chars().count() <= PREVIEW_CHARS {
        return prompt.to_string();
    }
    let mut shortened: String = prompt.chars().take(PREVIEW_CHARS).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_matching_rule_wins() {
        let stub = StubBackend::new()
            .reply_when("planner", "first")
            .reply_when("plan", "second");

        let reply = stub.complete("the planner prompt", 0.1).await.unwrap();
        assert_eq!(reply, "first");
    }

    #[tokio::test]
    async fn test_unmatched_prompt_fails() {
        let stub = StubBackend::new().reply_when("known", "ok");

        let err = stub.complete("something else", 0.0).await.unwrap_err();
        assert!(matches!(err, BackendError::UnexpectedPrompt(_)));
        // The failing call is still recorded.
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let stub = StubBackend::new().fail_when("flaky", "quota exhausted");

        let err = stub.complete("a flaky prompt", 0.4).await.unwrap_err();
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "quota exhausted");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_records_prompt_and_temperature() {
        let stub = StubBackend::new().reply_when("hello", "world");

        stub.complete("hello there", 0.7).await.unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "hello there");
        assert_eq!(calls[0].temperature, 0.7);
        assert_eq!(stub.prompts(), vec!["hello there".to_string()]);
    }

    #[test]
    fn test_preview_truncates_long_prompts() {
        let long = "x".repeat(500);
        let shortened = preview(&long);
        assert!(shortened.len() < long.len());
        assert!(shortened.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
