use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::backend::{BackendError, CompletionBackend};

/// Scratchpad shared by the agents in a pipeline run.
///
/// Values are plain strings keyed by name. Re-inserting a key overwrites the
/// previous value, so a read always sees the latest write.
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    values: HashMap<String, String>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Insert a value, returning the previous one if the key was set
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Execution environment handed to agents: the completion backend plus the
/// shared context store.
///
/// The backend is shared and outlives any runtime borrowing it. The context
/// is owned here, so writes require `&mut` access and cannot race.
pub struct AgentRuntime {
    backend: Arc<dyn CompletionBackend>,
    default_temperature: f32,
    context: ContextStore,
}

impl AgentRuntime {
    pub fn new(backend: Arc<dyn CompletionBackend>, default_temperature: f32) -> Self {
        Self::with_context(backend, default_temperature, ContextStore::new())
    }

    pub fn with_context(
        backend: Arc<dyn CompletionBackend>,
        default_temperature: f32,
        context: ContextStore,
    ) -> Self {
        Self {
            backend,
            default_temperature,
            context,
        }
    }

    /// Issue a completion, falling back to the runtime default temperature
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, BackendError> {
        debug_assert!(
            !prompt.trim().is_empty(),
            "agents must not send empty prompts"
        );
        let temperature = temperature.unwrap_or(self.default_temperature);
        debug!(
            temperature,
            prompt_chars = prompt.chars().count(),
            "requesting completion"
        );
        self.backend.complete(prompt, temperature).await
    }

    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ContextStore {
        &mut self.context
    }

    pub fn default_temperature(&self) -> f32 {
        self.default_temperature
    }
}
