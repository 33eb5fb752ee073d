use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by agents and the orchestrator
#[derive(Debug, Error)]
pub enum Error {
    /// A required prompt input was absent or empty
    #[error("agent `{agent}` requires a non-empty `{input}` input")]
    MissingInput {
        agent: &'static str,
        input: &'static str,
    },
    /// The completion backend failed; the cause is preserved as-is
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl Error {
    /// Shorthand used by the prompt builders
    pub(crate) fn missing_input(agent: &'static str, input: &'static str) -> Self {
        Self::MissingInput { agent, input }
    }
}
