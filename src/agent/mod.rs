mod orchestrator;
mod planner;
mod promoter;
mod runtime;

pub use orchestrator::{
    Orchestrator, PipelineRequest, PipelineResult, LATEST_PLAN_KEY, LATEST_PROMOTION_KEY,
};
pub use planner::{PlanInput, PlannerAgent, DEFAULT_PLANNER_NAME, DEFAULT_PLANNER_TEMPERATURE};
pub use promoter::{PromoInput, PromoterAgent, DEFAULT_PROMOTER_NAME, DEFAULT_PROMOTER_TEMPERATURE};
pub use runtime::{AgentRuntime, ContextStore};

use async_trait::async_trait;

use crate::error::Error;

/// A prompt-building agent bound to a persona and sampling temperature.
///
/// `build_prompt` is pure: no I/O, no side effects, deterministic for a
/// given input. The provided `run` renders the prompt and sends it through
/// the runtime at the agent's own temperature, returning the completion
/// unmodified. Backend failures propagate as-is.
#[async_trait]
pub trait Agent: Send + Sync {
    type Input: Send + Sync;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn temperature(&self) -> f32;

    fn build_prompt(&self, input: &Self::Input) -> Result<String, Error>;

    async fn run(&self, runtime: &AgentRuntime, input: &Self::Input) -> Result<String, Error> {
        let prompt = self.build_prompt(input)?;
        let completion = runtime.complete(&prompt, Some(self.temperature())).await?;
        Ok(completion)
    }
}
