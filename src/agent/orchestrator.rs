use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::backend::CompletionBackend;
use crate::error::Error;

use super::{Agent, AgentRuntime, PlanInput, PlannerAgent, PromoInput, PromoterAgent};

/// Context key holding the most recent plan
pub const LATEST_PLAN_KEY: &str = "latest_plan";
/// Context key holding the most recent promotion
pub const LATEST_PROMOTION_KEY: &str = "latest_promotion";

/// Parameters for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub objective: String,
    pub audience: String,
    pub channel: String,
    pub tone: String,
    pub time_horizon: String,
    /// Empty means no deliverables clause in the planning prompt
    pub deliverables: String,
}

impl PipelineRequest {
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            audience: "existing customers".to_string(),
            channel: "email".to_string(),
            tone: "enthusiastic".to_string(),
            time_horizon: "two weeks".to_string(),
            deliverables: String::new(),
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_time_horizon(mut self, time_horizon: impl Into<String>) -> Self {
        self.time_horizon = time_horizon.into();
        self
    }

    pub fn with_deliverables(mut self, deliverables: impl Into<String>) -> Self {
        self.deliverables = deliverables.into();
        self
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub plan: String,
    pub promotion: String,
}

/// Two-stage pipeline wiring the planner and promoter together.
///
/// The promoter consumes the planner's full output, so the stages run
/// strictly in order. Context writes go through `&mut self`, which keeps
/// concurrent runs against one store from compiling in the first place.
pub struct Orchestrator {
    runtime: AgentRuntime,
    planner: PlannerAgent,
    promoter: PromoterAgent,
}

impl Orchestrator {
    pub fn new(runtime: AgentRuntime) -> Self {
        Self::with_agents(runtime, PlannerAgent::new(), PromoterAgent::new())
    }

    pub fn with_agents(
        runtime: AgentRuntime,
        planner: PlannerAgent,
        promoter: PromoterAgent,
    ) -> Self {
        Self {
            runtime,
            planner,
            promoter,
        }
    }

    /// Build a runtime around `backend` and wire the default agents to it
    pub fn bootstrap(backend: Arc<dyn CompletionBackend>, default_temperature: f32) -> Self {
        Self::new(AgentRuntime::new(backend, default_temperature))
    }

    /// Run planning, then promotion.
    ///
    /// The plan lands in context under [`LATEST_PLAN_KEY`] before the
    /// promoter starts, and the promotion under [`LATEST_PROMOTION_KEY`]
    /// once it finishes. A planning failure means the promoter is never
    /// invoked; a promotion failure leaves the plan in context but fails
    /// the whole run.
    pub async fn run(&mut self, request: PipelineRequest) -> Result<PipelineResult, Error> {
        let run_id = Uuid::new_v4();
        info!(%run_id, objective = %request.objective, "starting pipeline");

        let PipelineRequest {
            objective,
            audience,
            channel,
            tone,
            time_horizon,
            deliverables,
        } = request;

        let plan_input = PlanInput::new(objective)
            .with_time_horizon(time_horizon)
            .with_deliverables(deliverables);
        let plan = self.planner.run(&self.runtime, &plan_input).await?;
        self.runtime
            .context_mut()
            .insert(LATEST_PLAN_KEY, plan.clone());
        info!(%run_id, agent = self.planner.name(), "plan ready");

        let promo_input = PromoInput::new(plan.clone())
            .with_audience(audience)
            .with_channel(channel)
            .with_tone(tone);
        let promotion = self.promoter.run(&self.runtime, &promo_input).await?;
        self.runtime
            .context_mut()
            .insert(LATEST_PROMOTION_KEY, promotion.clone());
        info!(%run_id, agent = self.promoter.name(), "promotion ready");

        Ok(PipelineResult { plan, promotion })
    }

    pub fn runtime(&self) -> &AgentRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut AgentRuntime {
        &mut self.runtime
    }

    pub fn planner(&self) -> &PlannerAgent {
        &self.planner
    }

    pub fn promoter(&self) -> &PromoterAgent {
        &self.promoter
    }
}
