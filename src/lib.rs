//! Two-stage planning and promotions agent pipeline.
//!
//! A planner agent turns a business objective into a short execution plan,
//! then a promoter agent writes promotional copy referencing that plan. Both
//! agents talk to a pluggable completion backend through a shared runtime,
//! and the orchestrator records each stage's output in a context store.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tandem::{Orchestrator, PipelineRequest, StubBackend};
//!
//! # async fn demo() -> Result<(), tandem::Error> {
//! let backend = Arc::new(
//!     StubBackend::new()
//!         .reply_when("project planner", "# Plan\n1. Write posts")
//!         .reply_when("marketing specialist", "# Promo\nJoin us."),
//! );
//! let mut orchestrator = Orchestrator::bootstrap(backend, 0.2);
//! let result = orchestrator
//!     .run(PipelineRequest::new("Grow newsletter subscribers"))
//!     .await?;
//! println!("{}", result.plan);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;

pub use agent::{
    Agent, AgentRuntime, ContextStore, Orchestrator, PipelineRequest, PipelineResult, PlanInput,
    PlannerAgent, PromoInput, PromoterAgent, LATEST_PLAN_KEY, LATEST_PROMOTION_KEY,
};
pub use backend::{BackendError, CompletionBackend, OpenAiBackend, StubBackend, StubCall};
pub use config::Config;
pub use error::Error;
