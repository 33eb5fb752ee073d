use clap::Parser;

use crate::agent::{PipelineRequest, PipelineResult};

/// Run the planning and promotions agent demo
#[derive(Parser, Debug)]
#[command(name = "tandem", version, about)]
pub struct Cli {
    /// Business objective the planner should tackle
    pub objective: String,

    /// Audience to target with the promotional copy
    #[arg(long, default_value = "existing customers")]
    pub audience: String,

    /// Channel used for the promotional message (email, social, etc.)
    #[arg(long, default_value = "email")]
    pub channel: String,

    /// Tone for the promotional message (enthusiastic, professional, etc.)
    #[arg(long, default_value = "enthusiastic")]
    pub tone: String,

    /// Planning horizon communicated to the planning agent
    #[arg(long, default_value = "two weeks")]
    pub time_horizon: String,

    /// Deliverables the plan must include
    #[arg(long)]
    pub deliverables: Option<String>,

    /// Base temperature forwarded to the runtime (overrides the config file)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Emit the orchestrator output as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Translate the parsed arguments into a pipeline request
    pub fn to_request(&self) -> PipelineRequest {
        PipelineRequest::new(self.objective.clone())
            .with_audience(self.audience.clone())
            .with_channel(self.channel.clone())
            .with_tone(self.tone.clone())
            .with_time_horizon(self.time_horizon.clone())
            .with_deliverables(self.deliverables.clone().unwrap_or_default())
    }
}

/// Render a result as the sectioned text output
pub fn render_text(result: &PipelineResult) -> String {
    format!(
        "=== Plan ===\n{}\n\n=== Promotion ===\n{}",
        result.plan.trim(),
        result.promotion.trim()
    )
}

/// Render a result as pretty-printed JSON
pub fn render_json(result: &PipelineResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
