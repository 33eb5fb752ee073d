use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tandem::cli::{render_json, render_text, Cli};
use tandem::config::{clamp_temperature, Config};
use tandem::{AgentRuntime, OpenAiBackend, Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable in --json mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&Config::default_dir())?;
    let temperature = clamp_temperature(cli.temperature.unwrap_or(config.default_temperature));
    debug!(model = %config.model, temperature, "configuration resolved");

    let backend = OpenAiBackend::from_env(&config)?;
    let runtime = AgentRuntime::new(Arc::new(backend), temperature);
    let mut orchestrator =
        Orchestrator::with_agents(runtime, config.planner_agent(), config.promoter_agent());

    let result = orchestrator.run(cli.to_request()).await?;

    if cli.json {
        println!("{}", render_json(&result)?);
    } else {
        println!("{}", render_text(&result));
    }

    Ok(())
}
