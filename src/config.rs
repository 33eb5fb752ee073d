use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::{
    PlannerAgent, PromoterAgent, DEFAULT_PLANNER_NAME, DEFAULT_PLANNER_TEMPERATURE,
    DEFAULT_PROMOTER_NAME, DEFAULT_PROMOTER_TEMPERATURE,
};

pub const CONFIG_FILE: &str = "config.json";

/// Temperature used when neither the CLI nor an agent sets one
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

const MIN_TEMPERATURE: f32 = 0.0;
const MAX_TEMPERATURE: f32 = 2.0;

/// Per-agent overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    pub name: String,
    pub temperature: f32,
}

/// Runtime configuration, read from `config.json` in the tandem directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model identifier sent to the completion API
    pub model: String,
    /// Base URL of the completion API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Temperature for completions outside an agent run
    pub default_temperature: f32,
    pub planner: AgentSettings,
    pub promoter: AgentSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 30,
            default_temperature: DEFAULT_TEMPERATURE,
            planner: AgentSettings {
                name: DEFAULT_PLANNER_NAME.to_string(),
                temperature: DEFAULT_PLANNER_TEMPERATURE,
            },
            promoter: AgentSettings {
                name: DEFAULT_PROMOTER_NAME.to_string(),
                temperature: DEFAULT_PROMOTER_TEMPERATURE,
            },
        }
    }
}

impl Config {
    /// Load from config file, falling back to defaults when it is absent
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read config.json")?;
            let config: Self =
                serde_json::from_str(&content).context("Failed to parse config.json")?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Directory searched for the config file
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("tandem"))
            .unwrap_or_else(|| PathBuf::from(".tandem"))
    }

    /// Planner built from the configured profile
    pub fn planner_agent(&self) -> PlannerAgent {
        PlannerAgent::with_profile(
            self.planner.name.clone(),
            clamp_temperature(self.planner.temperature),
        )
    }

    /// Promoter built from the configured profile
    pub fn promoter_agent(&self) -> PromoterAgent {
        PromoterAgent::with_profile(
            self.promoter.name.clone(),
            clamp_temperature(self.promoter.temperature),
        )
    }
}

/// Clamp a sampling temperature into the range the completion API accepts
pub fn clamp_temperature(value: f32) -> f32 {
    if !value.is_finite() {
        warn!(requested = value, "temperature is not finite, using default");
        return DEFAULT_TEMPERATURE;
    }
    let clamped = value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    if clamped != value {
        warn!(
            requested = value,
            used = clamped,
            "temperature outside supported range"
        );
    }
    clamped
}
