use crate::error::Error;

use super::Agent;

pub const DEFAULT_PROMOTER_NAME: &str = "PromoSpark";
pub const DEFAULT_PROMOTER_TEMPERATURE: f32 = 0.4;

const DESCRIPTION: &str = "Produces promotional copy referencing a provided plan.";

/// Inputs for a promotion run
#[derive(Debug, Clone)]
pub struct PromoInput {
    pub plan_summary: String,
    pub audience: String,
    pub channel: String,
    pub tone: String,
}

impl PromoInput {
    pub fn new(plan_summary: impl Into<String>) -> Self {
        Self {
            plan_summary: plan_summary.into(),
            audience: "existing customers".to_string(),
            channel: "email".to_string(),
            tone: "enthusiastic".to_string(),
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
}

/// Agent that writes promotional copy from a finished plan
#[derive(Debug, Clone)]
pub struct PromoterAgent {
    name: String,
    temperature: f32,
}

impl PromoterAgent {
    pub fn new() -> Self {
        Self::with_profile(DEFAULT_PROMOTER_NAME, DEFAULT_PROMOTER_TEMPERATURE)
    }

    pub fn with_profile(name: impl Into<String>, temperature: f32) -> Self {
        Self {
            name: name.into(),
            temperature,
        }
    }
}

impl Default for PromoterAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for PromoterAgent {
    type Input = PromoInput;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn build_prompt(&self, input: &Self::Input) -> Result<String, Error> {
        if input.plan_summary.trim().is_empty() {
            return Err(Error::missing_input("promoter", "plan_summary"));
        }

        Ok(format!(
            "You are {name}, a marketing specialist tasked with creating promotional \
             copy. Craft a short {channel} announcement aimed at {audience} with a \
             {tone} tone. The message must reference the plan summary below and \
             include a clear call to action.\n\
             \n\
             Plan summary:\n\
             {plan_summary}\n\
             \n\
             Return the announcement as markdown with a title and a short body paragraph.",
            name = self.name,
            channel = input.channel,
            audience = input.audience,
            tone = input.tone,
            plan_summary = input.plan_summary,
        ))
    }
}
