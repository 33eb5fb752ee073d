use crate::error::Error;

use super::Agent;

pub const DEFAULT_PLANNER_NAME: &str = "PlanSmith";
pub const DEFAULT_PLANNER_TEMPERATURE: f32 = 0.1;

const DESCRIPTION: &str = "Creates milestone driven execution plans.";

/// Inputs for a planning run
#[derive(Debug, Clone)]
pub struct PlanInput {
    pub objective: String,
    pub time_horizon: String,
    pub deliverables: String,
}

impl PlanInput {
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            time_horizon: "two weeks".to_string(),
            deliverables: String::new(),
        }
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

/// Agent that turns a business objective into a short execution plan
#[derive(Debug, Clone)]
pub struct PlannerAgent {
    name: String,
    temperature: f32,
}

impl PlannerAgent {
    pub fn new() -> Self {
        Self::with_profile(DEFAULT_PLANNER_NAME, DEFAULT_PLANNER_TEMPERATURE)
    }

    pub fn with_profile(name: impl Into<String>, temperature: f32) -> Self {
        Self {
            name: name.into(),
            temperature,
        }
    }
}

impl Default for PlannerAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for PlannerAgent {
    type Input = PlanInput;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Render the planning prompt.
    ///
    /// Substitution happens in a single pass, so input text that looks like a
    /// placeholder is inserted literally. The deliverables line is dropped
    /// entirely when no deliverables were given.
    fn build_prompt(&self, input: &Self::Input) -> Result<String, Error> {
        if input.objective.trim().is_empty() {
            return Err(Error::missing_input("planner", "objective"));
        }

        let deliverables_line = if input.deliverables.trim().is_empty() {
            String::new()
        } else {
            format!(
                "Key deliverables to highlight: {}.\n",
                input.deliverables.trim()
            )
        };

        Ok(format!(
            "You are {name}, a meticulous project planner. Your task is to produce a \
             concise execution plan for the objective below. The plan must contain a \
             short headline followed by three to five numbered steps. Each step should \
             include a success metric.\n\
             \n\
             Objective: {objective}\n\
             Planning horizon: {time_horizon}\n\
             {deliverables_line}\
             \n\
             Return the plan as markdown.",
            name = self.name,
            objective = input.objective,
            time_horizon = input.time_horizon,
            deliverables_line = deliverables_line,
        ))
    }
}
