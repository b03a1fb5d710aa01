use serde::Serialize;
use tracing::info;

use crate::{
    brief::Brief,
    distribution::build_distribution_plan,
    error::Result,
    idea::build_idea,
    script::build_script,
    types::{DistributionPlan, IdeaOutput, ScriptOutput, VisualPlan},
    visual::build_visual_plan,
};

/// One of the four generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Idea,
    Script,
    Visual,
    Distribution,
}

/// Output of a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AgentOutput {
    Idea(IdeaOutput),
    Script(ScriptOutput),
    Visual(VisualPlan),
    Distribution(DistributionPlan),
}

impl Agent {
    pub const ALL: [Agent; 4] = [
        Agent::Idea,
        Agent::Script,
        Agent::Visual,
        Agent::Distribution,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Agent::Idea => "Ideation Agent",
            Agent::Script => "Script Agent",
            Agent::Visual => "Motion Director",
            Agent::Distribution => "Distribution Agent",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Agent::Idea => "Rapid ideation tailored to your audience and niche.",
            Agent::Script => "Crisp voiceover cues with delivery notes optimised for retention.",
            Agent::Visual => "Shot-by-shot visual blueprint with overlays and motion cues.",
            Agent::Distribution => {
                "Publishing playbook tuned for Shorts momentum and cross-posting."
            }
        }
    }

    /// Pipeline checkpoint reached once this agent's output exists.
    pub fn checkpoint(self) -> &'static str {
        match self {
            Agent::Idea => "Ideation mapped",
            Agent::Script => "Script locked",
            Agent::Visual => "Visuals staged",
            Agent::Distribution => "Distribution primed",
        }
    }

    pub fn run(self, brief: &Brief) -> Result<AgentOutput> {
        Ok(match self {
            Agent::Idea => AgentOutput::Idea(build_idea(brief)),
            Agent::Script => AgentOutput::Script(build_script(brief)?),
            Agent::Visual => AgentOutput::Visual(build_visual_plan(brief)?),
            Agent::Distribution => AgentOutput::Distribution(build_distribution_plan(brief)),
        })
    }
}

impl AgentOutput {
    pub fn agent(&self) -> Agent {
        match self {
            AgentOutput::Idea(_) => Agent::Idea,
            AgentOutput::Script(_) => Agent::Script,
            AgentOutput::Visual(_) => Agent::Visual,
            AgentOutput::Distribution(_) => Agent::Distribution,
        }
    }
}

/// Everything one generation pass produces for a brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentBundle {
    pub idea: IdeaOutput,
    pub script: ScriptOutput,
    pub visuals: VisualPlan,
    pub distribution: DistributionPlan,
}

/// Run all four generators against the same brief. The generators do not
/// depend on each other's output.
pub fn generate_bundle(brief: &Brief) -> Result<AgentBundle> {
    let bundle = AgentBundle {
        idea: build_idea(brief),
        script: build_script(brief)?,
        visuals: build_visual_plan(brief)?,
        distribution: build_distribution_plan(brief),
    };
    info!(
        duration = brief.duration(),
        script_beats = bundle.script.beats.len(),
        visual_beats = bundle.visuals.beats.len(),
        "bundle generated"
    );
    Ok(bundle)
}
