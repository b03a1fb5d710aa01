//! ShortSpark Core Library
//!
//! Deterministic generation engine that turns a creative brief into a
//! short-video production bundle: idea and hook, timed voiceover script,
//! shot-by-shot visual plan, and a publishing packet.

pub mod brief;
pub mod bundle;
pub mod catalog;
pub mod distribution;
pub mod error;
pub mod format;
pub mod idea;
pub mod schedule;
pub mod script;
pub mod template;
pub mod text;
pub mod types;
pub mod visual;

// Re-export commonly used items at crate root
pub use brief::{
    Brief, DEFAULT_DURATION, MAX_DURATION, MIN_DURATION, RawBrief, clamp_duration, parse_duration,
};
pub use bundle::{Agent, AgentBundle, AgentOutput, generate_bundle};
pub use distribution::build_distribution_plan;
pub use error::{Result, ShortSparkError};
pub use format::{
    format_agent_output, format_bundle_readable, format_distribution_plan, format_idea,
    format_script, format_timestamp, format_visual_plan,
};
pub use idea::build_idea;
pub use schedule::{schedule, schedule_secs};
pub use script::build_script;
pub use types::{
    Beat, DistributionPlan, IdeaOutput, ScriptBeat, ScriptOutput, VisualBeat, VisualPlan,
};
pub use visual::build_visual_plan;
