use crate::{
    brief::Brief,
    bundle::{Agent, AgentBundle, AgentOutput},
    types::{DistributionPlan, IdeaOutput, ScriptOutput, VisualPlan},
};

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn section_header(output: &mut String, agent: Agent) {
    output.push_str(&format!("## {}\n\n", agent.title()));
    output.push_str(&format!("_{}_\n\n", agent.subtitle()));
}

pub fn format_idea(idea: &IdeaOutput) -> String {
    let mut output = String::new();
    section_header(&mut output, Agent::Idea);

    output.push_str("### Hook\n\n");
    output.push_str(&idea.hook);
    output.push_str("\n\n");

    output.push_str("### Concept\n\n");
    output.push_str(&idea.concept);
    output.push_str("\n\n");

    output.push_str("### Beat Breakdown\n\n");
    for point in &idea.supporting_points {
        output.push_str(&format!("• {}\n", point));
    }
    output.push('\n');

    output.push_str("### Title Sparks\n\n");
    for (i, title) in idea.title_ideas.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, title));
    }
    output.push('\n');

    output
}

pub fn format_script(script: &ScriptOutput) -> String {
    let mut output = String::new();
    section_header(&mut output, Agent::Script);

    for beat in &script.beats {
        output.push_str(&format!("### [{}] {}\n\n", beat.timestamp, beat.line));
        output.push_str(&format!("- Delivery: {}\n", beat.delivery));
        output.push_str(&format!("- Action: {}\n\n", beat.action));
    }

    output.push_str("### Voiceover Direction\n\n");
    output.push_str(&script.voiceover);
    output.push_str("\n\n");

    output.push_str("### Pacing\n\n");
    output.push_str(&script.pacing);
    output.push_str("\n\n");

    output
}

pub fn format_visual_plan(plan: &VisualPlan) -> String {
    let mut output = String::new();
    section_header(&mut output, Agent::Visual);

    for beat in &plan.beats {
        output.push_str(&format!("### [{}] {}\n\n", beat.timestamp, beat.shot_type));
        output.push_str(&format!("{}\n\n", beat.description));
        output.push_str(&format!("- Motion: {}\n", beat.motion));
        output.push_str(&format!("- Overlay: {}\n\n", beat.overlay));
    }

    output.push_str("### B-Roll Vault\n\n");
    for idea in &plan.b_roll_ideas {
        output.push_str(&format!("• {}\n", idea));
    }
    output.push('\n');

    output.push_str("### Transitions\n\n");
    for transition in &plan.transitions {
        output.push_str(&format!("• {}\n", transition));
    }
    output.push('\n');

    output
}

pub fn format_distribution_plan(plan: &DistributionPlan) -> String {
    let mut output = String::new();
    section_header(&mut output, Agent::Distribution);

    output.push_str("### Caption\n\n");
    output.push_str(&plan.caption);
    output.push_str("\n\n");

    output.push_str("### Hashtags\n\n");
    output.push_str(&plan.hashtags.join(" "));
    output.push_str("\n\n");

    output.push_str("### Launch Checklist\n\n");
    for (i, step) in plan.posting_checklist.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, step));
    }
    output.push('\n');

    output.push_str("### Thumbnail Concept\n\n");
    output.push_str(&plan.thumbnail_concept);
    output.push_str("\n\n");

    output
}

pub fn format_agent_output(output: &AgentOutput) -> String {
    match output {
        AgentOutput::Idea(idea) => format_idea(idea),
        AgentOutput::Script(script) => format_script(script),
        AgentOutput::Visual(plan) => format_visual_plan(plan),
        AgentOutput::Distribution(plan) => format_distribution_plan(plan),
    }
}

/// Format a whole bundle as human-readable markdown
pub fn format_bundle_readable(brief: &Brief, bundle: &AgentBundle) -> String {
    let mut output = String::new();

    let title = if brief.topic().is_empty() {
        "Shorts Playbook".to_string()
    } else {
        format!("Shorts Playbook: {}", brief.topic())
    };
    output.push_str(&format!("# {}\n\n", title));

    output.push_str(&format!(
        "**Runtime:** {}s | **Tone:** {} | **Audience:** {}\n\n",
        brief.duration(),
        or_dash(brief.tone()),
        or_dash(brief.audience())
    ));

    output.push_str(&format_idea(&bundle.idea));
    output.push_str(&format_script(&bundle.script));
    output.push_str(&format_visual_plan(&bundle.visuals));
    output.push_str(&format_distribution_plan(&bundle.distribution));

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
