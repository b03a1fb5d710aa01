use tracing::debug;

use crate::{
    brief::Brief,
    catalog::{ShotType, Theme, Tone},
    error::Result,
    schedule::{VISUAL_BEATS, schedule},
    template::fill,
    text::UniqueList,
    types::{VisualBeat, VisualPlan},
};

pub const MAX_B_ROLL_IDEAS: usize = 5;
pub const MAX_TRANSITIONS: usize = 4;

/// Overlay for the closing shot, whatever its type.
const CLOSING_OVERLAY: &str = "End card: {goal} + follow prompt";

pub fn build_visual_plan(brief: &Brief) -> Result<VisualPlan> {
    let beats = schedule(brief.duration(), VISUAL_BEATS.beat_count(brief.duration()))?;
    let last = beats.len().saturating_sub(1);

    let visual_beats: Vec<VisualBeat> = beats
        .iter()
        .map(|beat| {
            let shot = ShotType::for_position(beat.index);
            let templates = shot.templates();
            let overlay = if beat.index == last {
                CLOSING_OVERLAY
            } else {
                templates.overlay
            };
            VisualBeat {
                timestamp: beat.timestamp.clone(),
                shot_type: shot.label().to_string(),
                description: fill(templates.description, brief),
                motion: fill(templates.motion, brief),
                overlay: fill(overlay, brief),
            }
        })
        .collect();

    let plan = VisualPlan {
        beats: visual_beats,
        b_roll_ideas: b_roll_ideas(brief),
        transitions: transitions(Tone::classify(brief.tone())),
    };
    debug!(
        beats = plan.beats.len(),
        b_roll = plan.b_roll_ideas.len(),
        transitions = plan.transitions.len(),
        "visual plan built"
    );
    Ok(plan)
}

/// B-roll for the topic's themes first, in order of mention, then general picks.
fn b_roll_ideas(brief: &Brief) -> Vec<String> {
    let mut ideas = UniqueList::with_cap(MAX_B_ROLL_IDEAS);
    for theme in Theme::detect(brief.topic()) {
        ideas.extend(theme.b_roll().iter().map(|template| fill(template, brief)));
    }
    ideas.into_vec()
}

fn transitions(tone: Tone) -> Vec<String> {
    let mut transitions = UniqueList::with_cap(MAX_TRANSITIONS);
    for style in tone.profile().transition_priority {
        transitions.extend(style.transitions().iter().copied());
    }
    transitions.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_types_rotate() {
        let plan = build_visual_plan(&Brief::sample()).unwrap();
        assert_eq!(plan.beats.len(), 6);
        let shots: Vec<&str> = plan.beats.iter().map(|b| b.shot_type.as_str()).collect();
        assert_eq!(
            shots,
            vec![
                "Close-up",
                "B-roll cut",
                "Overlay text",
                "Wide",
                "Screen capture",
                "Close-up",
            ]
        );
        assert!(shots.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_closing_overlay_carries_goal() {
        let plan = build_visual_plan(&Brief::sample()).unwrap();
        assert_eq!(
            plan.beats.last().unwrap().overlay,
            "End card: grow your channel fast + follow prompt"
        );
        let opener = &plan.beats[0].overlay;
        assert_eq!(opener, "Bold caption: AI tools for creators");
    }

    #[test]
    fn test_short_runtime_still_shows_brand() {
        let brief = Brief::new("latte art", "", "calm", "pour better", "Milk Lab", 15.0);
        let plan = build_visual_plan(&brief).unwrap();
        assert_eq!(plan.beats.len(), 4);
        assert!(plan.beats.iter().any(|b| b.description.contains("Milk")));
    }

    #[test]
    fn test_b_roll_follows_topic_themes() {
        let plan = build_visual_plan(&Brief::sample()).unwrap();
        assert_eq!(plan.b_roll_ideas.len(), MAX_B_ROLL_IDEAS);
        assert_eq!(
            plan.b_roll_ideas[0],
            "Over-the-shoulder shot of AI tools for creators running on a laptop"
        );
        let creator = &plan.b_roll_ideas[3];
        assert_eq!(creator, "Timelapse of an editing timeline filling up");
    }

    #[test]
    fn test_b_roll_for_unknown_topic_is_general() {
        let brief = Brief::new("stoic philosophy", "", "", "", "", 30.0);
        let plan = build_visual_plan(&brief).unwrap();
        let first = &plan.b_roll_ideas[0];
        assert_eq!(first, "Reaction shot of someone nodding along");
        assert_eq!(plan.b_roll_ideas.len(), 4);
    }

    #[test]
    fn test_transitions_follow_tone() {
        assert_eq!(
            transitions(Tone::HighEnergy),
            vec![
                "Whip pan on the beat drop",
                "Jump cut to tighten pauses",
                "Speed ramp into the reveal",
                "Zoom punch on key words",
            ]
        );
        assert_eq!(transitions(Tone::Cinematic)[0], "Match cut on movement");
        assert_eq!(transitions(Tone::Playful)[0], "Sticker pop-in transition");
        assert_eq!(transitions(Tone::Playful).len(), MAX_TRANSITIONS);
    }
}
