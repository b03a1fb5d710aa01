use std::iter;

use tracing::debug;

use crate::{
    brief::Brief,
    catalog::{NarrativeRole, Tone},
    error::Result,
    schedule::{SCRIPT_BEATS, schedule},
    template::fill,
    types::{Beat, ScriptBeat, ScriptOutput},
};

/// Middle roles in the order they survive when there are too few beats.
const MIDDLE_PRIORITY: [NarrativeRole; 3] = [
    NarrativeRole::Value,
    NarrativeRole::Setup,
    NarrativeRole::Proof,
];

/// Runtime bucket (inclusive upper bound) -> pacing guidance.
const PACING: &[(u32, &str)] = &[
    (
        25,
        "At {duration} seconds there is no room to warm up: cut every two seconds or faster, \
trim every breath, and let the hook land inside the first second.",
    ),
    (
        45,
        "A {duration}-second runtime leaves space for one idea per beat: hold each shot three to \
four seconds, cut on the last stressed word, and leave a short pause before the call-to-action.",
    ),
    (
        u32::MAX,
        "With {duration} seconds to fill, vary the rhythm: open with rapid cuts, let the value \
beats breathe a little longer, then tighten again for the close so retention does not dip.",
    ),
];

/// Narrative role for each of `beat_count` beats.
///
/// The first beat is always the hook and the last is always the call to
/// action. With fewer beats the middle roles drop out in reverse
/// [`MIDDLE_PRIORITY`] order; with more, extra value beats are added. A single
/// beat can only carry the call to action.
pub fn narrative_roles(beat_count: usize) -> Vec<NarrativeRole> {
    match beat_count {
        0 => Vec::new(),
        1 => vec![NarrativeRole::CallToAction],
        _ => {
            let middle = beat_count - 2;
            let mut roles: Vec<NarrativeRole> =
                MIDDLE_PRIORITY.iter().take(middle).copied().collect();
            roles.extend(iter::repeat_n(
                NarrativeRole::Value,
                middle.saturating_sub(MIDDLE_PRIORITY.len()),
            ));
            roles.sort();

            iter::once(NarrativeRole::Hook)
                .chain(roles)
                .chain(iter::once(NarrativeRole::CallToAction))
                .collect()
        }
    }
}

pub fn build_script(brief: &Brief) -> Result<ScriptOutput> {
    let beats = schedule(brief.duration(), SCRIPT_BEATS.beat_count(brief.duration()))?;
    let roles = narrative_roles(beats.len());

    let script_beats: Vec<ScriptBeat> = beats
        .iter()
        .zip(&roles)
        .enumerate()
        .map(|(i, (beat, &role))| {
            let variant = roles[..i].iter().filter(|&&r| r == role).count();
            let templates = role.templates();
            ScriptBeat {
                timestamp: beat.timestamp.clone(),
                line: fill(templates.line(variant), brief),
                delivery: fill(templates.delivery, brief),
                action: fill(templates.action, brief),
            }
        })
        .collect();

    let tone = Tone::classify(brief.tone());
    let script = ScriptOutput {
        beats: script_beats,
        voiceover: fill(tone.profile().voiceover, brief),
        pacing: pacing(brief, &beats),
    };
    debug!(?tone, beats = script.beats.len(), ?roles, "script built");
    Ok(script)
}

fn pacing(brief: &Brief, beats: &[Beat]) -> String {
    let template = PACING
        .iter()
        .find(|(max_duration, _)| brief.duration() <= *max_duration)
        .map_or(PACING[PACING.len() - 1].1, |(_, text)| *text);

    let shortest = beats.iter().map(Beat::len_seconds).min().unwrap_or(0);
    let longest = beats.iter().map(Beat::len_seconds).max().unwrap_or(0);
    let per_beat = if shortest == longest {
        format!("{shortest}")
    } else {
        format!("{shortest}-{longest}")
    };

    format!(
        "{} Plan on {} seconds per beat across {} beats.",
        fill(template, brief),
        per_beat,
        beats.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NarrativeRole::*;

    #[test]
    fn test_roles_for_small_counts() {
        assert!(narrative_roles(0).is_empty());
        assert_eq!(narrative_roles(1), vec![CallToAction]);
        assert_eq!(narrative_roles(2), vec![Hook, CallToAction]);
        assert_eq!(narrative_roles(3), vec![Hook, Value, CallToAction]);
        assert_eq!(narrative_roles(4), vec![Hook, Setup, Value, CallToAction]);
    }

    #[test]
    fn test_roles_for_large_counts() {
        assert_eq!(
            narrative_roles(5),
            vec![Hook, Setup, Value, Proof, CallToAction]
        );
        assert_eq!(
            narrative_roles(6),
            vec![Hook, Setup, Value, Value, Proof, CallToAction]
        );
    }

    #[test]
    fn test_shortest_runtime_keeps_hook_and_cta() {
        let brief = Brief::new(
            "meal prep",
            "students",
            "calm",
            "save money on food",
            "Prep Pal",
            15.0,
        );
        let script = build_script(&brief).unwrap();
        assert_eq!(script.beats.len(), 3);

        let first = &script.beats[0];
        let last = &script.beats[2];
        let hook = &first.line;
        assert!(hook.starts_with("Stop scrolling if you're one of the students"));
        assert!(last.line.contains("save money on food"));
        assert_ne!(first.line, last.line);
        assert_ne!(first.timestamp, last.timestamp);
    }

    #[test]
    fn test_final_beat_references_goal() {
        for duration in [15.0, 30.0, 45.0, 60.0] {
            let brief = Brief::new("AI", "devs", "playful", "ship weekly", "Spark", duration);
            let script = build_script(&brief).unwrap();
            let last = script.beats.last().unwrap();
            assert!(last.line.contains("ship weekly"));
            assert!(last.action.contains("ship weekly"));
        }
    }

    #[test]
    fn test_repeated_value_beats_use_different_lines() {
        let script = build_script(&Brief::sample()).unwrap();
        assert_eq!(script.beats.len(), 6);
        assert!(script.beats[2].line.starts_with("Move one"));
        assert!(script.beats[3].line.starts_with("Move two"));
    }

    #[test]
    fn test_timestamps_follow_schedule() {
        let script = build_script(&Brief::sample()).unwrap();
        let stamps: Vec<&str> = script.beats.iter().map(|b| b.timestamp.as_str()).collect();
        assert_eq!(
            stamps,
            vec!["00:00", "00:10", "00:19", "00:28", "00:37", "00:46"]
        );
    }

    #[test]
    fn test_voiceover_and_pacing() {
        let script = build_script(&Brief::sample()).unwrap();
        let (voiceover, pacing) = (&script.voiceover, &script.pacing);
        assert!(voiceover.starts_with("Go high-energy from the first syllable"));
        assert!(pacing.starts_with("With 55 seconds to fill"));
        assert!(pacing.ends_with("Plan on 9-10 seconds per beat across 6 beats."));

        let short = Brief::new("a", "b", "c", "d", "e", 15.0);
        let pacing = build_script(&short).unwrap().pacing;
        assert!(pacing.starts_with("At 15 seconds there is no room to warm up"));
        assert!(pacing.ends_with("Plan on 5 seconds per beat across 3 beats."));
    }
}
