use tracing::debug;

use crate::{brief::Brief, catalog::Tone, template::fill, text::UniqueList, types::IdeaOutput};

pub const MIN_SUPPORTING_POINTS: usize = 3;
pub const MAX_SUPPORTING_POINTS: usize = 5;
pub const MAX_TITLE_IDEAS: usize = 4;

const CONCEPT: &str = "A {duration}-second short that walks {audience} through {topic} in a \
{tone} style, with every beat pushing toward one outcome: {goal}. Signature touches from {brand} \
anchor the final frame so the payoff is tied to the brand.";

/// Rhetorical angles, in the order they are pitched. Each has its own fixed
/// wording, so all of them survive deduplication for any brief.
const ANGLES: &[&str] = &[
    // problem
    "Call out the pain: {audience} lose hours without a clear {topic} system.",
    // quick win
    "Deliver a quick win viewers can try with {topic} in under a minute.",
    // social proof
    "Show proof: a real result from {brand} that ties back to the promise to {goal}.",
    // curiosity
    "Tease the surprising {topic} detail most {audience} overlook.",
    // payoff
    "Close the loop by showing exactly how this helps them {goal}.",
];

const TITLES: &[&str] = &[
    "{topic}: The {brand} Playbook",
    "How to {goal} with {topic}",
    "{topic} in {duration} Seconds",
    "Stop Ignoring {topic}",
    "{brand} Shorts: {goal}",
];

pub fn build_idea(brief: &Brief) -> IdeaOutput {
    let tone = Tone::classify(brief.tone());
    let hook = fill(tone.profile().hook, brief);
    let concept = fill(CONCEPT, brief);

    let mut points = UniqueList::with_cap(MAX_SUPPORTING_POINTS);
    points.extend(ANGLES.iter().map(|angle| fill(angle, brief)));

    let mut titles = UniqueList::with_cap(MAX_TITLE_IDEAS);
    titles.extend(TITLES.iter().map(|title| fill(title, brief)));

    let idea = IdeaOutput {
        hook,
        concept,
        supporting_points: points.into_vec(),
        title_ideas: titles.into_vec(),
    };
    debug!(
        ?tone,
        points = idea.supporting_points.len(),
        titles = idea.title_ideas.len(),
        "idea built"
    );
    idea
}
