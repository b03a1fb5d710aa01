//! Read-only template catalogs.
//!
//! Each closed category (tone, narrative role, shot type, topic theme,
//! transition style) maps exhaustively onto static template data. Free-form
//! input only ever reaches these tables through a classifier with an explicit
//! fallback variant.

use crate::text::{slug, words};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    HighEnergy,
    Cinematic,
    Playful,
    Educational,
    Calm,
    Neutral,
}

/// Alias -> tone. Aliases are compared against slugged input.
const TONE_ALIASES: &[(&str, Tone)] = &[
    ("highenergy", Tone::HighEnergy),
    ("energetic", Tone::HighEnergy),
    ("energy", Tone::HighEnergy),
    ("hype", Tone::HighEnergy),
    ("bold", Tone::HighEnergy),
    ("upbeat", Tone::HighEnergy),
    ("cinematic", Tone::Cinematic),
    ("dramatic", Tone::Cinematic),
    ("epic", Tone::Cinematic),
    ("moody", Tone::Cinematic),
    ("storytelling", Tone::Cinematic),
    ("playful", Tone::Playful),
    ("fun", Tone::Playful),
    ("funny", Tone::Playful),
    ("quirky", Tone::Playful),
    ("humorous", Tone::Playful),
    ("witty", Tone::Playful),
    ("educational", Tone::Educational),
    ("informative", Tone::Educational),
    ("explainer", Tone::Educational),
    ("expert", Tone::Educational),
    ("authoritative", Tone::Educational),
    ("calm", Tone::Calm),
    ("chill", Tone::Calm),
    ("relaxed", Tone::Calm),
    ("soothing", Tone::Calm),
    ("minimal", Tone::Calm),
];

#[derive(Debug)]
pub struct ToneProfile {
    pub hook: &'static str,
    pub voiceover: &'static str,
    pub caption_opener: &'static str,
    pub transition_priority: &'static [TransitionStyle],
}

static HIGH_ENERGY: ToneProfile = ToneProfile {
    hook: "Stop scrolling! If you want to {goal}, {topic} is the unfair advantage {audience} \
keep missing.",
    voiceover: "Go {tone} from the first syllable: bright, fast, and smiling through the lines. \
Hit the key words hard, keep breaths short, and talk to {audience} like you are letting them in \
on a secret.",
    caption_opener: "No fluff, just results.",
    transition_priority: &[
        TransitionStyle::Fast,
        TransitionStyle::Playful,
        TransitionStyle::Smooth,
    ],
};

static CINEMATIC: ToneProfile = ToneProfile {
    hook: "Picture the moment you {goal}. For {audience}, that story starts with {topic}.",
    voiceover: "Keep the read {tone} and low: measured pace, deliberate pauses before each \
reveal, and a warm close-mic sound that lets the visuals carry the drama for {audience}.",
    caption_opener: "Every great channel has a turning point.",
    transition_priority: &[
        TransitionStyle::Smooth,
        TransitionStyle::Fast,
        TransitionStyle::Playful,
    ],
};

static PLAYFUL: ToneProfile = ToneProfile {
    hook: "Plot twist: {topic} is the cheat code {audience} use to {goal}.",
    voiceover: "Lean into a {tone} read: let the smile come through, play with rhythm, and \
leave tiny beats for the jokes to land. Talk to {audience} like a friend who just found \
something great.",
    caption_opener: "Okay, this one is too good not to share.",
    transition_priority: &[
        TransitionStyle::Playful,
        TransitionStyle::Fast,
        TransitionStyle::Smooth,
    ],
};

static EDUCATIONAL: ToneProfile = ToneProfile {
    hook: "Here is the one thing about {topic} that {audience} need to know to {goal}.",
    voiceover: "Deliver a clear, {tone} read: steady pace, crisp consonants, and a slight lift \
on every number and step so {audience} can follow without rewinding.",
    caption_opener: "Save this for later.",
    transition_priority: &[
        TransitionStyle::Smooth,
        TransitionStyle::Fast,
        TransitionStyle::Playful,
    ],
};

static CALM: ToneProfile = ToneProfile {
    hook: "There is a simpler way to {goal}, and for {audience} it begins with {topic}.",
    voiceover: "Keep it {tone} and unhurried: soft onsets, even volume, and generous pauses. \
The aim is for {audience} to feel guided, not sold to.",
    caption_opener: "A calmer way to get results.",
    transition_priority: &[
        TransitionStyle::Smooth,
        TransitionStyle::Playful,
        TransitionStyle::Fast,
    ],
};

static NEUTRAL: ToneProfile = ToneProfile {
    hook: "Want to {goal}? Here is how {audience} are using {topic} right now.",
    voiceover: "Aim for a natural, {tone} delivery: conversational pace, clear articulation, \
and energy that lifts slightly on the final call-to-action for {audience}.",
    caption_opener: "Quick one for you.",
    transition_priority: &[
        TransitionStyle::Fast,
        TransitionStyle::Smooth,
        TransitionStyle::Playful,
    ],
};

impl Tone {
    /// Map free-form tone text onto a known tone. The whole phrase is tried
    /// first, then each word in order; anything unrecognized is `Neutral`.
    pub fn classify(tone: &str) -> Tone {
        let lookup = |key: &str| {
            TONE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == key)
                .map(|(_, tone)| *tone)
        };

        lookup(&slug(tone))
            .or_else(|| words(tone).find_map(|word| lookup(&slug(&word))))
            .unwrap_or(Tone::Neutral)
    }

    pub fn profile(self) -> &'static ToneProfile {
        match self {
            Tone::HighEnergy => &HIGH_ENERGY,
            Tone::Cinematic => &CINEMATIC,
            Tone::Playful => &PLAYFUL,
            Tone::Educational => &EDUCATIONAL,
            Tone::Calm => &CALM,
            Tone::Neutral => &NEUTRAL,
        }
    }
}

/// Narrative position of a script beat. Variants are declared in story order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NarrativeRole {
    Hook,
    Setup,
    Value,
    Proof,
    CallToAction,
}

#[derive(Debug)]
pub struct RoleTemplates {
    /// Alternatives for repeated beats of the same role, used in order.
    pub lines: &'static [&'static str],
    pub delivery: &'static str,
    pub action: &'static str,
}

static HOOK_ROLE: RoleTemplates = RoleTemplates {
    lines: &["Stop scrolling if you're one of the {audience} still sleeping on {topic}."],
    delivery: "Punchy and front-loaded; land the first three words hard",
    action: "Jump-cut into a tight close-up with a {brand} lower-third",
};

static SETUP_ROLE: RoleTemplates = RoleTemplates {
    lines: &["Here's the problem: most {audience} treat {topic} as an afterthought."],
    delivery: "Drop the pace slightly and keep it conversational",
    action: "Cut to a wide shot that establishes the workspace",
};

static VALUE_ROLE: RoleTemplates = RoleTemplates {
    lines: &[
        "Move one: pick a single {topic} workflow and run it every day this week.",
        "Move two: batch the boring parts so {topic} does the heavy lifting.",
        "Move three: track the one number that tells you whether you can {goal}.",
        "Move four: cut everything that doesn't serve {audience} directly.",
    ],
    delivery: "Rhythmic; land each step on the beat",
    action: "Overlay a numbered step card synced to the voiceover",
};

static PROOF_ROLE: RoleTemplates = RoleTemplates {
    lines: &["This is exactly how the {brand} crew approaches {topic}."],
    delivery: "Confident; let the proof breathe for half a beat",
    action: "Flash a before-and-after split screen",
};

static CALL_TO_ACTION_ROLE: RoleTemplates = RoleTemplates {
    lines: &["Ready to {goal}? Follow for the full {topic} playbook."],
    delivery: "Warm and direct to camera, rising inflection on the last word",
    action: "Point at the follow button as \"{goal}\" pops on screen",
};

impl NarrativeRole {
    pub fn label(self) -> &'static str {
        match self {
            NarrativeRole::Hook => "Hook",
            NarrativeRole::Setup => "Setup",
            NarrativeRole::Value => "Value",
            NarrativeRole::Proof => "Proof",
            NarrativeRole::CallToAction => "Call to action",
        }
    }

    pub fn templates(self) -> &'static RoleTemplates {
        match self {
            NarrativeRole::Hook => &HOOK_ROLE,
            NarrativeRole::Setup => &SETUP_ROLE,
            NarrativeRole::Value => &VALUE_ROLE,
            NarrativeRole::Proof => &PROOF_ROLE,
            NarrativeRole::CallToAction => &CALL_TO_ACTION_ROLE,
        }
    }
}

impl RoleTemplates {
    pub fn line(&self, variant: usize) -> &'static str {
        self.lines[variant % self.lines.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotType {
    CloseUp,
    BRollCut,
    OverlayText,
    Wide,
    ScreenCapture,
}

/// Shot order by beat position. Adjacent entries always differ.
pub const SHOT_ROTATION: [ShotType; 5] = [
    ShotType::CloseUp,
    ShotType::BRollCut,
    ShotType::OverlayText,
    ShotType::Wide,
    ShotType::ScreenCapture,
];

#[derive(Debug)]
pub struct ShotTemplates {
    pub description: &'static str,
    pub motion: &'static str,
    pub overlay: &'static str,
}

static CLOSE_UP_SHOT: ShotTemplates = ShotTemplates {
    description: "Tight close-up on the presenter delivering the {topic} beat straight to \
{audience} with {tone} energy.",
    motion: "Punch-in zoom on the first word",
    overlay: "Bold caption: {topic}",
};

static B_ROLL_SHOT: ShotTemplates = ShotTemplates {
    description: "Fast B-roll montage of {topic} in action.",
    motion: "Whip-pan between clips",
    overlay: "Minimal captions synced to the voiceover",
};

static OVERLAY_TEXT_SHOT: ShotTemplates = ShotTemplates {
    description: "Full-frame kinetic type breaking down the key {topic} step.",
    motion: "Text slams in on the beat",
    overlay: "Numbered step card",
};

static WIDE_SHOT: ShotTemplates = ShotTemplates {
    description: "Wide establishing shot of the creator setup with {brand} visible in frame.",
    motion: "Slow dolly-in",
    overlay: "Lower-third: {brand}",
};

static SCREEN_CAPTURE_SHOT: ShotTemplates = ShotTemplates {
    description: "Screen recording that walks through the {topic} workflow step by step.",
    motion: "Smooth cursor-follow zoom",
    overlay: "Highlight box on the key click",
};

impl ShotType {
    pub fn label(self) -> &'static str {
        match self {
            ShotType::CloseUp => "Close-up",
            ShotType::BRollCut => "B-roll cut",
            ShotType::OverlayText => "Overlay text",
            ShotType::Wide => "Wide",
            ShotType::ScreenCapture => "Screen capture",
        }
    }

    pub fn templates(self) -> &'static ShotTemplates {
        match self {
            ShotType::CloseUp => &CLOSE_UP_SHOT,
            ShotType::BRollCut => &B_ROLL_SHOT,
            ShotType::OverlayText => &OVERLAY_TEXT_SHOT,
            ShotType::Wide => &WIDE_SHOT,
            ShotType::ScreenCapture => &SCREEN_CAPTURE_SHOT,
        }
    }

    pub fn for_position(index: usize) -> ShotType {
        SHOT_ROTATION[index % SHOT_ROTATION.len()]
    }
}

/// Subject area of a topic, used to rank B-roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Tech,
    Creator,
    Business,
    Lifestyle,
    General,
}

const THEME_KEYWORDS: &[(&str, Theme)] = &[
    ("ai", Theme::Tech),
    ("tool", Theme::Tech),
    ("tools", Theme::Tech),
    ("app", Theme::Tech),
    ("apps", Theme::Tech),
    ("software", Theme::Tech),
    ("code", Theme::Tech),
    ("coding", Theme::Tech),
    ("tech", Theme::Tech),
    ("gadget", Theme::Tech),
    ("gadgets", Theme::Tech),
    ("automation", Theme::Tech),
    ("productivity", Theme::Tech),
    ("youtube", Theme::Creator),
    ("video", Theme::Creator),
    ("videos", Theme::Creator),
    ("content", Theme::Creator),
    ("channel", Theme::Creator),
    ("creator", Theme::Creator),
    ("creators", Theme::Creator),
    ("shorts", Theme::Creator),
    ("editing", Theme::Creator),
    ("podcast", Theme::Creator),
    ("tiktok", Theme::Creator),
    ("business", Theme::Business),
    ("marketing", Theme::Business),
    ("sales", Theme::Business),
    ("money", Theme::Business),
    ("startup", Theme::Business),
    ("growth", Theme::Business),
    ("finance", Theme::Business),
    ("ecommerce", Theme::Business),
    ("fitness", Theme::Lifestyle),
    ("food", Theme::Lifestyle),
    ("travel", Theme::Lifestyle),
    ("health", Theme::Lifestyle),
    ("home", Theme::Lifestyle),
    ("recipe", Theme::Lifestyle),
    ("workout", Theme::Lifestyle),
    ("fashion", Theme::Lifestyle),
    ("beauty", Theme::Lifestyle),
    ("cooking", Theme::Lifestyle),
    ("coffee", Theme::Lifestyle),
];

impl Theme {
    /// Themes mentioned by `topic`, in order of first mention, always ending
    /// with `General`.
    pub fn detect(topic: &str) -> Vec<Theme> {
        let mut themes = Vec::new();
        for word in words(topic) {
            let found = THEME_KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word)
                .map(|(_, theme)| *theme);
            match found {
                Some(theme) if !themes.contains(&theme) => themes.push(theme),
                _ => {}
            }
        }
        themes.push(Theme::General);
        themes
    }

    /// B-roll templates for this theme, best first.
    pub fn b_roll(self) -> &'static [&'static str] {
        match self {
            Theme::Tech => &[
                "Over-the-shoulder shot of {topic} running on a laptop",
                "Macro shot of fingers flying across a keyboard",
                "Phone screen recording scrolling through the app",
            ],
            Theme::Creator => &[
                "Timelapse of an editing timeline filling up",
                "Ring light clicking on in a dark studio",
                "Analytics dashboard ticking upward",
            ],
            Theme::Business => &[
                "Whiteboard sketch of the growth plan",
                "Notification stack of new sales rolling in",
                "Handshake close-up across a desk",
            ],
            Theme::Lifestyle => &[
                "Morning routine cutaways in natural light",
                "Hands-on demo of {topic} in a real-world setting",
                "Slow-motion detail shot of the finished result",
            ],
            Theme::General => &[
                "Reaction shot of someone nodding along",
                "Close-up of a checklist being ticked off",
                "Slow push across a tidy desk setup",
                "Street-level cutaway for a breather beat",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionStyle {
    Fast,
    Smooth,
    Playful,
}

impl TransitionStyle {
    pub fn transitions(self) -> &'static [&'static str] {
        match self {
            TransitionStyle::Fast => &[
                "Whip pan on the beat drop",
                "Jump cut to tighten pauses",
                "Speed ramp into the reveal",
                "Zoom punch on key words",
                "Glitch cut between sections",
            ],
            TransitionStyle::Smooth => &[
                "Match cut on movement",
                "Slow cross-dissolve between ideas",
                "Light-leak wipe into the call-to-action",
                "Push-in transition on the presenter",
            ],
            TransitionStyle::Playful => &[
                "Sticker pop-in transition",
                "Swipe-up reveal",
                "Spin transition on the punchline",
            ],
        }
    }
}
