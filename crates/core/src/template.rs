//! Slot-filling for catalog templates.
//!
//! Templates are plain strings with `{slot}` markers. Filling is a single
//! left-to-right pass, so brief text that happens to contain braces is copied
//! through verbatim and never expanded a second time.

use std::borrow::Cow;

use crate::brief::Brief;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Topic,
    Audience,
    Tone,
    Goal,
    Brand,
    Duration,
}

impl Slot {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "topic" => Some(Slot::Topic),
            "audience" => Some(Slot::Audience),
            "tone" => Some(Slot::Tone),
            "goal" => Some(Slot::Goal),
            "brand" => Some(Slot::Brand),
            "duration" => Some(Slot::Duration),
            _ => None,
        }
    }

    /// Brief value for this slot. Empty text fields resolve to a neutral
    /// stand-in.
    pub fn resolve(self, brief: &Brief) -> Cow<'_, str> {
        let (value, fallback) = match self {
            Slot::Topic => (brief.topic(), "this idea"),
            Slot::Audience => (brief.audience(), "your viewers"),
            Slot::Tone => (brief.tone(), "confident"),
            Slot::Goal => (brief.goal(), "level up"),
            Slot::Brand => (brief.brand_keywords(), "your brand"),
            Slot::Duration => return Cow::Owned(brief.duration().to_string()),
        };
        if value.is_empty() {
            Cow::Borrowed(fallback)
        } else {
            Cow::Borrowed(value)
        }
    }
}

pub fn fill(template: &str, brief: &Brief) -> String {
    let mut out = String::with_capacity(template.len() + 48);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}');
        let slot = close.and_then(|close| Slot::parse(&after[..close]));

        match close.zip(slot) {
            Some((close, slot)) => {
                out.push_str(&slot.resolve(brief));
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
