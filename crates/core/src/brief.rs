//! Brief intake and normalization.
//!
//! A [`RawBrief`] is whatever the caller collected (form fields, a JSON file,
//! command-line flags). [`Brief::normalize`] is the only way to turn it into a
//! [`Brief`], so every brief the generators see has trimmed text fields and a
//! duration inside `[MIN_DURATION, MAX_DURATION]`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub const MIN_DURATION: u32 = 15;
pub const MAX_DURATION: u32 = 60;
pub const DEFAULT_DURATION: u32 = 55;

/// Unvalidated brief fields. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBrief {
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
    pub brand_keywords: Option<String>,
    pub duration: Option<f64>,
}

impl RawBrief {
    /// Parse a brief document. Unknown keys are ignored, missing keys stay `None`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layer `overrides` on top of `self`; any field set in `overrides` wins.
    pub fn merge(self, overrides: RawBrief) -> RawBrief {
        RawBrief {
            topic: overrides.topic.or(self.topic),
            audience: overrides.audience.or(self.audience),
            tone: overrides.tone.or(self.tone),
            goal: overrides.goal.or(self.goal),
            brand_keywords: overrides.brand_keywords.or(self.brand_keywords),
            duration: overrides.duration.or(self.duration),
        }
    }

    /// The brief the studio opens with.
    pub fn sample() -> Self {
        RawBrief {
            topic: Some("AI tools for creators".to_string()),
            audience: Some("busy YouTube creators".to_string()),
            tone: Some("high-energy".to_string()),
            goal: Some("grow your channel fast".to_string()),
            brand_keywords: Some("ShortSpark Studio".to_string()),
            duration: Some(f64::from(DEFAULT_DURATION)),
        }
    }
}

/// Normalized creative input shared by all four generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBrief")]
pub struct Brief {
    topic: String,
    audience: String,
    tone: String,
    goal: String,
    brand_keywords: String,
    duration: u32,
}

impl Brief {
    pub fn new(
        topic: impl Into<String>,
        audience: impl Into<String>,
        tone: impl Into<String>,
        goal: impl Into<String>,
        brand_keywords: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self::normalize(RawBrief {
            topic: Some(topic.into()),
            audience: Some(audience.into()),
            tone: Some(tone.into()),
            goal: Some(goal.into()),
            brand_keywords: Some(brand_keywords.into()),
            duration: Some(duration),
        })
    }

    pub fn normalize(raw: RawBrief) -> Self {
        let brief = Self {
            topic: clean(raw.topic),
            audience: clean(raw.audience),
            tone: clean(raw.tone),
            goal: clean(raw.goal),
            brand_keywords: clean(raw.brand_keywords),
            duration: raw.duration.map_or(DEFAULT_DURATION, clamp_duration),
        };
        debug!(duration = brief.duration, tone = %brief.tone, "brief normalized");
        brief
    }

    pub fn sample() -> Self {
        Self::normalize(RawBrief::sample())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn brand_keywords(&self) -> &str {
        &self.brand_keywords
    }

    /// Target runtime in whole seconds, always within `[MIN_DURATION, MAX_DURATION]`.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl From<RawBrief> for Brief {
    fn from(raw: RawBrief) -> Self {
        Self::normalize(raw)
    }
}

fn clean(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Round to the nearest second and clamp into the supported runtime range.
/// NaN falls back to [`DEFAULT_DURATION`].
pub fn clamp_duration(seconds: f64) -> u32 {
    if seconds.is_nan() {
        return DEFAULT_DURATION;
    }
    let (min, max) = (f64::from(MIN_DURATION), f64::from(MAX_DURATION));
    seconds.round().clamp(min, max) as u32
}

/// Parse a runtime typed into a numeric field. Input that is empty, zero, or
/// not a number keeps `previous`.
pub fn parse_duration(input: &str, previous: u32) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(value) if value != 0.0 && !value.is_nan() => clamp_duration(value),
        _ => clamp_duration(f64::from(previous)),
    }
}
