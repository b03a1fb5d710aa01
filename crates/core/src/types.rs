use serde::{Deserialize, Serialize};

/// A contiguous slice of the runtime, `[start_seconds, end_seconds)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beat {
    pub timestamp: String,
    pub index: usize,
    pub start_seconds: u32,
    pub end_seconds: u32,
}

impl Beat {
    pub fn len_seconds(&self) -> u32 {
        self.end_seconds - self.start_seconds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaOutput {
    pub hook: String,
    pub concept: String,
    pub supporting_points: Vec<String>,
    pub title_ideas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptBeat {
    pub timestamp: String,
    pub line: String,
    pub delivery: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutput {
    pub beats: Vec<ScriptBeat>,
    pub voiceover: String,
    pub pacing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualBeat {
    pub timestamp: String,
    pub shot_type: String,
    pub description: String,
    pub motion: String,
    pub overlay: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualPlan {
    pub beats: Vec<VisualBeat>,
    pub b_roll_ideas: Vec<String>,
    pub transitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionPlan {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub posting_checklist: Vec<String>,
    pub thumbnail_concept: String,
}
