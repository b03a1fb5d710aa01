use tracing::debug;

use crate::{
    brief::Brief,
    catalog::Tone,
    template::fill,
    text::{UniqueList, slug_tokens},
    types::DistributionPlan,
};

pub const MAX_HASHTAGS: usize = 8;

/// Shortest slug worth tagging.
const MIN_TAG_LEN: usize = 2;
/// Longer joined topic slugs are unreadable as a single tag.
const MAX_JOINED_TOPIC_TAG_LEN: usize = 24;

const NICHE_TAGS: &[&str] = &["shorts", "youtubeshorts", "contentcreator"];

const TOPIC_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "at", "by", "for", "from", "how", "in", "is", "my", "of", "on", "or",
    "the", "to", "with", "you", "your",
];

const CAPTION: &str = "{topic} for {audience}: the fastest way to {goal}. \
Follow {brand} for more and drop your take in the comments.";

const POSTING_CHECKLIST: &[&str] = &[
    "Export vertical 9:16 at 1080x1920 and keep the cut at {duration} seconds or less.",
    "Open the description with {brand} so the keyword gets indexed.",
    "Paste the caption and hashtags, keeping the first line under 100 characters.",
    "Pin a comment that asks viewers how they plan to {goal}.",
    "Upload the thumbnail frame and check that it reads at phone size.",
    "Cross-post to TikTok and Instagram Reels within 24 hours.",
    "Reply to every comment in the first hour to keep momentum.",
];

const THUMBNAIL: &str = "Expressive close-up with a bold three-word hook about {topic}, \
color-graded for a {tone} feel, with the {brand} mark tucked into the corner.";

pub fn build_distribution_plan(brief: &Brief) -> DistributionPlan {
    let tone = Tone::classify(brief.tone());
    let caption = format!("{} {}", tone.profile().caption_opener, fill(CAPTION, brief));

    let plan = DistributionPlan {
        caption,
        hashtags: hashtags(brief),
        posting_checklist: POSTING_CHECKLIST
            .iter()
            .map(|step| fill(step, brief))
            .collect(),
        thumbnail_concept: fill(THUMBNAIL, brief),
    };
    debug!(?tone, hashtags = plan.hashtags.len(), "distribution plan built");
    plan
}

fn hashtag(slug: &str) -> Option<String> {
    if slug.chars().count() < MIN_TAG_LEN {
        return None;
    }
    Some(format!("#{slug}"))
}

/// Brand tags (the joined phrase, then each word), niche tags, then topic tags.
pub fn hashtags(brief: &Brief) -> Vec<String> {
    let brand = slug_tokens(brief.brand_keywords());
    let topic: Vec<String> = slug_tokens(brief.topic())
        .into_iter()
        .filter(|token| !TOPIC_STOPWORDS.contains(&token.as_str()))
        .collect();
    let joined_topic = slug_tokens(brief.topic()).concat();

    let mut candidates: Vec<String> = Vec::new();
    candidates.push(brand.concat());
    candidates.extend(brand);
    candidates.extend(NICHE_TAGS.iter().map(|tag| tag.to_string()));
    if joined_topic.chars().count() <= MAX_JOINED_TOPIC_TAG_LEN {
        candidates.push(joined_topic);
    }
    candidates.extend(topic);

    let mut tags = UniqueList::with_cap(MAX_HASHTAGS);
    tags.extend(candidates.iter().filter_map(|slug| hashtag(slug)));
    tags.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug_char(c: char) -> bool {
        c.is_alphanumeric() && !c.is_uppercase()
    }

    #[test]
    fn test_sample_hashtags() {
        let tags = hashtags(&Brief::sample());
        assert_eq!(
            tags,
            vec![
                "#shortsparkstudio",
                "#shortspark",
                "#studio",
                "#shorts",
                "#youtubeshorts",
                "#contentcreator",
                "#aitoolsforcreators",
                "#ai",
            ]
        );
    }

    #[test]
    fn test_hashtags_are_normalized_and_unique() {
        let brief = Brief::new("Shorts  Editing!!", "", "", "", "SHORTS, shorts", 30.0);
        let tags = hashtags(&brief);
        assert_eq!(tags[0], "#shortsshorts");
        assert_eq!(tags[1], "#shorts");
        for tag in &tags {
            assert!(tag.starts_with('#'), "{tag:?}");
            assert!(tag[1..].chars().all(is_slug_char), "{tag:?}");
        }
        assert_eq!(tags.iter().filter(|t| *t == "#shorts").count(), 1);
        assert!(tags.contains(&"#editing".to_string()));
    }

    #[test]
    fn test_hashtags_from_non_ascii_text_stay_alphanumeric() {
        let brief = Brief::new("İzmir food", "", "", "", "İstanbul Eats", 30.0);
        let tags = hashtags(&brief);
        assert_eq!(
            tags,
            vec![
                "#istanbuleats",
                "#istanbul",
                "#eats",
                "#shorts",
                "#youtubeshorts",
                "#contentcreator",
                "#izmirfood",
                "#izmir",
            ]
        );
        for tag in &tags {
            assert!(tag[1..].chars().all(is_slug_char), "{tag:?}");
        }
    }

    #[test]
    fn test_hashtags_without_brand_or_topic() {
        let tags = hashtags(&Brief::new("", "", "", "", "", 30.0));
        assert_eq!(tags, vec!["#shorts", "#youtubeshorts", "#contentcreator"]);
    }

    #[test]
    fn test_long_topic_skips_joined_tag() {
        let topic = "the complete beginner guide to sourdough baking";
        let tags = hashtags(&Brief::new(topic, "", "", "", "", 30.0));
        assert!(!tags.iter().any(|t| t.starts_with("#thecomplete")));
        assert!(tags.contains(&"#sourdough".to_string()));
        assert_eq!(tags.len(), MAX_HASHTAGS);
    }

    #[test]
    fn test_caption_and_checklist() {
        let plan = build_distribution_plan(&Brief::sample());
        let opener = "No fluff, just results. AI tools for creators for busy YouTube creators";
        assert!(plan.caption.starts_with(opener));
        assert!(plan.caption.contains("grow your channel fast"));

        let checklist = plan.posting_checklist.join("\n");
        assert!(checklist.contains("ShortSpark Studio"));
        assert!(checklist.contains("grow your channel fast"));
        assert!(plan.posting_checklist[0].contains("55 seconds"));
    }

    #[test]
    fn test_thumbnail_mentions_topic_and_tone() {
        let plan = build_distribution_plan(&Brief::sample());
        assert!(plan.thumbnail_concept.contains("AI tools for creators"));
        assert!(plan.thumbnail_concept.contains("high-energy"));
    }
}
