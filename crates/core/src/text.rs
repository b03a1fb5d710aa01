use std::collections::HashSet;

/// Key used to decide whether two generated strings are the same item.
pub fn dedup_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Ordered list that drops repeats (by [`dedup_key`]) and stops growing at `cap`.
#[derive(Debug, Clone)]
pub struct UniqueList {
    items: Vec<String>,
    seen: HashSet<String>,
    cap: usize,
}

impl UniqueList {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            seen: HashSet::with_capacity(cap),
            cap,
        }
    }

    /// Returns `true` if the item was appended.
    pub fn push(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        let item = item.trim();
        if item.is_empty() || self.is_full() {
            return false;
        }
        if !self.seen.insert(dedup_key(item)) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            if self.is_full() {
                break;
            }
            self.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Lowercase alphanumeric runs of `text`, split on whitespace and punctuation.
///
/// Lowercasing happens per character before filtering, since some capitals
/// lowercase into combining marks (`'İ'` becomes `"i\u{307}"`).
pub fn slug_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(|token| {
            token
                .chars()
                .flat_map(char::to_lowercase)
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// All slug tokens of `text` joined together, e.g. `"ShortSpark Studio"` -> `"shortsparkstudio"`.
pub fn slug(text: &str) -> String {
    slug_tokens(text).concat()
}

/// Lowercase word tokens, used for keyword matching against catalogs.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '-')
        .map(|word| {
            word.chars()
                .flat_map(char::to_lowercase)
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_list_dedups_case_insensitively() {
        let mut list = UniqueList::with_cap(5);
        assert!(list.push("Whip pan"));
        assert!(!list.push("whip PAN "));
        assert!(list.push("Jump cut"));
        assert_eq!(list.into_vec(), vec!["Whip pan", "Jump cut"]);
    }

    #[test]
    fn test_unique_list_respects_cap() {
        let mut list = UniqueList::with_cap(2);
        list.extend(["a", "b", "c"]);
        assert!(list.is_full());
        assert!(!list.push("d"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_unique_list_skips_blank() {
        let mut list = UniqueList::with_cap(3);
        assert!(!list.push("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_slug_tokens() {
        let tokens = slug_tokens("ShortSpark Studio");
        assert_eq!(tokens, vec!["shortspark", "studio"]);
        assert_eq!(
            slug_tokens("  AI-tools, for: creators!"),
            vec!["ai", "tools", "for", "creators"]
        );
        assert!(slug_tokens(" -- ").is_empty());
    }

    #[test]
    fn test_slug_tokens_drop_marks_added_by_lowercasing() {
        assert_eq!(slug_tokens("İstanbul Eats"), vec!["istanbul", "eats"]);
        assert_eq!(slug("İzmir"), "izmir");
        let w: Vec<String> = words("İyi-Günler").collect();
        assert_eq!(w, vec!["iyi-günler"]);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("ShortSpark Studio"), "shortsparkstudio");
        assert_eq!(slug("Café Über"), "caféüber");
    }

    #[test]
    fn test_words_keep_hyphenated() {
        let w: Vec<String> = words("High-Energy, bold").collect();
        assert_eq!(w, vec!["high-energy", "bold"]);
    }
}
