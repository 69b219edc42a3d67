/// A short health tip with search tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    text: &'static str,
    tags: &'static [&'static str],
}

impl Tip {
    #[must_use]
    pub const fn new(text: &'static str, tags: &'static [&'static str]) -> Self {
        Self { text, tags }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

const BUILTIN_TIPS: [Tip; 8] = [
    Tip::new(
        "Drink at least 8 glasses of water a day to stay well hydrated.",
        &["water", "hydration", "general"],
    ),
    Tip::new(
        "Stretch lightly every 30 minutes when working at a computer.",
        &["exercise", "sitting", "stress", "ergonomics"],
    ),
    Tip::new(
        "Sleep 7-9 hours every night for mental and physical recovery.",
        &["sleep", "stress", "general"],
    ),
    Tip::new(
        "Eat colourful fruit and vegetables every day, especially ones rich in antioxidants.",
        &["food", "diet", "nutrition"],
    ),
    Tip::new(
        "A 30 minute daily walk improves heart health and mood.",
        &["exercise", "heart", "mood"],
    ),
    Tip::new(
        "Swap sugary drinks for plain water or unsweetened herbal tea.",
        &["diet", "water", "drinks"],
    ),
    Tip::new(
        "Practise deep breathing when stressed to calm your nervous system.",
        &["stress", "mental", "relaxation"],
    ),
    Tip::new(
        "Wear sunscreen every day, even when it is cloudy.",
        &["skin", "beauty"],
    ),
];

/// Static, searchable list of tips.
#[derive(Debug, Clone)]
pub struct TipCatalog {
    tips: Vec<Tip>,
}

impl TipCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tips: BUILTIN_TIPS.to_vec(),
        }
    }

    #[must_use]
    pub fn new(tips: Vec<Tip>) -> Self {
        Self { tips }
    }

    #[must_use]
    pub fn all(&self) -> &[Tip] {
        &self.tips
    }

    /// Case-insensitive substring search over tip text and tags.
    ///
    /// A blank query returns every tip.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Tip> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tips.clone();
        }
        self.tips
            .iter()
            .filter(|tip| tip.matches(&needle))
            .copied()
            .collect()
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_all() {
        let catalog = TipCatalog::builtin();
        assert_eq!(catalog.search("").len(), 8);
        assert_eq!(catalog.search("   ").len(), 8);
    }

    #[test]
    fn search_is_case_insensitive_over_text() {
        let hits = TipCatalog::builtin().search("SUNSCREEN");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text().starts_with("Wear sunscreen"));
    }

    #[test]
    fn search_matches_tags() {
        let hits = TipCatalog::builtin().search("stress");
        assert_eq!(hits.len(), 3);
        let hits = TipCatalog::builtin().search("ergo");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(TipCatalog::builtin().search("zebra").is_empty());
    }
}
