//! Search term matching and match highlighting.
//!
//! Substring matching is the default: a record matches when its lower-cased name
//! contains the normalized term, or its glyph contains it (so pasting an emoji
//! finds it). Fuzzy mode swaps the name test for a Skim fuzzy match; glyph
//! matching stays a plain substring test in both modes.

use crate::domain::EmojiRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// How the search term is matched against emoji names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Lower-cased name must contain the term.
    #[default]
    Substring,

    /// Term characters must appear in order in the lower-cased name.
    Fuzzy,
}

/// Trims and lower-cases a raw search term.
#[must_use]
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Matches records against one normalized term.
pub struct Matcher<'a> {
    term: &'a str,
    fuzzy: Option<SkimMatcherV2>,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher for an already normalized term.
    #[must_use]
    pub fn new(term: &'a str, mode: SearchMode) -> Self {
        let fuzzy = match mode {
            SearchMode::Substring => None,
            SearchMode::Fuzzy => Some(SkimMatcherV2::default()),
        };
        Self { term, fuzzy }
    }

    /// Returns `true` if `record` matches the term.
    #[must_use]
    pub fn matches(&self, record: &EmojiRecord) -> bool {
        if record.glyph.contains(self.term) {
            return true;
        }

        let name = record.name.to_lowercase();
        self.fuzzy.as_ref().map_or_else(
            || name.contains(self.term),
            |m| m.fuzzy_match(&name, self.term).is_some(),
        )
    }

    /// Character ranges `(start, end)` of `name` covered by the match.
    ///
    /// Empty when the term is empty or the name does not match (e.g. the record
    /// matched on its glyph).
    #[must_use]
    pub fn highlight_ranges(&self, name: &str) -> Vec<(usize, usize)> {
        if self.term.is_empty() {
            return vec![];
        }

        let lowered = name.to_lowercase();

        if let Some(m) = &self.fuzzy {
            return m
                .fuzzy_indices(&lowered, self.term)
                .map_or_else(Vec::new, |(_score, indices)| coalesce(&indices));
        }

        lowered.find(self.term).map_or_else(Vec::new, |byte_start| {
            let start = lowered[..byte_start].chars().count();
            vec![(start, start + self.term.chars().count())]
        })
    }
}

/// Collapses sorted character indices into contiguous `(start, end)` ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(normalize_term("  Dog \t"), "dog");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn substring_matches_name_or_glyph() {
        let dog = EmojiRecord::new("🐶", "Dog Face", "Animals");

        assert!(Matcher::new("dog", SearchMode::Substring).matches(&dog));
        assert!(Matcher::new("🐶", SearchMode::Substring).matches(&dog));
        assert!(!Matcher::new("dgf", SearchMode::Substring).matches(&dog));
    }

    #[test]
    fn fuzzy_matches_scattered_characters() {
        let dog = EmojiRecord::new("🐶", "dog face", "Animals");
        assert!(Matcher::new("dgf", SearchMode::Fuzzy).matches(&dog));
        assert!(!Matcher::new("cat", SearchMode::Fuzzy).matches(&dog));
    }

    #[test]
    fn substring_highlight_covers_the_match() {
        let matcher = Matcher::new("face", SearchMode::Substring);
        assert_eq!(matcher.highlight_ranges("Dog Face"), vec![(4, 8)]);
        assert!(matcher.highlight_ranges("pizza").is_empty());
    }

    #[test]
    fn fuzzy_highlight_is_coalesced() {
        let matcher = Matcher::new("dogf", SearchMode::Fuzzy);
        assert_eq!(matcher.highlight_ranges("dog face"), vec![(0, 3), (4, 5)]);
    }

    #[test]
    fn coalesce_merges_runs() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }
}
