//! Grouping of emoji records by category.

use crate::domain::EmojiRecord;
use std::collections::BTreeMap;

/// Emoji records grouped by category, with categories in sorted order.
///
/// Each group keeps the order in which its records appeared in the input. Groups
/// are keyed by category name and iterate in ordinary lexicographic string order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCatalog {
    groups: BTreeMap<String, Vec<EmojiRecord>>,
}

impl CategorizedCatalog {
    /// Returns the category names in sorted order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns the records of one category, or `None` for an unknown name.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[EmojiRecord]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Iterates `(category, records)` pairs in sorted category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EmojiRecord])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups records by category.
///
/// Pure and deterministic: the same input list always yields the same catalog.
/// Every input record lands in exactly one group.
///
/// # Examples
///
/// ```
/// use zemoji::catalog::categorize;
/// use zemoji::EmojiRecord;
///
/// let catalog = categorize(&[
///     EmojiRecord::new("😀", "grinning face", "Smileys"),
///     EmojiRecord::new("🐶", "dog face", "Animals"),
/// ]);
///
/// let names: Vec<&str> = catalog.category_names().collect();
/// assert_eq!(names, ["Animals", "Smileys"]);
/// ```
#[must_use]
pub fn categorize(records: &[EmojiRecord]) -> CategorizedCatalog {
    let mut groups: BTreeMap<String, Vec<EmojiRecord>> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.category.clone())
            .or_default()
            .push(record.clone());
    }

    tracing::debug!(
        record_count = records.len(),
        category_count = groups.len(),
        "catalog categorized"
    );

    CategorizedCatalog { groups }
}
