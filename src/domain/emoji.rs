//! Emoji domain model.
//!
//! An [`EmojiRecord`] is one row of the emoji dataset. Records are immutable once
//! loaded and are shared between the catalog, search results, and the recents list.

use serde::{Deserialize, Serialize};

/// A single emoji with its display name and dataset category.
///
/// The glyph is unique across the catalog and is the identity used for
/// de-duplicating the recents list. Serialized with the field names
/// `emoji`, `name`, and `category`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The literal emoji character string.
    #[serde(rename = "emoji")]
    pub glyph: String,

    /// Human-readable name, e.g. `"grinning face"`.
    pub name: String,

    /// Dataset group the emoji belongs to, e.g. `"Smileys & Emotion"`.
    pub category: String,
}

impl EmojiRecord {
    /// Creates a record from its three fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemoji::EmojiRecord;
    ///
    /// let dog = EmojiRecord::new("🐶", "dog face", "Animals & Nature");
    /// assert_eq!(dog.glyph, "🐶");
    /// ```
    pub fn new(
        glyph: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    /// Returns `true` when every field carries a non-empty value.
    ///
    /// Persisted recents are only trusted when all entries are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.glyph.is_empty() && !self.name.is_empty() && !self.category.is_empty()
    }
}
