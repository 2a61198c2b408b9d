//! Recently-used emoji list and its persisted encoding.

use crate::domain::error::{PickerError, Result};
use crate::domain::EmojiRecord;
use std::collections::HashSet;

/// Maximum number of emojis kept in the recents list.
pub const MAX_RECENT: usize = 20;

/// Emojis the user selected, most recent first.
///
/// Holds at most [`MAX_RECENT`] entries and never two entries with the same glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentsList {
    entries: Vec<EmojiRecord>,
}

impl RecentsList {
    /// Records a selection: moves or inserts `record` at the front and drops the
    /// oldest entries beyond [`MAX_RECENT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use zemoji::picker::RecentsList;
    /// use zemoji::EmojiRecord;
    ///
    /// let mut recents = RecentsList::default();
    /// let dog = EmojiRecord::new("🐶", "dog face", "Animals");
    /// recents.record(dog.clone());
    /// recents.record(EmojiRecord::new("😀", "grinning face", "Smileys"));
    /// recents.record(dog.clone());
    ///
    /// assert_eq!(recents.len(), 2);
    /// assert_eq!(recents.as_slice()[0], dog);
    /// ```
    pub fn record(&mut self, record: EmojiRecord) {
        self.entries.retain(|existing| existing.glyph != record.glyph);
        self.entries.insert(0, record);
        self.entries.truncate(MAX_RECENT);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn as_slice(&self) -> &[EmojiRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes the list as a JSON array of `{emoji, name, category}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Storage`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries)
            .map_err(|e| PickerError::Storage(format!("failed to serialize recents: {e}")))
    }

    /// Decodes a persisted list.
    ///
    /// The value must be a JSON array whose every element carries non-empty string
    /// `emoji`, `name` and `category` fields; anything else is rejected as a whole.
    /// Duplicate glyphs keep their first (most recent) occurrence and the list is
    /// capped at [`MAX_RECENT`].
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Storage`] for unparsable JSON, a non-array value, or
    /// any incomplete element.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<EmojiRecord> = serde_json::from_str(json)
            .map_err(|e| PickerError::Storage(format!("failed to parse recents: {e}")))?;

        if let Some(bad) = entries.iter().position(|entry| !entry.is_complete()) {
            return Err(PickerError::Storage(format!(
                "recents entry {bad} has an empty field"
            )));
        }

        let mut seen = HashSet::new();
        let mut entries: Vec<EmojiRecord> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.glyph.clone()))
            .collect();
        entries.truncate(MAX_RECENT);

        Ok(Self { entries })
    }
}
