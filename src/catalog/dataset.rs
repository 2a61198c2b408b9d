//! Emoji dataset loading.
//!
//! The dataset is a JSON object mapping each glyph to `{ "name", "group" }`. The
//! default dataset is embedded at build time; a replacement can be supplied through
//! the `dataset_file` configuration option. Object order is preserved, so records
//! come back in the order the dataset lists them.

use crate::domain::error::{PickerError, Result};
use crate::domain::EmojiRecord;
use serde::Deserialize;
use std::path::Path;

/// The dataset compiled into the plugin.
const BUNDLED_DATASET: &str = include_str!("../../data/emoji.json");

/// Per-glyph payload of the dataset. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct DatasetEntry {
    name: String,
    group: String,
}

/// Loads every record from the bundled dataset.
///
/// # Errors
///
/// Returns [`PickerError::Dataset`] if the embedded JSON is malformed. This cannot
/// happen for a correctly built plugin and is treated as fatal by the caller.
///
/// # Examples
///
/// ```
/// let records = zemoji::catalog::load()?;
/// assert!(records.iter().any(|r| r.glyph == "😀"));
/// # Ok::<(), zemoji::PickerError>(())
/// ```
pub fn load() -> Result<Vec<EmojiRecord>> {
    let _span = tracing::debug_span!("load_bundled_dataset").entered();
    parse_dataset(BUNDLED_DATASET)
}

/// Loads every record from a dataset file on disk.
///
/// # Errors
///
/// Returns [`PickerError::Io`] if the file cannot be read and
/// [`PickerError::Dataset`] if its contents are not a valid dataset.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<EmojiRecord>> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_dataset_file", path = %path.display()).entered();

    let contents = std::fs::read_to_string(path)?;
    parse_dataset(&contents)
}

/// Parses dataset JSON into records, keeping dataset order.
///
/// # Errors
///
/// Returns [`PickerError::Dataset`] when the document is not an object or an entry
/// lacks a string `name` or `group`.
pub fn parse_dataset(json: &str) -> Result<Vec<EmojiRecord>> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| PickerError::Dataset(format!("failed to parse dataset: {e}")))?;

    let records = entries
        .into_iter()
        .map(|(glyph, value)| {
            let entry: DatasetEntry = serde_json::from_value(value)
                .map_err(|e| PickerError::Dataset(format!("invalid entry for {glyph}: {e}")))?;
            Ok(EmojiRecord {
                glyph,
                name: entry.name,
                category: entry.group,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(record_count = records.len(), "dataset parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keeps_dataset_order_and_maps_group_to_category() {
        let json = r#"{
            "🐶": {"name": "dog face", "group": "Animals"},
            "😀": {"name": "grinning face", "group": "Smileys", "slug": "grinning_face"}
        }"#;

        let records = parse_dataset(json).unwrap();

        assert_eq!(
            records,
            vec![
                EmojiRecord::new("🐶", "dog face", "Animals"),
                EmojiRecord::new("😀", "grinning face", "Smileys"),
            ]
        );
    }

    #[test]
    fn rejects_entry_without_group() {
        let err = parse_dataset(r#"{"😀": {"name": "grinning face"}}"#).unwrap_err();
        assert!(matches!(err, PickerError::Dataset(_)));
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(matches!(parse_dataset("[]"), Err(PickerError::Dataset(_))));
    }

    #[test]
    fn bundled_dataset_has_unique_complete_records() {
        let records = load().unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(EmojiRecord::is_complete));

        let glyphs: HashSet<&str> = records.iter().map(|r| r.glyph.as_str()).collect();
        assert_eq!(glyphs.len(), records.len());
    }

    #[test]
    fn bundled_dataset_covers_every_unicode_group() {
        let records = load().unwrap();
        assert!(records.len() > 1800, "only {} emojis bundled", records.len());

        let groups: HashSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
        for group in [
            "Smileys & Emotion",
            "People & Body",
            "Animals & Nature",
            "Food & Drink",
            "Travel & Places",
            "Activities",
            "Objects",
            "Symbols",
            "Flags",
        ] {
            assert!(groups.contains(group), "missing group {group}");
        }
        assert_eq!(groups.len(), 9);

        for (glyph, name) in [("🫎", "moose"), ("🇺🇸", "flag: United States"), ("🧑‍💻", "technologist")] {
            assert!(records.iter().any(|r| r.glyph == glyph && r.name == name), "missing {name}");
        }
    }

    #[test]
    fn loads_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.json");
        std::fs::write(&path, r#"{"🍕": {"name": "pizza", "group": "Food & Drink"}}"#).unwrap();

        let records = load_from_file(&path).unwrap();
        assert_eq!(records, vec![EmojiRecord::new("🍕", "pizza", "Food & Drink")]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PickerError::Io(_)));
    }
}
