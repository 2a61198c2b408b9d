//! Picker state and its derivations.
//!
//! - `controller`: owns search term, recents and active section
//! - `recents`: bounded most-recent-first list and its JSON encoding
//! - `search`: term normalization, matching and highlight ranges

pub mod controller;
pub mod recents;
pub mod search;

pub use controller::{PickerController, Selection, RECENTS_STORAGE_KEY, RECENT_SECTION_NAME};
pub use recents::{RecentsList, MAX_RECENT};
pub use search::{normalize_term, Matcher, SearchMode};
