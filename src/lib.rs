//! zemoji: an emoji picker plugin for Zellij.
//!
//! zemoji opens as a floating pane and provides:
//! - Emojis browsed by category in a tabbed grid
//! - Search by name or glyph, substring or fuzzy
//! - A "Recently Used" tab persisted across sessions
//! - Insertion of the chosen glyph into the previously focused pane

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Key events
//! │  - Event handling, cursor, input mode               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Picker        │   │ Storage Layer │
//! │ (ui/)         │   │ (picker/)     │   │ (storage/)    │
//! │ - Rendering   │   │ - Sections    │   │ - Key-value   │
//! │ - Theming     │   │ - Search      │   │ - JSON file   │
//! │ - Components  │   │ - Recents     │   │ - In-memory   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog & Domain                                   │
//! │  - Bundled dataset, categorization (catalog/)       │
//! │  - Emoji record, errors (domain/)                   │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! // ~/.config/zellij/config.kdl
//! keybinds {
//!     shared {
//!         bind "Alt e" {
//!             LaunchOrFocusPlugin "file:~/.config/zellij/plugins/zemoji.wasm" {
//!                 floating true
//!                 theme "catppuccin-mocha"
//!                 fuzzy_search "true"
//!                 trace_level "info"
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zemoji::storage::MemoryStore;
//! use zemoji::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default(), Box::new(MemoryStore::default()));
//!
//! let (_render, actions) = handle_event(&mut state, &Event::Select)?;
//! assert!(matches!(actions.as_slice(), [Action::InsertGlyph { .. }]));
//! assert_eq!(state.picker.recents().len(), 1);
//! # Ok::<(), zemoji::PickerError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod picker;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{EmojiRecord, PickerError, Result};
pub use ui::Theme;

use crate::infrastructure::paths::{expand_tilde, get_store_path};
use crate::picker::{PickerController, SearchMode};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zemoji.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/zemoji/theme.toml"
///     dataset_file "~/.config/zemoji/emoji.json"
///     fuzzy_search "true"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter for OpenTelemetry spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Path to a dataset replacing the bundled one, same JSON format.
    pub dataset_file: Option<String>,

    /// How search terms match names.
    pub search_mode: SearchMode,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`, `trace_level`, `dataset_file`: taken verbatim,
    ///   blank values ignored
    /// - `fuzzy_search`: `true`, `yes` or `1` (any case) select fuzzy matching;
    ///   anything else keeps substring matching
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zemoji::picker::SearchMode;
    /// use zemoji::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("fuzzy_search".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.search_mode, SearchMode::Fuzzy);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let search_mode = match value("fuzzy_search").map(|v| v.to_lowercase()).as_deref() {
            Some("true" | "yes" | "1") => SearchMode::Fuzzy,
            _ => SearchMode::Substring,
        };

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            dataset_file: value("dataset_file"),
            search_mode,
        }
    }
}

/// Opens the durable store, falling back to an in-memory store.
///
/// The fallback keeps the picker usable for the session when the data directory
/// is unavailable; recents then do not survive a restart.
#[must_use]
pub fn open_store() -> Box<dyn KeyValueStore> {
    let path = get_store_path();
    match JsonFileStore::open(path.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::error!(path = ?path, error = %e, "could not open store, recents will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

/// Initializes the plugin state from configuration and a store.
///
/// Loads the theme (file, then name, then default), the dataset (configured
/// file, falling back to the bundled one) and restores recents from `store`.
/// A dataset that cannot be loaded at all leaves the catalog empty and the
/// reason is shown in the empty state.
///
/// # Example
///
/// ```rust
/// use zemoji::storage::MemoryStore;
/// use zemoji::{initialize, Config};
///
/// let state = initialize(&Config::default(), Box::new(MemoryStore::default()));
/// assert_eq!(state.picker.active_section(), Some("Activities"));
/// ```
pub fn initialize(config: &Config, store: Box<dyn KeyValueStore>) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = load_theme(config);

    let (records, load_error) = match load_records(config) {
        Ok(records) => (records, None),
        Err(e) => {
            tracing::error!(error = %e, "could not load emoji dataset");
            (vec![], Some(e.to_string()))
        }
    };

    let picker = PickerController::new(records, store).with_search_mode(config.search_mode);
    let state = AppState::new(picker, theme);

    tracing::debug!(
        emoji_count = state.picker.records().len(),
        categories = state.picker.catalog().len(),
        "zemoji initialized"
    );

    match load_error {
        Some(error) => state.with_load_error(error),
        None => state,
    }
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(expand_tilde(theme_file)) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            }
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_records(config: &Config) -> Result<Vec<EmojiRecord>> {
    if let Some(dataset_file) = &config.dataset_file {
        match catalog::load_from_file(expand_tilde(dataset_file)) {
            Ok(records) => return Ok(records),
            Err(e) => {
                tracing::warn!(dataset_file = %dataset_file, error = %e, "failed to load dataset file, using bundled dataset");
            }
        }
    }

    catalog::load()
}
