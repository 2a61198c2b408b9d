//! Picker state controller.
//!
//! [`PickerController`] owns every piece of mutable picker state: the search term,
//! the recents list and the active section. Everything the view shows is derived
//! on demand from that state and the catalog.
//!
//! # Tab Invariant
//!
//! The section tabs are the recents tab (only while recents is non-empty)
//! followed by the sorted category names. The controller keeps a snapshot of the
//! last tab list; after any mutation that may change it, the snapshot is diffed
//! and, on change, the active section is repaired to the first tab when it no
//! longer names one. Direct [`PickerController::set_active_section`] calls are
//! never overridden on their own.
//!
//! # Persistence
//!
//! Recents are read from the injected [`KeyValueStore`] at construction and
//! written back after every change. Store failures are logged and swallowed; the
//! in-memory update always completes.

use crate::catalog::{categorize, CategorizedCatalog};
use crate::domain::EmojiRecord;
use crate::picker::recents::RecentsList;
use crate::picker::search::{normalize_term, Matcher, SearchMode};
use crate::storage::KeyValueStore;

/// Label of the synthetic recently-used tab.
pub const RECENT_SECTION_NAME: &str = "Recently Used";

/// Store key under which the recents list is persisted.
pub const RECENTS_STORAGE_KEY: &str = "angular_emoji_picker_recent";

/// A completed selection, to be delivered to the hosting view exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Selection {
    /// The chosen emoji glyph.
    pub glyph: String,
}

/// Owner of the picker's mutable state and its derivations.
#[derive(Debug)]
pub struct PickerController {
    /// All records in dataset order.
    records: Vec<EmojiRecord>,
    catalog: CategorizedCatalog,
    recents: RecentsList,
    search_term: String,
    search_mode: SearchMode,
    active_section: Option<String>,
    /// Tab list as of the last repair check.
    tabs: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl PickerController {
    /// Creates a controller over `records`, restoring recents from `store`.
    ///
    /// After construction the active section is the first available tab, or
    /// `None` when the catalog and recents are both empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemoji::picker::PickerController;
    /// use zemoji::storage::MemoryStore;
    /// use zemoji::EmojiRecord;
    ///
    /// let picker = PickerController::new(
    ///     vec![
    ///         EmojiRecord::new("😀", "grinning face", "Smileys"),
    ///         EmojiRecord::new("🐶", "dog face", "Animals"),
    ///     ],
    ///     Box::new(MemoryStore::default()),
    /// );
    ///
    /// assert_eq!(picker.section_tabs(), ["Animals", "Smileys"]);
    /// assert_eq!(picker.active_section(), Some("Animals"));
    /// ```
    #[must_use]
    pub fn new(records: Vec<EmojiRecord>, mut store: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("picker_new", record_count = records.len()).entered();

        let catalog = categorize(&records);
        let recents = Self::load_recents(store.as_mut());

        let mut picker = Self {
            records,
            catalog,
            recents,
            search_term: String::new(),
            search_mode: SearchMode::default(),
            active_section: None,
            tabs: Vec::new(),
            store,
        };
        picker.refresh_tabs();

        tracing::debug!(
            recent_count = picker.recents.len(),
            tab_count = picker.tabs.len(),
            active_section = ?picker.active_section,
            "picker initialized"
        );
        picker
    }

    /// Sets how the search term is matched against names.
    #[must_use]
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// All records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    #[must_use]
    pub const fn catalog(&self) -> &CategorizedCatalog {
        &self.catalog
    }

    /// Recently selected emojis, most recent first.
    #[must_use]
    pub fn recents(&self) -> &[EmojiRecord] {
        self.recents.as_slice()
    }

    /// The search term exactly as last set.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Stores the search term verbatim.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::trace!(term = %self.search_term, "search term updated");
    }

    /// Returns `true` when the normalized search term is non-empty.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !normalize_term(&self.search_term).is_empty()
    }

    /// Records matching the current search term, in catalog order.
    ///
    /// Empty while the trimmed term is empty: the tabbed view is shown instead.
    #[must_use]
    pub fn filtered_results(&self) -> Vec<&EmojiRecord> {
        let term = normalize_term(&self.search_term);
        if term.is_empty() {
            return vec![];
        }

        let _span = tracing::debug_span!("filter_results",
            total = self.records.len(),
            term_len = term.len(),
            mode = ?self.search_mode
        )
        .entered();

        let matcher = Matcher::new(&term, self.search_mode);
        let results: Vec<&EmojiRecord> =
            self.records.iter().filter(|r| matcher.matches(r)).collect();

        tracing::debug!(result_count = results.len(), "search filter applied");
        results
    }

    /// Character ranges of `name` to highlight for the current search term.
    #[must_use]
    pub fn highlight_ranges(&self, name: &str) -> Vec<(usize, usize)> {
        let term = normalize_term(&self.search_term);
        Matcher::new(&term, self.search_mode).highlight_ranges(name)
    }

    /// Section tabs: the recents tab (if any recents exist) then sorted categories.
    #[must_use]
    pub fn section_tabs(&self) -> &[String] {
        &self.tabs
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Makes `name` the active section without validating it.
    pub fn set_active_section(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(section = %name, "active section set");
        self.active_section = Some(name);
    }

    /// Activates the tab after the active one, wrapping around.
    pub fn next_section(&mut self) {
        let len = self.tabs.len();
        if len == 0 {
            return;
        }
        let next = self.active_tab_index().map_or(0, |i| (i + 1) % len);
        if let Some(tab) = self.tabs.get(next).cloned() {
            self.set_active_section(tab);
        }
    }

    /// Activates the tab before the active one, wrapping around.
    pub fn previous_section(&mut self) {
        let len = self.tabs.len();
        if len == 0 {
            return;
        }
        let previous = self
            .active_tab_index()
            .map_or(0, |i| (i + len - 1) % len);
        if let Some(tab) = self.tabs.get(previous).cloned() {
            self.set_active_section(tab);
        }
    }

    /// Position of the active section within the tab list, if it names a tab.
    #[must_use]
    pub fn active_tab_index(&self) -> Option<usize> {
        let active = self.active_section.as_deref()?;
        self.tabs.iter().position(|tab| tab == active)
    }

    /// Emojis of the active section.
    ///
    /// The recents tab yields recents in most-recent-first order; an unknown or
    /// missing section yields nothing.
    #[must_use]
    pub fn current_section_emojis(&self) -> &[EmojiRecord] {
        match self.active_section.as_deref() {
            None => &[],
            Some(RECENT_SECTION_NAME) => self.recents.as_slice(),
            Some(category) => self.catalog.get(category).unwrap_or(&[]),
        }
    }

    /// Selects an emoji.
    ///
    /// Records it at the front of recents, persists recents, clears the search
    /// term, and returns the selection for delivery to the hosting view.
    pub fn select_emoji(&mut self, record: &EmojiRecord) -> Selection {
        let _span = tracing::debug_span!("select_emoji", glyph = %record.glyph).entered();

        self.recents.record(record.clone());
        self.persist_recents();
        self.set_search_term(String::new());
        self.refresh_tabs();

        tracing::debug!(
            name = %record.name,
            recent_count = self.recents.len(),
            "emoji selected"
        );

        Selection {
            glyph: record.glyph.clone(),
        }
    }

    /// Empties the recents list and removes it from the store.
    pub fn clear_recents(&mut self) {
        let _span = tracing::debug_span!("clear_recents", recent_count = self.recents.len())
            .entered();

        self.recents.clear();
        if let Err(e) = self.store.remove(RECENTS_STORAGE_KEY) {
            tracing::error!(error = %e, "could not remove recent emojis from store");
        }
        self.refresh_tabs();
    }

    /// Switches to `store` and restores the recents it holds.
    ///
    /// Emojis selected since construction stay in front of the restored ones
    /// and are written to the new store. The search term and active section are
    /// kept; the section is only repaired if the tabs change.
    pub fn attach_store(&mut self, store: Box<dyn KeyValueStore>) {
        let _span =
            tracing::debug_span!("attach_store", pending_recents = self.recents.len()).entered();

        self.store = store;
        let pending = std::mem::take(&mut self.recents);
        self.recents = Self::load_recents(self.store.as_mut());

        if !pending.is_empty() {
            for record in pending.as_slice().iter().rev() {
                self.recents.record(record.clone());
            }
            self.persist_recents();
        }
        self.refresh_tabs();

        tracing::debug!(recent_count = self.recents.len(), "store attached");
    }

    fn compute_tabs(&self) -> Vec<String> {
        let recents_tab = (!self.recents.is_empty()).then(|| RECENT_SECTION_NAME.to_string());
        recents_tab
            .into_iter()
            .chain(self.catalog.category_names().map(String::from))
            .collect()
    }

    /// Recomputes the tabs and repairs the active section if they changed.
    fn refresh_tabs(&mut self) {
        let tabs = self.compute_tabs();
        if tabs == self.tabs {
            return;
        }
        self.tabs = tabs;
        self.repair_active_section();
    }

    fn repair_active_section(&mut self) {
        let valid = self
            .active_section
            .as_ref()
            .is_some_and(|active| self.tabs.contains(active));
        if valid {
            return;
        }

        let repaired = self.tabs.first().cloned();
        tracing::debug!(
            previous = ?self.active_section,
            repaired = ?repaired,
            "active section repaired"
        );
        self.active_section = repaired;
    }

    fn load_recents(store: &mut dyn KeyValueStore) -> RecentsList {
        let raw = match store.get(RECENTS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RecentsList::default(),
            Err(e) => {
                tracing::error!(error = %e, "could not load recent emojis from store");
                return RecentsList::default();
            }
        };

        match RecentsList::from_json(&raw) {
            Ok(recents) => recents,
            Err(e) => {
                tracing::warn!(error = %e, "invalid recent emojis in store, discarding");
                if let Err(e) = store.remove(RECENTS_STORAGE_KEY) {
                    tracing::error!(error = %e, "could not remove invalid recent emojis");
                }
                RecentsList::default()
            }
        }
    }

    fn persist_recents(&mut self) {
        let result = self
            .recents
            .to_json()
            .and_then(|json| self.store.set(RECENTS_STORAGE_KEY, &json));

        if let Err(e) = result {
            tracing::error!(error = %e, "could not save recent emojis to store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{PickerError, Result};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Memory store whose contents stay observable after being boxed.
    #[derive(Debug, Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl SharedStore {
        fn with_recents(value: &str) -> Self {
            Self(Rc::new(RefCell::new(MemoryStore::with_entries([(
                RECENTS_STORAGE_KEY,
                value,
            )]))))
        }

        fn recents_value(&self) -> Option<String> {
            self.0.borrow().get(RECENTS_STORAGE_KEY).unwrap()
        }
    }

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.borrow_mut().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.0.borrow_mut().remove(key)
        }
    }

    /// Store that fails every operation, like an unavailable or full backend.
    #[derive(Debug)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(PickerError::Storage("unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(PickerError::Storage("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(PickerError::Storage("unavailable".to_string()))
        }
    }

    fn grinning() -> EmojiRecord {
        EmojiRecord::new("😀", "grinning face", "Smileys")
    }

    fn dog() -> EmojiRecord {
        EmojiRecord::new("🐶", "dog face", "Animals")
    }

    fn two_emoji_picker(store: &SharedStore) -> PickerController {
        PickerController::new(vec![grinning(), dog()], Box::new(store.clone()))
    }

    #[test]
    fn fresh_picker_starts_on_first_category() {
        let store = SharedStore::default();
        let picker = two_emoji_picker(&store);

        assert_eq!(picker.section_tabs(), ["Animals", "Smileys"]);
        assert_eq!(picker.active_section(), Some("Animals"));
        assert!(picker.recents().is_empty());
        assert_eq!(picker.current_section_emojis(), [dog()]);
    }

    #[test]
    fn selecting_adds_recents_tab_without_overriding_valid_section() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);

        let selection = picker.select_emoji(&grinning());

        assert_eq!(selection.glyph, "😀");
        assert_eq!(picker.section_tabs(), [RECENT_SECTION_NAME, "Animals", "Smileys"]);
        assert_eq!(picker.recents(), [grinning()]);
        assert_eq!(picker.active_section(), Some("Animals"));
    }

    #[test]
    fn selecting_repairs_invalid_section_to_recents() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);
        picker.set_active_section("Flags");
        assert!(picker.current_section_emojis().is_empty());

        let _ = picker.select_emoji(&grinning());

        assert_eq!(picker.active_section(), Some(RECENT_SECTION_NAME));
        assert_eq!(picker.current_section_emojis(), [grinning()]);
    }

    #[test]
    fn explicit_section_is_not_overridden_when_tabs_are_unchanged() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);
        let _ = picker.select_emoji(&grinning());

        picker.set_active_section("Nowhere");
        let _ = picker.select_emoji(&dog());

        assert_eq!(picker.active_section(), Some("Nowhere"));
    }

    #[test]
    fn selection_persists_and_clears_search() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);
        picker.set_search_term("dog");

        let _ = picker.select_emoji(&dog());
        let _ = picker.select_emoji(&grinning());

        assert_eq!(picker.search_term(), "");
        let persisted = RecentsList::from_json(&store.recents_value().unwrap()).unwrap();
        assert_eq!(persisted.as_slice(), [grinning(), dog()]);
    }

    #[test]
    fn recents_survive_a_new_controller_on_the_same_store() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);
        let _ = picker.select_emoji(&dog());
        let _ = picker.select_emoji(&grinning());
        let before = picker.recents().to_vec();
        drop(picker);

        let reloaded = two_emoji_picker(&store);

        assert_eq!(reloaded.recents(), before.as_slice());
        assert_eq!(reloaded.active_section(), Some(RECENT_SECTION_NAME));
    }

    #[test]
    fn unparsable_stored_value_is_discarded_and_removed() {
        let store = SharedStore::with_recents("not json");
        let picker = two_emoji_picker(&store);

        assert!(picker.recents().is_empty());
        assert_eq!(store.recents_value(), None);
        assert_eq!(picker.section_tabs(), ["Animals", "Smileys"]);
    }

    #[test]
    fn stored_list_with_incomplete_entry_is_discarded_entirely() {
        let store = SharedStore::with_recents(
            r#"[{"emoji":"😀","name":"grinning face","category":"Smileys"},{"emoji":"🐶"}]"#,
        );
        let picker = two_emoji_picker(&store);

        assert!(picker.recents().is_empty());
        assert_eq!(store.recents_value(), None);
    }

    #[test]
    fn store_failures_never_interrupt_selection() {
        let mut picker = PickerController::new(vec![grinning(), dog()], Box::new(FailingStore));
        assert!(picker.recents().is_empty());

        picker.set_search_term("grin");
        let selection = picker.select_emoji(&grinning());

        assert_eq!(selection.glyph, "😀");
        assert_eq!(picker.recents(), [grinning()]);
        assert_eq!(picker.search_term(), "");

        picker.clear_recents();
        assert!(picker.recents().is_empty());
    }

    #[test]
    fn whitespace_search_yields_nothing() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);

        for term in ["", "   ", "\t\n"] {
            picker.set_search_term(term);
            assert!(picker.filtered_results().is_empty());
            assert!(!picker.is_searching());
        }
    }

    #[test]
    fn search_is_trimmed_case_insensitive_and_in_catalog_order() {
        let records = vec![
            EmojiRecord::new("🐱", "Cat Face", "Animals"),
            EmojiRecord::new("😀", "grinning face", "Smileys"),
            EmojiRecord::new("🍕", "pizza", "Food"),
        ];
        let mut picker = PickerController::new(records, Box::new(MemoryStore::default()));

        picker.set_search_term("  FACE ");
        assert_eq!(picker.search_term(), "  FACE ");

        let glyphs: Vec<&str> = picker
            .filtered_results()
            .iter()
            .map(|r| r.glyph.as_str())
            .collect();
        assert_eq!(glyphs, ["🐱", "😀"]);

        picker.set_search_term("🍕");
        assert_eq!(picker.filtered_results(), [&EmojiRecord::new("🍕", "pizza", "Food")]);
    }

    #[test]
    fn fuzzy_mode_matches_scattered_name_characters() {
        let mut picker = PickerController::new(vec![grinning(), dog()], Box::new(MemoryStore::default()))
            .with_search_mode(SearchMode::Fuzzy);

        picker.set_search_term("dgfc");
        assert_eq!(picker.filtered_results(), [&dog()]);
        assert_eq!(picker.highlight_ranges("dog face"), vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
    }

    #[test]
    fn clearing_recents_repairs_active_section() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);
        let _ = picker.select_emoji(&grinning());
        picker.set_active_section(RECENT_SECTION_NAME);

        picker.clear_recents();

        assert_eq!(picker.section_tabs(), ["Animals", "Smileys"]);
        assert_eq!(picker.active_section(), Some("Animals"));
        assert_eq!(store.recents_value(), None);
    }

    #[test]
    fn empty_catalog_and_recents_leave_no_active_section() {
        let mut picker = PickerController::new(vec![], Box::new(MemoryStore::default()));
        assert!(picker.section_tabs().is_empty());
        assert_eq!(picker.active_section(), None);
        assert!(picker.current_section_emojis().is_empty());

        let _ = picker.select_emoji(&dog());
        assert_eq!(picker.active_section(), Some(RECENT_SECTION_NAME));

        picker.clear_recents();
        assert_eq!(picker.active_section(), None);
    }

    #[test]
    fn twenty_one_selections_keep_twenty_most_recent() {
        let records: Vec<EmojiRecord> = (0..21)
            .map(|n| EmojiRecord::new(format!("e{n}"), format!("emoji {n}"), "Test"))
            .collect();
        let mut picker = PickerController::new(records.clone(), Box::new(MemoryStore::default()));

        for record in &records {
            let _ = picker.select_emoji(record);
            assert_eq!(picker.recents()[0], *record);
        }

        let expected: Vec<EmojiRecord> = records[1..].iter().rev().cloned().collect();
        assert_eq!(picker.recents(), expected.as_slice());
    }

    #[test]
    fn attaching_a_store_restores_its_recents_and_keeps_state() {
        let mut picker = PickerController::new(vec![grinning(), dog()], Box::new(MemoryStore::default()));
        picker.set_active_section("Smileys");
        picker.set_search_term("gri");

        let stored = SharedStore::default();
        let mut earlier_session = two_emoji_picker(&stored);
        let _ = earlier_session.select_emoji(&dog());
        drop(earlier_session);
        picker.attach_store(Box::new(stored.clone()));

        assert_eq!(picker.recents(), [dog()]);
        assert_eq!(picker.section_tabs(), [RECENT_SECTION_NAME, "Animals", "Smileys"]);
        assert_eq!(picker.active_section(), Some("Smileys"));
        assert_eq!(picker.search_term(), "gri");
    }

    #[test]
    fn selections_before_attaching_stay_in_front_and_are_persisted() {
        let mut picker = PickerController::new(vec![grinning(), dog()], Box::new(MemoryStore::default()));
        let _ = picker.select_emoji(&grinning());

        let stored = SharedStore::with_recents(
            r#"[{"emoji":"🐶","name":"dog face","category":"Animals"},{"emoji":"😀","name":"grinning face","category":"Smileys"}]"#,
        );
        picker.attach_store(Box::new(stored.clone()));

        assert_eq!(picker.recents(), [grinning(), dog()]);
        let persisted = RecentsList::from_json(&stored.recents_value().unwrap()).unwrap();
        assert_eq!(persisted.as_slice(), [grinning(), dog()]);
    }

    #[test]
    fn section_cycling_wraps_both_ways() {
        let store = SharedStore::default();
        let mut picker = two_emoji_picker(&store);

        picker.next_section();
        assert_eq!(picker.active_section(), Some("Smileys"));
        picker.next_section();
        assert_eq!(picker.active_section(), Some("Animals"));
        picker.previous_section();
        assert_eq!(picker.active_section(), Some("Smileys"));

        picker.set_active_section("Unknown");
        picker.previous_section();
        assert_eq!(picker.active_section(), Some("Animals"));
    }
}
