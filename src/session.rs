//! Resolution session: the stateful glue between the address box, the alias
//! store, persistence and navigation.
//!
//! ```text
//! keystroke ── on_input_changed ── rank (suggestion_limit) ──▶ SuggestResult list
//!                                   └─ remembered as last_suggestions
//!
//! enter ── on_input_entered
//!            ├─ "scheme://..."           -> input as-is
//!            ├─ rank (commit_limit)[0]
//!            ├─ last_suggestions: alias == input, url == input, first
//!            └─ Candidate::no_match(input)
//!                    │
//!                    └─ add_https ──▶ Navigator::navigate(url, disposition)
//! ```
//!
//! Only `on_input_changed` writes `last_suggestions`; committing reads it.
//! Both handlers take `&mut self`, so the host delivers them in order.

use crate::api::Options;
use crate::ranking::{self, Candidate, SuggestResult};
use crate::{AliasStore, Disposition, Entry, ExportFile, ExportFormat, Navigator, Result, Storage, StorageChange};
use crate::{ValidationError, add_https, export, starts_with_protocol};
use log::{debug, info, warn};
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct Session<N, S> {
    store: AliasStore,
    options: Options,
    last_suggestions: Vec<Candidate>,
    navigator: N,
    storage: S,
}

impl<N: Navigator, S: Storage> Session<N, S> {
    pub fn new(navigator: N, storage: S, options: Options) -> Self {
        Session { store: AliasStore::new(), options, last_suggestions: Vec::new(), navigator, storage }
    }

    pub fn store(&self) -> &AliasStore {
        &self.store
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a listener for store changes (for refreshing a list view).
    pub fn subscribe(&mut self, listener: impl FnMut(&[Entry]) + 'static) {
        self.store.subscribe(listener);
    }

    /// Populate the store from storage. A missing value loads an empty map.
    pub fn load(&mut self) -> Result<()> {
        let stored = self.storage.get(&self.options.storage_key)?.unwrap_or_else(|| Value::Object(Map::new()));
        self.store.load_object(&stored)
    }

    pub fn add_alias(&mut self, alias: &str, url: &str) -> Result<()> {
        self.store.set(alias, url)?;
        self.save();
        Ok(())
    }

    pub fn remove_alias(&mut self, alias: &str) {
        self.store.delete(alias);
        self.save();
    }

    /// Rename `old_alias` to `new_alias` (when they differ) and point it at
    /// `new_url`. Rejected as a whole when any argument is blank.
    pub fn update_alias(&mut self, old_alias: &str, new_alias: &str, new_url: &str) -> Result<()> {
        if old_alias.trim().is_empty() || new_alias.trim().is_empty() {
            return Err(ValidationError::EmptyAlias.into());
        }
        if new_url.trim().is_empty() {
            return Err(ValidationError::EmptyTemplate.into());
        }

        if old_alias != new_alias {
            self.store.rename(old_alias, new_alias)?;
        }
        self.store.set(new_alias, new_url)?;
        self.save();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.save();
    }

    pub fn export(&self, format: ExportFormat) -> Result<ExportFile> {
        export(&self.store.snapshot(), format)
    }

    /// Apply a change written elsewhere. The incoming map replaces the store.
    pub fn on_storage_change(&mut self, change: &StorageChange) {
        if !change.area.holds_aliases() || change.key != self.options.storage_key {
            return;
        }
        let Some(value) = &change.new_value else {
            return;
        };

        match self.store.load_object(value) {
            Ok(()) => info!("[storage] reloaded {} aliases from {:?}", self.store.len(), change.area),
            Err(err) => warn!("[storage] ignoring change from {:?}: {err}", change.area),
        }
    }

    /// Live suggestions for the text currently typed.
    pub fn on_input_changed(&mut self, text: &str) -> Vec<SuggestResult> {
        self.last_suggestions = ranking::rank_all(&self.store, text);
        self.last_suggestions.iter().take(self.options.suggestion_limit).map(SuggestResult::from).collect()
    }

    /// Resolve the committed `text`, navigate to it and return the final URL.
    pub fn on_input_entered(&mut self, text: &str, disposition: Disposition) -> String {
        let url = add_https(&self.resolve_url(text));
        info!("[navigate] {url} ({disposition:?})");
        self.navigator.navigate(&url, disposition);
        url
    }

    pub fn last_suggestions(&self) -> &[Candidate] {
        &self.last_suggestions
    }

    pub fn reset_suggestions(&mut self) {
        self.last_suggestions.clear();
    }

    fn resolve_url(&self, text: &str) -> String {
        if starts_with_protocol(text) {
            debug!("[commit] {text:?} already has a scheme");
            return text.to_string();
        }

        let best = self.best_candidate(text);
        debug!("[commit] alias: {}, url: {}", best.alias, best.url);
        best.url
    }

    fn best_candidate(&self, text: &str) -> Candidate {
        if let Some(best) = ranking::rank(&self.store, text, self.options.commit_limit).into_iter().next() {
            return best;
        }

        self.find_in_last_suggestions(text).cloned().unwrap_or_else(|| Candidate::no_match(text))
    }

    fn find_in_last_suggestions(&self, text: &str) -> Option<&Candidate> {
        let last = &self.last_suggestions;
        last.iter().find(|c| c.alias == text).or_else(|| last.iter().find(|c| c.url == text)).or_else(|| last.first())
    }

    fn save(&mut self) {
        let object = Value::Object(self.store.to_object());
        if let Err(err) = self.storage.set(&self.options.storage_key, object) {
            warn!("[storage] failed to save aliases: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MemoryStorage, StorageArea};
    use serde_json::json;

    #[derive(Debug, Default)]
    struct RecordingNavigator {
        visits: Vec<(String, Disposition)>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, url: &str, disposition: Disposition) {
            self.visits.push((url.to_string(), disposition));
        }
    }

    #[derive(Debug, Default)]
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<Value>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    fn session() -> Session<RecordingNavigator, MemoryStorage> {
        Session::new(RecordingNavigator::default(), MemoryStorage::new(), Options::default())
    }

    fn session_with(entries: &[(&str, &str)]) -> Session<RecordingNavigator, MemoryStorage> {
        let mut session = session();
        for (alias, url) in entries {
            session.add_alias(alias, url).unwrap();
        }
        session
    }

    #[test]
    fn commit_resolves_through_live_ranking() {
        let mut session = session_with(&[("gh", "https://github.com/{1}")]);

        let url = session.on_input_entered("gh torvalds", Disposition::CurrentTab);

        assert_eq!(url, "https://github.com/torvalds");
        assert_eq!(session.navigator().visits, vec![(url, Disposition::CurrentTab)]);
    }

    #[test]
    fn scheme_input_bypasses_the_store() {
        let mut session = session_with(&[("https", "https://wrong.example")]);

        let url = session.on_input_entered("https://example.com", Disposition::NewForegroundTab);
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn empty_store_falls_back_to_raw_input() {
        let mut session = session();

        let url = session.on_input_entered("example.org/path", Disposition::NewBackgroundTab);
        assert_eq!(url, "https://example.org/path");
        assert_eq!(session.navigator().visits[0].1, Disposition::NewBackgroundTab);
    }

    #[test]
    fn templates_without_scheme_get_https() {
        let mut session = session_with(&[("w", "en.wikipedia.org/wiki/{1}")]);
        assert_eq!(session.on_input_entered("w Rust", Disposition::CurrentTab), "https://en.wikipedia.org/wiki/Rust");
    }

    #[test]
    fn live_input_remembers_uncapped_ranking() {
        let entries: Vec<(String, String)> = (0..8).map(|i| (format!("a{i}"), format!("https://{i}.example"))).collect();
        let mut session = session();
        for (alias, url) in &entries {
            session.add_alias(alias, url).unwrap();
        }

        let shown = session.on_input_changed("a1");

        assert_eq!(shown.len(), 6);
        assert_eq!(shown[0], SuggestResult { content: "https://1.example".into(), description: "a1".into() });
        assert_eq!(session.last_suggestions().len(), 8);
    }

    #[test]
    fn commit_uses_last_suggestions_when_store_emptied() {
        let mut session = session_with(&[("gh", "github.com"), ("gl", "gitlab.com")]);
        session.on_input_changed("g");
        session.clear();

        // exact alias match
        assert_eq!(session.on_input_entered("gl", Disposition::CurrentTab), "https://gitlab.com");
        // exact url match
        assert_eq!(session.on_input_entered("gitlab.com", Disposition::CurrentTab), "https://gitlab.com");
        // first entry
        assert_eq!(session.on_input_entered("zzz", Disposition::CurrentTab), "https://github.com");

        session.reset_suggestions();
        assert_eq!(session.on_input_entered("zzz", Disposition::CurrentTab), "https://zzz");
    }

    #[test]
    fn commit_does_not_replace_last_suggestions() {
        let mut session = session_with(&[("gh", "https://github.com")]);
        session.on_input_changed("g");
        let before = session.last_suggestions().to_vec();

        session.on_input_entered("xyz", Disposition::CurrentTab);
        assert_eq!(session.last_suggestions(), before.as_slice());
    }

    #[test]
    fn mutations_are_persisted() {
        let mut session = session_with(&[("gh", "https://github.com"), ("x", "https://x.com")]);
        session.remove_alias("x");
        session.update_alias("gh", "hub", "https://github.com/{1}").unwrap();

        let stored = session.storage().get("alias_map").unwrap();
        assert_eq!(stored, Some(json!({ "hub": "https://github.com/{1}" })));
    }

    #[test]
    fn update_alias_validates_every_argument() {
        let mut session = session_with(&[("gh", "https://github.com")]);

        assert!(matches!(session.update_alias("", "a", "b"), Err(Error::Validation(ValidationError::EmptyAlias))));
        assert!(matches!(session.update_alias("gh", " ", "b"), Err(Error::Validation(ValidationError::EmptyAlias))));
        assert!(matches!(session.update_alias("gh", "a", ""), Err(Error::Validation(ValidationError::EmptyTemplate))));
        assert_eq!(session.store().get("gh"), Some("https://github.com"));
    }

    #[test]
    fn update_alias_in_place_changes_url() {
        let mut session = session_with(&[("gh", "https://github.com")]);
        session.update_alias("gh", "gh", "https://github.com/{1}").unwrap();

        assert_eq!(session.store().snapshot(), vec![("gh".to_string(), "https://github.com/{1}".to_string())]);
    }

    #[test]
    fn failed_save_keeps_in_memory_edit() {
        let mut session = Session::new(RecordingNavigator::default(), FailingStorage, Options::default());

        session.add_alias("gh", "https://github.com").unwrap();
        assert_eq!(session.store().get("gh"), Some("https://github.com"));
    }

    #[test]
    fn load_reads_stored_map() {
        let storage = MemoryStorage::with_value("alias_map", json!({ "gh": "https://github.com/{1}" }));
        let mut session = Session::new(RecordingNavigator::default(), storage, Options::default());
        session.load().unwrap();

        assert_eq!(session.store().get("gh"), Some("https://github.com/{1}"));
    }

    #[test]
    fn load_without_stored_value_is_empty() {
        let mut session = session();
        session.load().unwrap();
        assert!(session.store().is_empty());
    }

    #[test]
    fn storage_change_replaces_store() {
        let mut session = session_with(&[("old", "https://old")]);

        session.on_storage_change(&StorageChange {
            key: "alias_map".into(),
            new_value: Some(json!({ "new": "https://new" })),
            area: StorageArea::Sync,
        });

        assert_eq!(session.store().snapshot(), vec![("new".to_string(), "https://new".to_string())]);
    }

    #[test]
    fn storage_change_ignores_other_keys_and_areas() {
        let mut session = session_with(&[("old", "https://old")]);
        let changes = [
            StorageChange { key: "other".into(), new_value: Some(json!({})), area: StorageArea::Local },
            StorageChange { key: "alias_map".into(), new_value: Some(json!({})), area: StorageArea::Managed },
            StorageChange { key: "alias_map".into(), new_value: None, area: StorageArea::Local },
            StorageChange { key: "alias_map".into(), new_value: Some(json!("bad")), area: StorageArea::Local },
        ];

        for change in &changes {
            session.on_storage_change(change);
        }
        assert_eq!(session.store().get("old"), Some("https://old"));
    }

    #[test]
    fn subscribers_see_session_edits() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut session = session();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        session.subscribe(move |_| sink.set(sink.get() + 1));

        session.add_alias("a", "https://a").unwrap();
        session.remove_alias("a");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn export_uses_sorted_snapshot() {
        let session = session_with(&[("b", "https://b"), ("a", "https://a")]);
        let file = session.export(ExportFormat::Csv).unwrap();
        assert_eq!(file.contents, "a,https://a\nb,https://b");
    }
}
