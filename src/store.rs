//! In-memory alias table.
//!
//! Keys are trimmed, non-empty and unique; writing an existing key overwrites
//! it. Internally the map keeps insertion order; everything handed outward
//! ([`AliasStore::snapshot`], change notifications, exports) is sorted by
//! alias so listings are deterministic.
//!
//! Every accepted mutating call notifies each subscribed listener exactly
//! once, after the mutation, with the new snapshot. Persisting is the
//! caller's job.

use crate::{Error, Result, ValidationError};
use indexmap::IndexMap;
use log::warn;
use serde_json::{Map, Value};

/// An `(alias, template)` pair.
pub type Entry = (String, String);

type Listener = Box<dyn FnMut(&[Entry])>;

#[derive(Default)]
pub struct AliasStore {
    map: IndexMap<String, String>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for AliasStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasStore")
            .field("map", &self.map)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called after every accepted mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Entry]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn has(&self, alias: &str) -> bool {
        self.map.contains_key(alias)
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.map.get(alias).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing alias is an error.
    pub fn get_defined(&self, alias: &str) -> Result<&str> {
        self.get(alias).ok_or_else(|| Error::UndefinedAlias(alias.to_string()))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by alias.
    pub fn snapshot(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Insert or overwrite. Both sides are trimmed; an empty side is rejected
    /// and leaves the store untouched.
    pub fn set(&mut self, alias: &str, template: &str) -> Result<()> {
        let (alias, template) = validate(alias, template)?;
        self.map.insert(alias, template);
        self.notify();
        Ok(())
    }

    /// Move the template stored under `old_alias` to `new_alias`.
    ///
    /// Does nothing when `old_alias` is absent. Pointing the new key at a new
    /// template is a separate [`set`](Self::set).
    pub fn rename(&mut self, old_alias: &str, new_alias: &str) -> Result<()> {
        if new_alias.trim().is_empty() {
            return Err(ValidationError::EmptyAlias.into());
        }

        if let Some(template) = self.map.shift_remove(old_alias) {
            self.map.insert(new_alias.trim().to_string(), template);
        }
        self.notify();
        Ok(())
    }

    /// Remove `alias` if present.
    pub fn delete(&mut self, alias: &str) {
        self.map.shift_remove(alias);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.notify();
    }

    /// Persistable form: a JSON object mapping alias to template.
    pub fn to_object(&self) -> Map<String, Value> {
        self.map.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect()
    }

    /// Replace the whole content with a stored JSON object.
    ///
    /// Entries that are not strings or are empty after trimming are skipped.
    pub fn load_object(&mut self, value: &Value) -> Result<()> {
        let Value::Object(object) = value else {
            return Err(Error::MalformedStorage(format!("expected an object, found {value}")));
        };

        let mut map = IndexMap::with_capacity(object.len());
        for (alias, template) in object {
            let Some(template) = template.as_str() else {
                warn!("[store] skipping alias {alias:?}: template is not a string");
                continue;
            };
            match validate(alias, template) {
                Ok((alias, template)) => {
                    map.insert(alias, template);
                }
                Err(err) => warn!("[store] skipping alias {alias:?}: {err}"),
            }
        }

        self.map = map;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

fn validate(alias: &str, template: &str) -> std::result::Result<Entry, ValidationError> {
    let alias = alias.trim();
    let template = template.trim();

    if alias.is_empty() {
        return Err(ValidationError::EmptyAlias);
    }
    if template.is_empty() {
        return Err(ValidationError::EmptyTemplate);
    }

    Ok((alias.to_string(), template.to_string()))
}
