//! Alias resolution for an address-style input box.
//!
//! A user keeps a table of short aliases mapped to URL templates. While they
//! type, [`rank`] orders the aliases against the partial input; on commit a
//! [`Session`] picks the best candidate and expands its template through
//! [`expand`] before handing the URL to a [`Navigator`].
//!
//! ```
//! use omnialias::{AliasStore, expand, rank};
//!
//! let mut store = AliasStore::new();
//! store.set("gh", "https://github.com/{1}").unwrap();
//!
//! let best = &rank(&store, "gh torvalds", 5)[0];
//! assert_eq!(best.url, "https://github.com/torvalds");
//! assert_eq!(expand("a", "{upper:{1}}", "a world"), "WORLD");
//! ```

use regex::{Captures, Regex};

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod export;
mod navigation;
mod ranking;
mod rules;
mod session;
mod storage;
mod store;
mod url;

pub use api::{Options, SuggestResultVerbose, expand, suggest, suggest_verbose};
pub use engine::KeyMask;
pub use error::{Error, Result, ValidationError};
pub use export::{ExportFile, ExportFormat, export};
pub use navigation::{Disposition, Navigator};
pub use ranking::{Candidate, NO_MATCH_ALIAS, SuggestResult, edit_distance, prefix_length, rank, rank_all};
pub use session::Session;
pub use storage::{MemoryStorage, Storage, StorageArea, StorageChange};
pub use store::{AliasStore, Entry};
pub use url::{add_https, starts_with_protocol, strip_protocol};

// --- Internal rule types ----------------------------------------------------

/// Resolves another placeholder key (for example `"{1}"`) against the rule
/// list currently in effect. `None` means no rule exists for the key.
pub(crate) type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

pub(crate) type Production = fn(&Captures<'_>, &Lookup<'_>) -> String;

/// A pattern rule: a name, a regex anchored at the start of the placeholder
/// key (braces included) and a production turning the captures into
/// replacement text.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub production: Production,
    /// `KeyMask` bits a key must carry before this rule is tried.
    pub buckets: u32,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}

/// One entry of the ordered replacement list consulted for a placeholder key.
///
/// Exact entries come from the expansion context (`{0}`, `{@}`, `{1}`, ...);
/// pattern entries are the shared rule families from `rules`.
#[derive(Debug)]
pub(crate) enum Replacement<'r> {
    Exact { key: String, value: String },
    Pattern(&'r Rule),
}
