//! Suggestion ranking.
//!
//! Every alias in the store is scored against the query:
//!
//! ```text
//! alias "gh"  query "gj torvalds"
//!   prefix   = 1     (shared leading chars, case-sensitive)
//!   distance = 1     (levenshtein("gh", "gj"), query cut to the alias length)
//! ```
//!
//! Candidates sort by `prefix` descending, then `distance` ascending. The sort
//! is stable over the store's sorted snapshot, so full ties fall back to
//! alias order.

use crate::AliasStore;
use crate::api::expand;
use serde::Serialize;

/// Alias reported by the commit fallback when nothing matched.
pub const NO_MATCH_ALIAS: &str = "no-match";

/// One scored alias for a query, with its template already expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub alias: String,
    pub url: String,
    pub distance: usize,
    pub prefix: usize,
}

impl Candidate {
    /// Candidate that sends the raw input through unchanged.
    pub fn no_match(input: &str) -> Self {
        Candidate { alias: NO_MATCH_ALIAS.to_string(), url: input.to_string(), distance: 0, prefix: 0 }
    }
}

/// Display pair handed to the suggestion UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestResult {
    /// What the address box receives if the suggestion is picked.
    pub content: String,
    /// Label shown to the user.
    pub description: String,
}

impl From<&Candidate> for SuggestResult {
    fn from(candidate: &Candidate) -> Self {
        SuggestResult { content: candidate.url.clone(), description: candidate.alias.clone() }
    }
}

/// Number of leading chars `value` and `text` share.
pub fn prefix_length(value: &str, text: &str) -> usize {
    value.chars().zip(text.chars()).take_while(|(a, b)| a == b).count()
}

/// Levenshtein distance between `alias` and the start of `text`, cut to the
/// alias's length in chars.
pub fn edit_distance(alias: &str, text: &str) -> usize {
    let window_end = text.char_indices().nth(alias.chars().count()).map_or(text.len(), |(idx, _)| idx);
    strsim::levenshtein(alias, &text[..window_end])
}

/// Score and sort every alias in `store` against `text`.
pub fn rank_all(store: &AliasStore, text: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = store
        .snapshot()
        .into_iter()
        .map(|(alias, template)| Candidate {
            url: expand(&alias, &template, text),
            distance: edit_distance(&alias, text),
            prefix: prefix_length(&alias, text),
            alias,
        })
        .collect();

    candidates.sort_by(|a, b| b.prefix.cmp(&a.prefix).then(a.distance.cmp(&b.distance)));
    candidates
}

/// [`rank_all`] truncated to `limit`.
pub fn rank(store: &AliasStore, text: &str, limit: usize) -> Vec<Candidate> {
    let mut candidates = rank_all(store, text);
    candidates.truncate(limit);
    candidates
}
