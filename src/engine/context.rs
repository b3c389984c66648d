//! Expansion context: the exact replacements derived from one alias/input pair.
//!
//! ```text
//! alias "gh pr"   ─ split ' ' ─▶ 2 parts
//! input "gh pr 42 open"  ─ trim, split ' ', drop 2 ─▶ ["42", "open"]
//!
//! {0} -> "gh pr"
//! {@} -> "42 open"
//! {1} -> "42"
//! {2} -> "open"
//! ```
//!
//! Splitting is on single spaces, so doubled spaces inside the input produce
//! empty tokens. Those tokens still count as defined.

use crate::{Replacement, Rule};

#[derive(Debug)]
pub(crate) struct ExpansionContext {
    pub alias: String,
    pub input_parts: Vec<String>,
}

impl ExpansionContext {
    pub fn new(alias: &str, input: &str) -> Self {
        let alias_len = alias.split(' ').count();
        let input_parts = input.trim().split(' ').skip(alias_len).map(str::to_string).collect();

        ExpansionContext { alias: alias.to_string(), input_parts }
    }

    /// Build the ordered replacement list: exact entries first, then `rules`
    /// in the order given.
    pub fn replacements<'r>(&self, rules: &'r [Rule]) -> Vec<Replacement<'r>> {
        let mut entries = Vec::with_capacity(2 + self.input_parts.len() + rules.len());

        entries.push(Replacement::Exact { key: "{0}".to_string(), value: self.alias.clone() });
        entries.push(Replacement::Exact { key: "{@}".to_string(), value: self.input_parts.join(" ") });

        for (idx, part) in self.input_parts.iter().enumerate() {
            entries.push(Replacement::Exact { key: format!("{{{}}}", idx + 1), value: part.clone() });
        }

        entries.extend(rules.iter().map(Replacement::Pattern));
        entries
    }
}
