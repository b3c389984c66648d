//! Placeholder key resolution.
//!
//! A key is the full placeholder text with its braces, after any nested
//! placeholders inside it have already been expanded (`"{upper:world}"`, not
//! `"{upper:{1}}"`). Resolution walks the ordered replacement list:
//!
//! ```text
//! key ──┬─ Exact entries   (first equal key wins)
//!       └─ Pattern rules   (in list order, gated by KeyMask; first regex hit wins)
//!                └─ production(captures, lookup) -> String
//! ```
//!
//! The `lookup` handed to productions is this same resolution step, so a rule
//! can ask whether another key is defined (see `rules::conditional`).

use super::trigger::KeyMask;
use crate::Replacement;
use log::{debug, trace};

/// Ordered replacement list for one expansion.
#[derive(Debug)]
pub(crate) struct Replacements<'r> {
    entries: Vec<Replacement<'r>>,
}

impl<'r> Replacements<'r> {
    pub fn new(entries: Vec<Replacement<'r>>) -> Self {
        Replacements { entries }
    }

    /// Resolve `key`, returning `None` when no entry matches.
    pub fn resolve(&self, key: &str) -> Option<String> {
        let resolved = self.resolve_exact(key).or_else(|| self.resolve_pattern(key));
        debug!("[resolve] {} -> {}", key, resolved.as_deref().map_or("<undefined>", display_value));
        resolved
    }

    fn resolve_exact(&self, key: &str) -> Option<String> {
        self.entries.iter().find_map(|entry| match entry {
            Replacement::Exact { key: k, value } if k == key => Some(value.clone()),
            _ => None,
        })
    }

    fn resolve_pattern(&self, key: &str) -> Option<String> {
        let mask = KeyMask::scan(key);
        let lookup = |inner: &str| self.resolve(inner);

        for entry in &self.entries {
            let Replacement::Pattern(rule) = entry else {
                continue;
            };

            if !mask.admits(KeyMask::from_bits_truncate(rule.buckets)) {
                trace!("[gate] {} skipped for {}", rule.name, key);
                continue;
            }

            if let Some(caps) = rule.pattern.captures(key) {
                trace!("[match] {} matched {}", rule.name, key);
                return Some((rule.production)(&caps, &lookup));
            }
        }

        None
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() { "<empty-string>" } else { value }
}
