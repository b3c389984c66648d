//! Pattern rule families, in priority order.
//!
//! The exact entries (`{0}`, `{@}`, `{1}`..) are built per expansion by the
//! engine context; everything here is shared across expansions and tried
//! after them.

pub(crate) mod casing;
pub(crate) mod conditional;

#[cfg(test)]
mod tests;

use crate::Rule;

/// All pattern rules: conditionals first, then casing transforms.
pub(crate) fn get() -> Vec<Rule> {
    let mut rules = conditional::rules();
    rules.extend(casing::rules());
    rules
}
