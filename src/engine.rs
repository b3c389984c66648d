//! Placeholder template engine.
//!
//! Expanding a template is a small pipeline:
//!
//! ```text
//! alias + raw input ── ExpansionContext::new        (context.rs)
//!                       - {0}, {@}, {1}..{n} exact entries
//!                       - shared pattern rules appended in priority order
//!                               │
//! template ──────────── Parser::expand              (parser.rs)
//!                       - recursive descent over `{` / `}`
//!                       - innermost placeholders resolve first
//!                               │
//!                               v
//!                      Replacements::resolve        (resolve.rs)
//!                       - exact entries first
//!                       - pattern rules gated by KeyMask (trigger.rs)
//!                       - no match -> empty string
//! ```
//!
//! ## Responsibilities by module
//!
//! - `context.rs`: splits the alias and the raw input and builds the ordered
//!   replacement list.
//! - `parser.rs`: walks the template, recursing on `{` and unwinding on `}`.
//! - `resolve.rs`: looks a single placeholder key up in the replacement list.
//! - `trigger.rs`: classifies a key so pattern families that cannot match are
//!   skipped without running their regex.
//!
//! ## Adding new rule families
//!
//! New pattern rules live under `src/rules/**` and are appended to the list
//! returned by `rules::get`. If a family has a cheap syntactic marker, add a
//! `KeyMask` bit, teach `KeyMask::scan` to detect it and declare it in the
//! rule's `buckets`.

#[path = "engine/context.rs"]
mod context;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use context::ExpansionContext;
pub(crate) use parser::Parser;
pub(crate) use resolve::Replacements;
pub use trigger::KeyMask;
