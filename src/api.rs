use crate::engine::{ExpansionContext, Parser, Replacements};
use crate::ranking::{self, Candidate};
use crate::{AliasStore, Rule};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);

/// Options that affect ranking and persistence.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of live suggestions shown while typing.
    pub suggestion_limit: usize,
    /// Maximum number of candidates considered when the input is committed.
    pub commit_limit: usize,
    /// Key under which the alias map is persisted.
    pub storage_key: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { suggestion_limit: 6, commit_limit: 5, storage_key: "alias_map".to_string() }
    }
}

/// Result from [`suggest_verbose`].
#[derive(Debug, Clone)]
pub struct SuggestResultVerbose {
    /// The query text.
    pub text: String,
    /// Candidates capped at [`Options::suggestion_limit`].
    pub results: Vec<Candidate>,
    /// Every candidate, ranked but not capped.
    pub all_candidates: Vec<Candidate>,
    /// Time spent ranking and expanding.
    pub elapsed: Duration,
}

/// Expand `template` for `alias` against the user's raw `input`.
///
/// Never fails: unknown placeholders and unterminated braces expand to the
/// empty string.
///
/// # Example
/// ```
/// use omnialias::expand;
///
/// assert_eq!(expand("gh", "https://github.com/{1}", "gh torvalds"), "https://github.com/torvalds");
/// assert_eq!(expand("a", "{?1:yes}", "a"), "");
/// assert_eq!(expand("a", "{kebab:HelloWorld}", "a"), "hello-world");
/// ```
pub fn expand(alias: &str, template: &str, input: &str) -> String {
    let context = ExpansionContext::new(alias, input);
    let replacements = Replacements::new(context.replacements(&DEFAULT_RULES));
    Parser::new(template, &replacements).expand()
}

/// Rank `store` against `text`, capped at the live suggestion limit.
pub fn suggest(store: &AliasStore, text: &str, options: &Options) -> Vec<Candidate> {
    ranking::rank(store, text, options.suggestion_limit)
}

/// Like [`suggest`], but also returns the uncapped list and timing.
pub fn suggest_verbose(store: &AliasStore, text: &str, options: &Options) -> SuggestResultVerbose {
    let start = Instant::now();
    let all_candidates = ranking::rank_all(store, text);
    let elapsed = start.elapsed();

    let results = all_candidates.iter().take(options.suggestion_limit).cloned().collect();

    SuggestResultVerbose { text: text.to_string(), results, all_candidates, elapsed }
}
