//! Case and separator transforms: `{upper:text}`, `{kebab:text}`, ...
//!
//! Each transform applies to the captured text as-is. Because nested
//! placeholders expand before the outer key is resolved, `{upper:{1}}`
//! transforms the value of `{1}`.

use crate::Rule;
use crate::engine::KeyMask;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        rule! {
            name: "upper",
            pattern: r"(?s)^\{upper:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_uppercase() },
        },
        rule! {
            name: "lower",
            pattern: r"(?s)^\{lower:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_lowercase() },
        },
        rule! {
            name: "kebab",
            pattern: r"(?s)^\{kebab:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_kebab_case() },
        },
        rule! {
            name: "camel",
            pattern: r"(?s)^\{camel:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_lower_camel_case() },
        },
        rule! {
            name: "snake",
            pattern: r"(?s)^\{snake:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_snake_case() },
        },
        rule! {
            name: "pascal",
            pattern: r"(?s)^\{pascal:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_upper_camel_case() },
        },
        rule! {
            name: "capital",
            pattern: r"(?s)^\{capital:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { caps[1].to_title_case() },
        },
        rule! {
            name: "path",
            pattern: r"(?s)^\{path:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { joined(&caps[1], "/") },
        },
        rule! {
            name: "dot",
            pattern: r"(?s)^\{dot:(.+?)\}",
            buckets: KeyMask::TRANSFORM.bits(),
            prod: |caps, _lookup| { joined(&caps[1], ".") },
        },
    ]
}

/// Lowercase words joined by `separator`, using the same word boundaries as
/// the kebab transform.
fn joined(text: &str, separator: &str) -> String {
    text.to_kebab_case().replace('-', separator)
}
