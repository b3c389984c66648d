use crate::Rule;
use crate::engine::KeyMask;

/// `{?N:text}` yields `text` when a rule exists for `{N}`, else nothing.
///
/// Existence is what counts: a positional token that is itself empty still
/// makes the condition true.
pub(crate) fn rules() -> Vec<Rule> {
    vec![rule! {
        name: "conditional positional",
        pattern: r"(?s)^\{\?(\d+):(.+?)\}",
        buckets: KeyMask::CONDITIONAL.bits(),
        prod: |caps, lookup| {
            let key = format!("{{{}}}", &caps[1]);
            if lookup(&key).is_some() { caps[2].to_string() } else { String::new() }
        },
    }]
}
