#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a pattern [`Rule`](crate::Rule).
///
/// The production receives the regex captures of the placeholder key and a
/// lookup that resolves another placeholder key against the same rule list.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        , prod: |$caps:ident, $lookup:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: $crate::regex!($pat),
            production: |$caps, $lookup| $body,
            buckets: { 0 $(| $buckets)? },
        }
    }};
}
