//! URI scheme helpers.

/// True when `text` starts with `scheme://`.
pub fn starts_with_protocol(text: &str) -> bool {
    regex!(r"^[A-Za-z][A-Za-z0-9+.\-]*://").is_match(text)
}

/// Remove a leading `scheme://`, if any.
pub fn strip_protocol(link: &str) -> &str {
    match regex!(r"^[A-Za-z][A-Za-z0-9+.\-]*://").find(link) {
        Some(m) => &link[m.end()..],
        None => link,
    }
}

/// Prefix `https://` unless `link` already names a scheme.
pub fn add_https(link: &str) -> String {
    if starts_with_protocol(link) { link.to_string() } else { format!("https://{link}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_schemes() {
        assert!(starts_with_protocol("https://example.com"));
        assert!(starts_with_protocol("chrome-extension://abc"));
        assert!(starts_with_protocol("git+ssh://host/repo"));
        assert!(!starts_with_protocol("example.com"));
        assert!(!starts_with_protocol("gh foo://bar"));
        assert!(!starts_with_protocol("://x"));
    }

    #[test]
    fn strips_scheme() {
        assert_eq!(strip_protocol("http://example.com/a"), "example.com/a");
        assert_eq!(strip_protocol("example.com"), "example.com");
    }

    #[test]
    fn adds_https_only_when_missing() {
        assert_eq!(add_https("example.com"), "https://example.com");
        assert_eq!(add_https("http://example.com"), "http://example.com");
        assert_eq!(add_https("https://example.com"), "https://example.com");
    }
}
