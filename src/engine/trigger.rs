//! Coarse classification of placeholder keys.
//!
//! Before pattern rules are tried, the key is scanned once for cheap
//! syntactic markers. A rule declaring `buckets` is only tried when the key
//! carries every bit it asks for; rules without buckets are always tried.
//! Gating only skips regexes that could not have matched, so it never changes
//! which rule wins.

bitflags::bitflags! {
    /// Syntactic markers found in a placeholder key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyMask: u32 {
        /// `{?N:...}`
        const CONDITIONAL = 1 << 0;
        /// `{name:...}` where `name` is alphabetic.
        const TRANSFORM   = 1 << 1;
    }
}

impl KeyMask {
    /// Scan a full placeholder key, braces included.
    pub fn scan(key: &str) -> Self {
        let mut mask = KeyMask::empty();
        let Some(body) = key.strip_prefix('{') else {
            return mask;
        };

        if body.starts_with('?') {
            mask |= KeyMask::CONDITIONAL;
        }

        if let Some((name, _)) = body.split_once(':') {
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
                mask |= KeyMask::TRANSFORM;
            }
        }

        mask
    }

    /// True when a rule requiring `required` may match a key with this mask.
    pub fn admits(self, required: KeyMask) -> bool {
        required.is_empty() || self.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_markers() {
        assert_eq!(KeyMask::scan("{?1:yes}"), KeyMask::CONDITIONAL);
        assert_eq!(KeyMask::scan("{kebab:Hello}"), KeyMask::TRANSFORM);
        assert_eq!(KeyMask::scan("{1}"), KeyMask::empty());
        assert_eq!(KeyMask::scan("{http://x}"), KeyMask::TRANSFORM);
        assert_eq!(KeyMask::scan("{a1:b}"), KeyMask::empty());
        assert_eq!(KeyMask::scan("plain"), KeyMask::empty());
    }

    #[test]
    fn empty_requirement_is_always_admitted() {
        assert!(KeyMask::empty().admits(KeyMask::empty()));
        assert!(!KeyMask::empty().admits(KeyMask::TRANSFORM));
        assert!(KeyMask::CONDITIONAL.admits(KeyMask::CONDITIONAL));
    }
}
