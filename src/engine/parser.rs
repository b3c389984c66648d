//! Recursive descent over a template's braces.
//!
//! The parser copies literal text into a buffer until it meets a brace:
//!
//! ```text
//! "x{upper:{1}}y"
//!   ^ '{'  -> recurse from after it
//!          "upper:" ... '{' -> recurse -> "1" ... '}' -> key "{1}" -> "world"
//!          ... '}' -> inner text "upper:world"
//!   key "{upper:world}" -> "WORLD"
//! result "xWORLDy"
//! ```
//!
//! - `{` recurses; the callee returns its expanded text and the index of the
//!   `}` that closed it. The text is re-wrapped in braces and resolved as a
//!   key; a missing rule contributes nothing.
//! - `}` returns to the caller. At the top level this ends the expansion, so
//!   text after an unmatched `}` is dropped.
//! - End of input returns whatever has been collected, which is how an
//!   unterminated `{` degrades.
//!
//! Braces are ASCII, so byte indices always land on char boundaries.

use super::resolve::Replacements;

#[derive(Debug)]
pub(crate) struct Parser<'a, 'r> {
    template: &'a str,
    replacements: &'a Replacements<'r>,
}

impl<'a, 'r> Parser<'a, 'r> {
    pub fn new(template: &'a str, replacements: &'a Replacements<'r>) -> Self {
        Parser { template, replacements }
    }

    /// Expand the whole template.
    pub fn expand(&self) -> String {
        self.parse_from(0).0
    }

    /// Parse starting at byte `start`. Returns the expanded text and the
    /// index where parsing stopped (a closing `}` or the template length).
    fn parse_from(&self, start: usize) -> (String, usize) {
        let bytes = self.template.as_bytes();
        let mut buffer = String::new();
        let mut literal_start = start;
        let mut i = start;

        while i < bytes.len() {
            match bytes[i] {
                b'{' => {
                    buffer.push_str(&self.template[literal_start..i]);

                    let (inner, close) = self.parse_from(i + 1);
                    let key = format!("{{{}}}", inner);
                    if let Some(value) = self.replacements.resolve(&key) {
                        buffer.push_str(&value);
                    }

                    i = (close + 1).min(bytes.len());
                    literal_start = i;
                }
                b'}' => {
                    buffer.push_str(&self.template[literal_start..i]);
                    return (buffer, i);
                }
                _ => i += 1,
            }
        }

        buffer.push_str(&self.template[literal_start..]);
        (buffer, bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Replacement;

    fn replacements() -> Replacements<'static> {
        Replacements::new(vec![
            Replacement::Exact { key: "{1}".into(), value: "one".into() },
            Replacement::Exact { key: "{one}".into(), value: "nested".into() },
        ])
    }

    fn run(template: &str) -> String {
        let r = replacements();
        Parser::new(template, &r).expand()
    }

    #[test]
    fn literal_text_is_copied() {
        assert_eq!(run("https://example.com/ü"), "https://example.com/ü");
    }

    #[test]
    fn placeholders_are_replaced() {
        assert_eq!(run("a/{1}/b"), "a/one/b");
    }

    #[test]
    fn innermost_resolves_first() {
        assert_eq!(run("{{1}}"), "nested");
    }

    #[test]
    fn unknown_placeholder_is_empty() {
        assert_eq!(run("a{9}b"), "ab");
    }

    #[test]
    fn unterminated_brace_degrades() {
        assert_eq!(run("a{1"), "aone");
        assert_eq!(run("a{"), "a");
    }

    #[test]
    fn stray_closing_brace_ends_expansion() {
        assert_eq!(run("a}b"), "a");
    }
}
