//! Glob patterns over locators.
//!
//! `*` and `?` stay within one `/`-separated segment, `**` spans any
//! number of segments, and `**/` may also match nothing at all.

use regex::Regex;

use crate::StoreError;

/// Compile a glob into an anchored regular expression.
pub fn glob_to_regex(pattern: &str) -> Result<Regex, StoreError> {
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    re.push_str("(?:.*/)?");
                } else {
                    re.push_str(".*");
                }
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            other => {
                let mut buf = [0u8; 4];
                re.push_str(&regex::escape(other.encode_utf8(&mut buf)));
            }
        }
    }

    re.push('$');
    Regex::new(&re).map_err(|e| StoreError::InvalidPattern(format!("{pattern}: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
