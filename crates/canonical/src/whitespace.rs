//! Offset-free whitespace collapse.
//!
//! [`collapse_whitespace`] applies the same rule as the `normalized` text of
//! a [`CanonicalMapping`](crate::CanonicalMapping) without building an index
//! map. Meant for short labels (section hints, headings) where offsets do
//! not matter.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  SECTION 05 12 00\t- STRUCTURAL  "), "SECTION 05 12 00 - STRUCTURAL");
//! assert_eq!(collapse_whitespace("   \n\t  "), "");
//! ```

/// Whitespace as the canonicalizer sees it: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F, which text extractors
/// emit as field and record breaks.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Collapses every whitespace run to one space and drops leading and
/// trailing runs. Unicode whitespace counts, NBSP included.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for ch in text.chars() {
        if is_space(ch) {
            gap = !out.is_empty();
            continue;
        }
        if gap {
            out.push(' ');
            gap = false;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_runs() {
        assert_eq!(collapse_whitespace("a \t\r\n b"), "a b");
        assert_eq!(collapse_whitespace("a\u{00A0}b"), "a b");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn information_separators_are_whitespace() {
        assert!(is_space('\u{1c}'));
        assert!(is_space('\u{1f}'));
        assert!(!is_space('\u{1b}'));
        assert_eq!(collapse_whitespace("PART\u{1e}2\u{1f} PRODUCTS"), "PART 2 PRODUCTS");
    }

    #[test]
    fn trailing_run_is_dropped() {
        assert_eq!(collapse_whitespace("PART 2 PRODUCTS \n"), "PART 2 PRODUCTS");
    }
}
