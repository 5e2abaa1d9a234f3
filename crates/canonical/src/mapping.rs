//! The canonical representation of one page of text.
//!
//! A [`CanonicalMapping`] holds two views of the same page:
//!
//! ```text
//! CanonicalMapping
//! ├── canonical_source: String   # NFKC, `\r` → `\n`, whitespace untouched
//! ├── normalized: String         # whitespace collapsed to single spaces, trimmed
//! └── index_map: Vec<usize>      # normalized byte → canonical_source byte
//! ```
//!
//! Keyword search runs over `normalized`; structural analysis (line starts,
//! indentation) runs over `canonical_source`. `index_map` ties the two
//! together so a match found in the former can be located in the latter.
//!
//! # Offsets
//!
//! All offsets are UTF-8 byte offsets. `index_map` has one entry per byte of
//! `normalized`; every byte of a multi-byte character maps to the byte
//! offset where that character starts in `canonical_source`, so a mapped
//! offset is always a character boundary.
//!
//! # Example
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//!
//! let mapping = canonicalize("1.05  SUBMITTALS\n", &CanonicalizeConfig::default());
//! assert_eq!(mapping.normalized, "1.05 SUBMITTALS");
//! assert_eq!(mapping.index_map.len(), mapping.normalized.len());
//! // The collapsed space maps to the last whitespace of the run.
//! assert_eq!(mapping.source_index(4), Some(5));
//! assert_eq!(mapping.source_index(5), Some(6));
//! ```

use serde::{Deserialize, Serialize};

/// Normalized page text plus the offset map back into its canonical source.
///
/// Immutable after construction. Invariants:
///
/// - `normalized.len() == index_map.len()`
/// - `index_map` is non-decreasing and every entry is a valid character
///   boundary of `canonical_source`
/// - `normalized` has no leading, trailing, or doubled spaces
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CanonicalMapping {
    /// Whitespace-collapsed, trimmed text. This is what keyword search sees.
    pub normalized: String,
    /// For each byte of `normalized`, the byte offset in `canonical_source`
    /// of the character that produced it.
    pub index_map: Vec<usize>,
    /// Unicode-normalized text with carriage returns turned into line feeds,
    /// otherwise untouched.
    pub canonical_source: String,
}

impl CanonicalMapping {
    /// Length of the normalized text in bytes.
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// True when the page produced no searchable text.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Map a byte offset in `normalized` to the corresponding byte offset in
    /// `canonical_source`. Returns `None` past the end of the text.
    pub fn source_index(&self, normalized_index: usize) -> Option<usize> {
        self.index_map.get(normalized_index).copied()
    }

    /// Map a half-open span of `normalized` onto `canonical_source`.
    ///
    /// The returned span starts at the source character behind `start` and
    /// ends just past the source character behind `end - 1`. Empty or
    /// out-of-range spans return `None`.
    pub fn source_span(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        if start >= end || end > self.index_map.len() {
            return None;
        }
        let first = self.index_map[start];
        let last = self.index_map[end - 1];
        let width = self.canonical_source[last..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        Some((first, last + width))
    }
}
