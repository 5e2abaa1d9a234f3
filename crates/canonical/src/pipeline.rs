use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::mapping::CanonicalMapping;
use crate::whitespace::is_space;

/// Main entry point. Turns raw page text into a [`CanonicalMapping`].
///
/// Never fails: empty or whitespace-only input yields an empty mapping.
/// The configuration is assumed to have been validated at load time.
pub fn canonicalize(input: &str, cfg: &CanonicalizeConfig) -> CanonicalMapping {
    let canonical_source = canonical_source(input, cfg);

    let mut normalized = String::with_capacity(canonical_source.len());
    let mut index_map: Vec<usize> = Vec::with_capacity(canonical_source.len());
    // Source offset of the most recent whitespace seen since the last
    // emitted character. Only set once something has been emitted, so the
    // output never starts with a space and trailing runs are dropped.
    let mut pending_space: Option<usize> = None;

    process_chars(
        &canonical_source,
        &mut normalized,
        &mut index_map,
        &mut pending_space,
    );

    debug_assert_eq!(normalized.len(), index_map.len());

    CanonicalMapping {
        normalized,
        index_map,
        canonical_source,
    }
}

/// Unicode normalization plus newline canonicalization, without touching
/// any other whitespace.
pub fn canonical_source(input: &str, cfg: &CanonicalizeConfig) -> String {
    // Use Cow to avoid an extra allocation when normalization is disabled.
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    if text.contains('\r') {
        text.replace('\r', "\n")
    } else {
        text.into_owned()
    }
}

/// Collapses whitespace while recording where every emitted byte came from.
fn process_chars(
    source: &str,
    normalized: &mut String,
    index_map: &mut Vec<usize>,
    pending_space: &mut Option<usize>,
) {
    for (offset, ch) in source.char_indices() {
        if is_space(ch) {
            if !normalized.is_empty() {
                *pending_space = Some(offset);
            }
        } else {
            append_char(ch, offset, normalized, index_map, pending_space);
        }
    }
}

/// Appends a non-whitespace character, flushing a pending space first.
fn append_char(
    ch: char,
    offset: usize,
    normalized: &mut String,
    index_map: &mut Vec<usize>,
    pending_space: &mut Option<usize>,
) {
    // `take()` clears the pending space so a run collapses to one.
    if let Some(space_offset) = pending_space.take() {
        normalized.push(' ');
        index_map.push(space_offset);
    }

    normalized.push(ch);
    index_map.extend(std::iter::repeat(offset).take(ch.len_utf8()));
}
