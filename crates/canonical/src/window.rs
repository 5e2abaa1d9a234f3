//! Context windows around a span of normalized text.
//!
//! Span offsets are byte offsets; radii are counted in characters. Span
//! edges that fall inside a multi-byte character are widened to the
//! nearest character boundary instead of panicking on the slice.

use serde::Serialize;

/// Text surrounding a span, split into the part before, the span itself,
/// and the part after.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    pub before: &'a str,
    pub snippet: &'a str,
    pub after: &'a str,
}

impl ContextWindow<'_> {
    /// `before + snippet + after` as one string.
    pub fn joined(&self) -> String {
        let mut out =
            String::with_capacity(self.before.len() + self.snippet.len() + self.after.len());
        out.push_str(self.before);
        out.push_str(self.snippet);
        out.push_str(self.after);
        out
    }
}

/// Slice `text` around `[start, end)`, taking up to `before` characters on
/// the left and `after` characters on the right, clamped at the text
/// boundaries.
pub fn context_window(
    text: &str,
    start: usize,
    end: usize,
    before: usize,
    after: usize,
) -> ContextWindow<'_> {
    let (lo, start, end, hi) = window_bounds(text, start, end, before, after);
    ContextWindow {
        before: &text[lo..start],
        snippet: &text[start..end],
        after: &text[end..hi],
    }
}

/// `radius` characters on each side of `[start, end)` plus the span itself,
/// clamped at the text boundaries.
pub fn surrounding(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let (lo, _, _, hi) = window_bounds(text, start, end, radius, radius);
    &text[lo..hi]
}

fn window_bounds(
    text: &str,
    start: usize,
    end: usize,
    before: usize,
    after: usize,
) -> (usize, usize, usize, usize) {
    let start = floor_char_boundary(text, start);
    let end = ceil_char_boundary(text, end.max(start));
    let lo = step_back(text, start, before);
    let hi = step_forward(text, end, after);
    (lo, start, end, hi)
}

/// Byte offset `chars` characters before the boundary `from`, or 0.
fn step_back(text: &str, from: usize, chars: usize) -> usize {
    if chars == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map_or(0, |(i, _)| i)
}

/// Byte offset `chars` characters after the boundary `from`, or the end.
fn step_forward(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| from + i)
}

/// Largest character boundary `<= index`, clamped to `text.len()`.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest character boundary `>= index`, clamped to `text.len()`.
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
