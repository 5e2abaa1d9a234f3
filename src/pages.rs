//! Plain-text page input.
//!
//! Text extractors separate pages with a form feed. Each page also gets a
//! best-effort `section_hint`: a short heading-like line near the top of the
//! page, carried forward from earlier pages when a page has none.

use canonical::{collapse_whitespace, is_space};

use crate::record::PageText;

/// Page separator emitted by `pdftotext` and similar tools.
pub const PAGE_BREAK: char = '\x0c';

/// Only the first few non-blank lines of a page are considered for a hint.
const HINT_SCAN_LINES: usize = 8;
const HINT_MAX_CHARS: usize = 120;
const PART_MARKERS: [&str; 3] = ["PART 1", "PART 2", "PART 3"];

/// Split extracted text into 1-based pages with section hints.
///
/// A final form feed does not start an extra empty page.
pub fn split_pages(text: &str) -> Vec<PageText> {
    let mut parts: Vec<&str> = text.split(PAGE_BREAK).collect();
    if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    let mut pages: Vec<PageText> = parts
        .into_iter()
        .zip(1u32..)
        .map(|(body, page)| PageText::new(page, body))
        .collect();
    assign_section_hints(&mut pages);
    pages
}

/// Fill in `section_hint` for pages that have none, carrying the last hint
/// seen forward. Hints already set are kept and also carried.
pub fn assign_section_hints(pages: &mut [PageText]) {
    let mut last: Option<String> = None;
    for page in pages {
        let provided = page
            .section_hint
            .as_deref()
            .filter(|hint| !hint.is_empty())
            .map(str::to_string);
        if provided.is_some() {
            last = provided;
            continue;
        }
        if let Some(hint) = section_hint(&page.text) {
            last = Some(hint);
        }
        page.section_hint = last.clone();
    }
}

/// Heading-like line among the first non-blank lines of `text`, if any.
pub fn section_hint(text: &str) -> Option<String> {
    // Blank pieces between `\r\n` are dropped by the filter below.
    text.split(is_line_break)
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .take(HINT_SCAN_LINES)
        .find(|line| is_heading_like(line))
        .map(collapse_whitespace)
}

/// Line boundaries recognized by extractors, lone `\r` and U+2028 included.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_heading_like(line: &str) -> bool {
    line.chars().count() < HINT_MAX_CHARS
        && (PART_MARKERS.iter().any(|m| line.contains(m)) || line.chars().any(char::is_numeric))
}
