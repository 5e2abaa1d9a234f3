//! Line-start markers of the outline hierarchy.

use once_cell::sync::Lazy;
use regex::Regex;

// "1.05", "12.34", "01.10.20"
static ARTICLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<article>\d{1,2}\.\d{2,}(?:\.\d{2,})?)").expect("article marker regex")
});

// "A.", "B)", "C-" followed by whitespace or end of line
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<paragraph>[A-Z])(?:[\.\)\-])(?:\s|$)").expect("paragraph marker regex")
});

static SUBPARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<subparagraph>\d+)(?:[\.\)\-])(?:\s|$)").expect("subparagraph marker regex")
});

static ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<item>[a-z])(?:[\.\)\-])(?:\s|$)").expect("item marker regex")
});

/// A structural marker found at the start of a left-trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Article(&'a str),
    Paragraph(&'a str),
    Subparagraph(&'a str),
    Item(&'a str),
}

impl<'a> Marker<'a> {
    /// Classify a left-trimmed line, trying article, paragraph,
    /// subparagraph and item in that order.
    pub fn classify(line: &'a str) -> Option<Self> {
        if let Some(m) = capture(&ARTICLE, line, "article") {
            return Some(Marker::Article(m));
        }
        if let Some(m) = capture(&PARAGRAPH, line, "paragraph") {
            return Some(Marker::Paragraph(m));
        }
        if let Some(m) = capture(&SUBPARAGRAPH, line, "subparagraph") {
            return Some(Marker::Subparagraph(m));
        }
        capture(&ITEM, line, "item").map(Marker::Item)
    }

    /// Hierarchy level, 1 (article) through 4 (item).
    pub fn depth(&self) -> u8 {
        match self {
            Marker::Article(_) => 1,
            Marker::Paragraph(_) => 2,
            Marker::Subparagraph(_) => 3,
            Marker::Item(_) => 4,
        }
    }
}

fn capture<'a>(re: &Regex, line: &'a str, group: &str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.name(group))
        .map(|m| m.as_str())
}
