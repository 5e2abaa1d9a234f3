use serde::{Deserialize, Serialize};

/// Snapshot of the outline hierarchy, effective from `index` onward.
///
/// `index` is a byte offset into the page's canonical source text. A
/// resolver's entries are ordered by non-decreasing `index`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionEntry {
    pub index: usize,
    pub article: Option<String>,
    pub paragraph: Option<String>,
    pub subparagraph: Option<String>,
    pub item: Option<String>,
    /// Deepest level shown when formatting, 1 (article) to 4 (item).
    pub opened_depth: u8,
}

impl SectionEntry {
    /// The four levels in order, article first.
    pub fn parts(&self) -> [Option<&str>; 4] {
        [
            self.article.as_deref(),
            self.paragraph.as_deref(),
            self.subparagraph.as_deref(),
            self.item.as_deref(),
        ]
    }

    /// True if any level is set.
    pub fn has_any(&self) -> bool {
        self.parts().iter().any(|p| is_set(*p))
    }

    /// Level of the most specific field that is set, 0 when none is.
    pub fn state_depth(&self) -> u8 {
        self.parts()
            .iter()
            .rposition(|p| is_set(*p))
            .map_or(0, |i| i as u8 + 1)
    }

    /// Section code such as `1.05-A-1-a`.
    ///
    /// Keeps the first `opened_depth` levels by position (0 keeps all of
    /// them), drops unset ones, and joins the rest with `-`. `None` when
    /// nothing is left.
    pub fn code(&self) -> Option<String> {
        let parts = self.parts();
        let depth = match self.opened_depth as usize {
            0 => parts.len(),
            d => d.min(parts.len()),
        };
        let kept: Vec<&str> = parts[..depth]
            .iter()
            .flatten()
            .copied()
            .filter(|p| !p.is_empty())
            .collect();
        if kept.is_empty() {
            None
        } else {
            Some(kept.join("-"))
        }
    }
}

fn is_set(part: Option<&str>) -> bool {
    part.is_some_and(|p| !p.is_empty())
}
