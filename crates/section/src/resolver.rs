use tracing::trace;

use crate::entry::SectionEntry;
use crate::patterns::Marker;

/// Carried-over hierarchy shows at most article and paragraph until the
/// new page establishes deeper structure itself.
pub const SEED_DEPTH_CAP: u8 = 2;

/// Outline hierarchy of one page, answerable by offset.
///
/// Built by scanning the page's canonical source line by line. Every line
/// that opens an article, paragraph, subparagraph or item records a
/// [`SectionEntry`] at the offset of its first non-whitespace character.
/// Sub-levels only count once an article is in effect.
///
/// `opened_depth` is a running maximum over the page: after an item has
/// been seen, later entries keep depth 4 even when a new article clears
/// the levels below it.
#[derive(Debug, Clone)]
pub struct SectionResolver {
    entries: Vec<SectionEntry>,
    tail: Option<SectionEntry>,
    text_len: usize,
}

impl SectionResolver {
    /// Scan `text`, starting from the previous page's tail state if given.
    ///
    /// A seed with any level set becomes the entry at offset 0 with its
    /// depth capped at [`SEED_DEPTH_CAP`].
    pub fn new(text: &str, seed: Option<&SectionEntry>) -> Self {
        let mut state = seed.cloned().unwrap_or_default();
        let mut opened_depth = 0u8;
        let mut entries = Vec::new();

        if state.has_any() {
            opened_depth = state.state_depth().min(SEED_DEPTH_CAP);
            entries.push(snapshot(&state, 0, opened_depth));
        }

        let mut cursor = 0usize;
        for line in text.split('\n') {
            let line_start = cursor;
            cursor += line.len() + 1;

            let stripped = line.trim_start_matches(canonical::is_space);
            if stripped.is_empty() {
                continue;
            }
            let Some(marker) = Marker::classify(stripped) else {
                continue;
            };
            let Some(depth) = apply(&mut state, marker) else {
                continue;
            };

            opened_depth = opened_depth.max(depth);
            let position = line_start + (line.len() - stripped.len());
            entries.push(snapshot(&state, position, opened_depth));
        }

        let tail = state.has_any().then(|| {
            let depth = opened_depth.max(state.state_depth());
            snapshot(&state, text.len(), depth)
        });

        trace!(
            entries = entries.len(),
            seeded = seed.is_some_and(SectionEntry::has_any),
            "section_scan_complete"
        );

        Self {
            entries,
            tail,
            text_len: text.len(),
        }
    }

    /// Section code in effect at `source_index`, e.g. `1.05-A-1-a`.
    ///
    /// `None` before the first entry, past the end of the page text, or
    /// when the entry in effect has nothing to show.
    pub fn resolve(&self, source_index: usize) -> Option<String> {
        self.entry_at(source_index).and_then(SectionEntry::code)
    }

    /// The last entry whose index is `<= source_index`.
    pub fn entry_at(&self, source_index: usize) -> Option<&SectionEntry> {
        if source_index > self.text_len {
            return None;
        }
        let pos = self.entries.partition_point(|e| e.index <= source_index);
        pos.checked_sub(1).map(|i| &self.entries[i])
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Hierarchy at end of page, offset = text length. `None` when no level
    /// is set; otherwise this seeds the next page.
    pub fn tail_state(&self) -> Option<&SectionEntry> {
        self.tail.as_ref()
    }

    pub fn into_tail_state(self) -> Option<SectionEntry> {
        self.tail
    }
}

/// Apply a marker to the running state, returning the depth it opened.
/// Sub-levels are ignored until an article is set.
fn apply(state: &mut SectionEntry, marker: Marker<'_>) -> Option<u8> {
    let has_article = state.article.as_deref().is_some_and(|a| !a.is_empty());
    match marker {
        Marker::Article(article) => {
            state.article = Some(article.to_string());
            state.paragraph = None;
            state.subparagraph = None;
            state.item = None;
        }
        Marker::Paragraph(paragraph) if has_article => {
            state.paragraph = Some(paragraph.to_string());
            state.subparagraph = None;
            state.item = None;
        }
        Marker::Subparagraph(sub) if has_article => {
            state.subparagraph = Some(sub.to_string());
            state.item = None;
        }
        Marker::Item(item) if has_article => {
            state.item = Some(item.to_string());
        }
        _ => return None,
    }
    Some(marker.depth())
}

fn snapshot(state: &SectionEntry, index: usize, opened_depth: u8) -> SectionEntry {
    SectionEntry {
        index,
        opened_depth,
        ..state.clone()
    }
}
