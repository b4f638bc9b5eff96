//! Built search instance and resumable scanning.

use multisearch_ac::{Automaton, ROOT};

use crate::error::{Result, SearchError};
use crate::line_index::LineIndex;
use crate::page::SearchPage;
use crate::scanner::scan_bounded;

/// A `(text, patterns)` pair compiled for scanning.
///
/// Construction builds the alphabet, the trie, and the failure/output links
/// once; the instance is immutable afterwards and every scan only reads it,
/// so it can be shared across threads behind a reference. Two searchers
/// never interact.
///
/// Pages can be produced two ways:
/// - [`page_at`](Self::page_at) resumes statelessly from an offset,
///   re-traversing a short window before it so matches straddling the
///   offset are still detected;
/// - [`next_page`](Self::next_page) resumes exactly from a [`ScanCursor`],
///   with no window and no re-reported matches.
#[derive(Debug)]
pub struct Searcher {
    text: Vec<char>,
    automaton: Automaton,
    pattern_lens: Vec<usize>,
    lines: LineIndex,
}

/// Exact resumption point for [`Searcher::next_page`]: the offset the next
/// page starts at plus the automaton state reached so far.
///
/// Carrying the state alongside the offset is what makes resumption exact.
/// The cursor is a plain value owned by the caller between pages; it holds
/// no reference into the searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    offset: usize,
    state: u32,
}

impl ScanCursor {
    /// Text offset the next page will start scanning at.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Searcher {
    /// Compile `patterns` against `text`.
    ///
    /// Duplicate patterns are allowed and each occupies its own index.
    /// Zero-length patterns are skipped: they keep their index and always
    /// report an empty match list.
    pub fn build<S: AsRef<str>>(text: &str, patterns: &[S]) -> Result<Self> {
        let automaton = Automaton::build(text, patterns)?;
        let pattern_lens = patterns.iter().map(|p| p.as_ref().chars().count()).collect();
        let text: Vec<char> = text.chars().collect();
        let lines = LineIndex::new(&text);
        Ok(Self {
            text,
            automaton,
            pattern_lens,
            lines,
        })
    }

    /// Text length in characters.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Number of patterns the searcher was built over.
    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// The compiled automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// One page of matches, resuming statelessly at `offset`.
    ///
    /// Offsets past the end of the text clamp to it and yield an empty,
    /// exhausted page. Otherwise the scan starts `longest pattern - 1`
    /// characters before the requested offset, so the automaton is back in
    /// the right state by the time it passes it; matches that begin before
    /// `offset` can be re-reported as a byproduct, and callers merging pages
    /// deduplicate by offset.
    pub fn page_at(&self, offset: usize, page_size: usize) -> Result<SearchPage> {
        if page_size == 0 {
            return Err(SearchError::InvalidPageSize);
        }
        let clamped = offset.min(self.text.len());
        if self.pattern_lens.is_empty() {
            return Ok(SearchPage::new(
                Vec::new(),
                clamped,
                clamped == self.text.len(),
            ));
        }
        if clamped == self.text.len() {
            return Ok(SearchPage::new(
                vec![Vec::new(); self.pattern_lens.len()],
                clamped,
                true,
            ));
        }

        let back = self.automaton.max_pattern_len().saturating_sub(1);
        let mut cursor = ScanCursor {
            offset: clamped.saturating_sub(back),
            state: ROOT,
        };
        self.run(&mut cursor, page_size)
    }

    /// Cursor positioned at the start of the text.
    pub fn cursor(&self) -> ScanCursor {
        ScanCursor {
            offset: 0,
            state: ROOT,
        }
    }

    /// One page of matches, resuming exactly at `cursor` and advancing it to
    /// where the next page should continue.
    pub fn next_page(&self, cursor: &mut ScanCursor, page_size: usize) -> Result<SearchPage> {
        if page_size == 0 {
            return Err(SearchError::InvalidPageSize);
        }
        if self.pattern_lens.is_empty() {
            cursor.offset = cursor.offset.min(self.text.len());
            return Ok(SearchPage::new(
                Vec::new(),
                cursor.offset,
                cursor.offset == self.text.len(),
            ));
        }
        self.run(cursor, page_size)
    }

    fn run(&self, cursor: &mut ScanCursor, quota: usize) -> Result<SearchPage> {
        let mut matches = vec![Vec::new(); self.pattern_lens.len()];
        let outcome = scan_bounded(
            &self.automaton,
            &self.pattern_lens,
            &self.text,
            cursor.state,
            cursor.offset,
            quota,
            &mut matches,
        );
        cursor.offset = outcome.next_offset;
        cursor.state = outcome.end_state;

        let exhausted = outcome.next_offset == self.text.len();
        tracing::trace!(
            matched = outcome.matched,
            next_offset = outcome.next_offset,
            exhausted,
            "page scanned"
        );
        Ok(SearchPage::new(matches, outcome.next_offset, exhausted))
    }

    /// 0-based line and column of a character offset, or `None` when the
    /// offset lies outside the text.
    pub fn line_col(&self, offset: usize) -> Option<(usize, usize)> {
        self.lines.line_col(offset)
    }

    /// Content of a 0-based line, without its terminating newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.lines
            .line_span(line)
            .map(|span| self.text[span].iter().collect())
    }

    /// Number of lines in the text.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }
}

/// Build-and-scan entry point: compile `patterns` against `text`, produce
/// one page starting at `offset`, and discard the instance.
///
/// Equivalent to `Searcher::build(text, patterns)?.page_at(offset,
/// page_size)`. Callers issuing repeated page requests over the same inputs
/// should keep a [`Searcher`] instead and resume through a
/// [`ScanCursor`], which skips both the rebuild and the back-scan window.
pub fn search_page<S: AsRef<str>>(
    text: &str,
    patterns: &[S],
    offset: usize,
    page_size: usize,
) -> Result<SearchPage> {
    Searcher::build(text, patterns)?.page_at(offset, page_size)
}
