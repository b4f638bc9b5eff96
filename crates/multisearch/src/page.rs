//! Per-pattern match lists plus the resumption offset for one page.

/// Result bundle for one bounded scan.
///
/// `matches()` is index-aligned with the pattern list the searcher was built
/// over: one list per pattern, each holding the ascending character offsets
/// at which that pattern starts. A pattern with no occurrences in the page
/// keeps an empty list. Purely a return value; holds no automaton state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    matches: Vec<Vec<usize>>,
    next_offset: usize,
    exhausted: bool,
}

impl SearchPage {
    pub(crate) fn new(matches: Vec<Vec<usize>>, next_offset: usize, exhausted: bool) -> Self {
        Self {
            matches,
            next_offset,
            exhausted,
        }
    }

    /// Per-pattern match offset lists, index-aligned with the pattern list.
    pub fn matches(&self) -> &[Vec<usize>] {
        &self.matches
    }

    /// Match offsets for one pattern index; empty when the index is out of
    /// range.
    pub fn matches_for(&self, pattern: usize) -> &[usize] {
        self.matches.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Offset the next page's scan should continue from.
    pub fn next_offset(&self) -> usize {
        self.next_offset
    }

    /// True when the scan consumed the text to its end, i.e. the resumption
    /// offset equals the text length and no further page can add matches.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total number of matches across all patterns.
    pub fn match_count(&self) -> usize {
        self.matches.iter().map(Vec::len).sum()
    }

    /// Consume the page, keeping only the match lists.
    pub fn into_matches(self) -> Vec<Vec<usize>> {
        self.matches
    }
}
