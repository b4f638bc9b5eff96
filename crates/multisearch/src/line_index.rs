//! Line table over the scanned text.
//!
//! Used to present match offsets as line/column pairs. Offsets are character
//! offsets, like everything else in this crate; lines are 0-based and split
//! on `'\n'`, with the newline belonging to the line it ends.

use std::ops::Range;

/// Line-start offsets built in one pass over the text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Start offset of each line; always holds at least the entry for 0.
    starts: Vec<usize>,
    text_len: usize,
}

impl LineIndex {
    /// Build the line table.
    pub fn new(text: &[char]) -> Self {
        let mut starts = vec![0];
        for (i, &ch) in text.iter().enumerate() {
            if ch == '\n' {
                starts.push(i + 1);
            }
        }
        Self {
            starts,
            text_len: text.len(),
        }
    }

    /// Number of lines. An empty text has one empty line; a text ending in
    /// `'\n'` has an empty final line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 0-based `(line, column)` of a character offset, or `None` when the
    /// offset lies outside the text.
    pub fn line_col(&self, offset: usize) -> Option<(usize, usize)> {
        if offset >= self.text_len {
            return None;
        }
        let line = match self.starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        Some((line, offset - self.starts[line]))
    }

    /// Character range of `line`'s content, excluding the terminating
    /// newline.
    pub fn line_span(&self, line: usize) -> Option<Range<usize>> {
        let start = *self.starts.get(line)?;
        let end = match self.starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.text_len,
        };
        Some(start..end)
    }
}
