//! Multisearch - incremental multi-pattern substring search
//!
//! Multisearch reports every starting offset at which each of a set of query
//! strings occurs in a text, overlapping occurrences included, and delivers
//! the results in bounded-size pages that a caller can consume
//! incrementally and resume later.
//!
//! # Quick start
//!
//! ```rust
//! use multisearch::Searcher;
//!
//! let searcher = Searcher::build("ababcababc", &["ab", "bc"])?;
//! let page = searcher.page_at(0, 100)?;
//!
//! assert_eq!(page.matches_for(0), &[0, 2, 5, 7]);
//! assert_eq!(page.matches_for(1), &[3, 8]);
//! assert!(page.is_exhausted());
//! # Ok::<(), multisearch::SearchError>(())
//! ```
//!
//! # Paging
//!
//! A page caps the number of matches collected across all patterns
//! combined. The returned page carries the offset scanning stopped at;
//! feeding it back produces the next page. Resuming through a
//! [`ScanCursor`] keeps the automaton state between pages, so resumption is
//! exact:
//!
//! ```rust
//! use multisearch::Searcher;
//!
//! let searcher = Searcher::build("aaaaa", &["aa"])?;
//! let mut cursor = searcher.cursor();
//! let mut offsets = Vec::new();
//! loop {
//!     let page = searcher.next_page(&mut cursor, 2)?;
//!     offsets.extend_from_slice(page.matches_for(0));
//!     if page.is_exhausted() {
//!         break;
//!     }
//! }
//! assert_eq!(offsets, vec![0, 1, 2, 3]);
//! # Ok::<(), multisearch::SearchError>(())
//! ```
//!
//! All offsets are character offsets (Unicode scalar values), not byte
//! offsets.
//!
//! # Concurrency
//!
//! The engine is single-threaded and synchronous: construction and scanning
//! run to completion within one call, hold no shared mutable state, and
//! perform no blocking I/O. A [`Searcher`] may be shared across worker
//! threads freely; two scans never interact. There is no mid-scan
//! cancellation - callers wanting that chunk their work through the page
//! mechanism and check between pages.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations

/// Error types for the engine
pub mod error;

mod line_index;
mod page;
mod scanner;
mod searcher;

pub use error::{Result, SearchError};
pub use line_index::LineIndex;
pub use page::SearchPage;
pub use searcher::{search_page, ScanCursor, Searcher};

// Re-export the automaton crate for callers that need construction details
// or structural validation.
pub use multisearch_ac as automaton;
