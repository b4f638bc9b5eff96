//! Aho-Corasick automaton core for multi-pattern substring search.
//!
//! This crate builds the search automaton: a trie ("goto" function) over a
//! fixed pattern set, with failure links and output links computed by a
//! breadth-first pass. Vertices live in a flat arena indexed by dense `u32`
//! ids, so the failure/output back-edges are plain indices into the same
//! table and the root can fail to itself without any ownership cycle.
//!
//! # Design
//!
//! Construction happens in three steps, all performed by
//! [`Automaton::build`]:
//! - compress the characters of the text and the patterns into a dense code
//!   space ([`Alphabet`]),
//! - insert every pattern into the trie, creating vertices on demand,
//! - compute failure and output links breadth-first, so each vertex only
//!   depends on strictly shallower vertices that are already finalized.
//!
//! The automaton is immutable once built. Scanning is driven from the
//! outside through [`Automaton::step`] and [`Automaton::outputs`].

use thiserror::Error;

mod alphabet;
mod automaton;

// Validation module for built automaton structures
pub mod validation;

pub use alphabet::{Alphabet, SENTINEL};
pub use automaton::{Automaton, Outputs, MAX_VERTICES, NO_VERTEX, ROOT};

// Re-export validation types for convenience
pub use validation::{validate_reachability, validate_structure, AutomatonStats, ValidationResult};

/// Error type for automaton construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The pattern set expands past the arena's addressable id range.
    #[error("too many trie vertices: {0} (limit {MAX_VERTICES})")]
    TooManyVertices(usize),
}
