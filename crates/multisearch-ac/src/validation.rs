//! Structural validation for built automata.
//!
//! Checks the vertex arena invariants: link ranges, failure-link depth,
//! output-link terminality, transition back-references, pattern id ranges,
//! and graph reachability.

use crate::automaton::{Automaton, NO_VERTEX, ROOT};

/// Validation result for an automaton structure.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Critical errors that make the structure unusable
    pub errors: Vec<String>,
    /// Warnings about potential issues (non-fatal)
    pub warnings: Vec<String>,
    /// Statistics gathered during validation
    pub stats: AutomatonStats,
}

/// Statistics gathered during automaton validation.
#[derive(Debug, Clone, Default)]
pub struct AutomatonStats {
    /// Number of vertices, root included
    pub vertex_count: u32,
    /// Number of terminal vertices
    pub terminal_count: u32,
    /// Number of orphaned vertices (unreachable from root)
    pub orphaned_count: u32,
}

impl ValidationResult {
    fn new(vertex_count: usize) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: AutomatonStats {
                vertex_count: vertex_count as u32,
                terminal_count: 0,
                orphaned_count: 0,
            },
        }
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the arena invariants of a built automaton.
///
/// Validates:
/// - failure links in range and strictly shallower than their vertex
/// - no self-referencing failure links outside the root
/// - output links pointing at root or at a terminal vertex
/// - transition targets in range with consistent parent back-references
/// - pattern ids below the automaton's pattern count
pub fn validate_structure(automaton: &Automaton) -> ValidationResult {
    let vertex_count = automaton.vertex_count();
    let mut result = ValidationResult::new(vertex_count);

    // Children are pushed after their parents during insertion, so a single
    // ascending pass can resolve every depth.
    let mut depths = vec![0usize; vertex_count];
    for id in 1..vertex_count {
        let parent = automaton.vertex(id as u32).parent;
        if parent == NO_VERTEX || parent as usize >= id {
            result
                .errors
                .push(format!("vertex {} has invalid parent: {}", id, parent));
            continue;
        }
        depths[id] = depths[parent as usize] + 1;
    }

    for id in 0..vertex_count {
        let vertex = automaton.vertex(id as u32);

        if vertex.terminal {
            result.stats.terminal_count += 1;
            if vertex.pattern_ids.is_empty() {
                result
                    .errors
                    .push(format!("vertex {} is terminal but lists no patterns", id));
            }
        } else if !vertex.pattern_ids.is_empty() {
            result.errors.push(format!(
                "vertex {} lists {} patterns but is not terminal",
                id,
                vertex.pattern_ids.len()
            ));
        }

        // Failure link
        if vertex.failure as usize >= vertex_count {
            result.errors.push(format!(
                "vertex {} has out-of-range failure link: {}",
                id, vertex.failure
            ));
        } else if id != ROOT as usize {
            if vertex.failure == id as u32 {
                result
                    .errors
                    .push(format!("vertex {} has self-referencing failure link", id));
            } else if depths[vertex.failure as usize] >= depths[id] {
                result.errors.push(format!(
                    "vertex {} failure link {} is not strictly shallower",
                    id, vertex.failure
                ));
            }
        }

        // Output link
        if vertex.output as usize >= vertex_count {
            result.errors.push(format!(
                "vertex {} has out-of-range output link: {}",
                id, vertex.output
            ));
        } else if vertex.output != ROOT && !automaton.vertex(vertex.output).terminal {
            result.errors.push(format!(
                "vertex {} output link {} is not terminal",
                id, vertex.output
            ));
        }

        // Transitions
        for (code, &child) in vertex.edges.iter().enumerate() {
            if child == NO_VERTEX {
                continue;
            }
            if child as usize >= vertex_count {
                result.errors.push(format!(
                    "vertex {} edge [{}] has out-of-range target: {}",
                    id, code, child
                ));
                continue;
            }
            let target = automaton.vertex(child);
            if target.parent != id as u32 || target.parent_code != code as u32 {
                result.errors.push(format!(
                    "vertex {} edge [{}] target {} has inconsistent back-reference",
                    id, code, child
                ));
            }
        }

        // Pattern ids
        for &pattern in &vertex.pattern_ids {
            if pattern as usize >= automaton.pattern_count() {
                result.errors.push(format!(
                    "vertex {} references invalid pattern id: {} (max={})",
                    id,
                    pattern,
                    automaton.pattern_count()
                ));
            }
        }
    }

    result
}

/// Validate automaton reachability (no orphan vertices).
///
/// Performs a BFS traversal over the transition edges from the root. An
/// unreachable vertex indicates a construction bug.
pub fn validate_reachability(automaton: &Automaton) -> ValidationResult {
    let vertex_count = automaton.vertex_count();
    let mut result = ValidationResult::new(vertex_count);

    let mut reachable = vec![false; vertex_count];
    let mut queue = vec![ROOT as usize];
    reachable[ROOT as usize] = true;

    while let Some(id) = queue.pop() {
        for &child in &automaton.vertex(id as u32).edges {
            if child == NO_VERTEX || child as usize >= vertex_count {
                continue;
            }
            if !reachable[child as usize] {
                reachable[child as usize] = true;
                queue.push(child as usize);
            }
        }
    }

    let orphaned_count = reachable.iter().filter(|&&r| !r).count();
    result.stats.orphaned_count = orphaned_count as u32;

    if orphaned_count > 0 {
        result.warnings.push(format!(
            "found {} orphaned vertices (not reachable from root)",
            orphaned_count
        ));
    }

    result
}
