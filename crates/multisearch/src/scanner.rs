//! Bounded automaton drive.
//!
//! Consumes text characters one at a time, collecting matches until a quota
//! is met, and reports where scanning stopped so a later call can continue.

use multisearch_ac::{Automaton, SENTINEL};

/// Where a bounded scan ended.
pub(crate) struct ScanOutcome {
    /// One past the last consumed character; the text length when the quota
    /// was never reached.
    pub(crate) next_offset: usize,
    /// Automaton state after the last consumed character.
    pub(crate) end_state: u32,
    /// Matches recorded by this scan.
    pub(crate) matched: usize,
}

/// Drive `automaton` over `text[start_offset..]` from `start_state`,
/// appending match start offsets into `matches` until at least `quota` have
/// been collected or the text ends.
///
/// All matches ending at a given position are recorded before the position
/// is given up, so a page can exceed `quota` by the number of extra patterns
/// ending at its final position. Per pattern, recorded offsets strictly
/// increase.
pub(crate) fn scan_bounded(
    automaton: &Automaton,
    pattern_lens: &[usize],
    text: &[char],
    start_state: u32,
    start_offset: usize,
    quota: usize,
    matches: &mut [Vec<usize>],
) -> ScanOutcome {
    let mut state = start_state;
    let mut offset = start_offset;
    let mut matched = 0usize;

    while offset < text.len() && matched < quota {
        let code = match automaton.alphabet().code(text[offset]) {
            Some(code) => code,
            None => {
                // The alphabet covers every character of the text the
                // automaton was built against; the sentinel labels no edge,
                // so a stray character just resets matching to the root.
                debug_assert!(false, "character {:?} missing from alphabet", text[offset]);
                SENTINEL
            }
        };
        state = automaton.step(state, code);

        for hit in automaton.outputs(state) {
            for &pattern in automaton.pattern_ids_of(hit) {
                let len = pattern_lens[pattern as usize];
                matches[pattern as usize].push(offset + 1 - len);
                matched += 1;
            }
        }
        offset += 1;
    }

    ScanOutcome {
        next_offset: offset,
        end_state: state,
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multisearch_ac::ROOT;

    fn automaton(text: &str, patterns: &[&str]) -> (Automaton, Vec<usize>) {
        let lens = patterns.iter().map(|p| p.chars().count()).collect();
        (Automaton::build(text, patterns).unwrap(), lens)
    }

    #[test]
    fn quota_stops_after_the_current_position() {
        let text: Vec<char> = "aaaa".chars().collect();
        let (automaton, lens) = automaton("aaaa", &["a"]);

        let mut matches = vec![Vec::new()];
        let outcome = scan_bounded(&automaton, &lens, &text, ROOT, 0, 2, &mut matches);

        assert_eq!(matches[0], vec![0, 1]);
        assert_eq!(outcome.next_offset, 2);
        assert_eq!(outcome.matched, 2);
    }

    #[test]
    fn matches_at_one_position_are_reported_together() {
        // "ab" and "b" both end at offset 1; a quota of 1 must still report
        // both before the scan stops.
        let text: Vec<char> = "abab".chars().collect();
        let (automaton, lens) = automaton("abab", &["ab", "b"]);

        let mut matches = vec![Vec::new(), Vec::new()];
        let outcome = scan_bounded(&automaton, &lens, &text, ROOT, 0, 1, &mut matches);

        assert_eq!(matches[0], vec![0]);
        assert_eq!(matches[1], vec![1]);
        assert_eq!(outcome.next_offset, 2);
        assert_eq!(outcome.matched, 2);
    }

    #[test]
    fn end_state_resumes_straddling_matches() {
        let text: Vec<char> = "abab".chars().collect();
        let (automaton, lens) = automaton("abab", &["bab"]);

        let mut matches = vec![Vec::new()];
        let first = scan_bounded(&automaton, &lens, &text, ROOT, 0, usize::MAX, &mut matches);
        assert_eq!(matches[0], vec![1]);
        assert_eq!(first.next_offset, 4);

        // Split the same scan at offset 2 and resume with the saved state:
        // the match straddling the split is still found.
        let mut split = vec![Vec::new()];
        let head = scan_bounded(&automaton, &lens, &text[..2], ROOT, 0, usize::MAX, &mut split);
        let tail = scan_bounded(
            &automaton,
            &lens,
            &text,
            head.end_state,
            head.next_offset,
            usize::MAX,
            &mut split,
        );
        assert_eq!(split[0], vec![1]);
        assert_eq!(tail.next_offset, 4);
    }
}
