// End-to-end match scenarios over small texts.

use multisearch::{search_page, Searcher};

/// Helper for a single unbounded scan from offset 0.
fn full_scan(text: &str, patterns: &[&str]) -> Vec<Vec<usize>> {
    search_page(text, patterns, 0, usize::MAX)
        .expect("scan failed")
        .into_matches()
}

#[test]
fn finds_overlapping_matches() {
    let matches = full_scan("ababcababc", &["ab", "bc"]);
    assert_eq!(matches[0], vec![0, 2, 5, 7]);
    assert_eq!(matches[1], vec![3, 8]);
}

#[test]
fn reports_every_overlap_of_nested_patterns() {
    let matches = full_scan("aaaaa", &["a", "aa", "aaa"]);
    assert_eq!(matches[0], vec![0, 1, 2, 3, 4]);
    assert_eq!(matches[1], vec![0, 1, 2, 3]);
    assert_eq!(matches[2], vec![0, 1, 2]);
}

#[test]
fn empty_text_yields_empty_lists() {
    let page = search_page("", &["abc", "def"], 0, usize::MAX).unwrap();
    assert_eq!(page.matches().len(), 2);
    assert!(page.matches_for(0).is_empty());
    assert!(page.matches_for(1).is_empty());
    assert_eq!(page.next_offset(), 0);
    assert!(page.is_exhausted());
}

#[test]
fn empty_pattern_list_yields_zero_length_result() {
    let patterns: [&str; 0] = [];
    let page = search_page("abcdef", &patterns, 0, usize::MAX).unwrap();
    assert!(page.matches().is_empty());
    assert_eq!(page.next_offset(), 0);
}

#[test]
fn empty_pattern_list_keeps_the_requested_offset() {
    let patterns: [&str; 0] = [];
    let page = search_page("abcdef", &patterns, 3, usize::MAX).unwrap();
    assert!(page.matches().is_empty());
    assert_eq!(page.next_offset(), 3);

    // Out-of-range offsets still clamp.
    let page = search_page("abcdef", &patterns, 100, usize::MAX).unwrap();
    assert_eq!(page.next_offset(), 6);
}

#[test]
fn finds_repeated_occurrences() {
    let matches = full_scan("abracadabra", &["abra"]);
    assert_eq!(matches[0], vec![0, 7]);
}

#[test]
fn missing_patterns_report_nothing() {
    let matches = full_scan("abcdef", &["xyz", "abc"]);
    assert!(matches[0].is_empty());
    assert_eq!(matches[1], vec![0]);
}

#[test]
fn alternating_patterns_interleave() {
    let matches = full_scan("ababababab", &["ab", "ba"]);
    assert_eq!(matches[0], vec![0, 2, 4, 6, 8]);
    assert_eq!(matches[1], vec![1, 3, 5, 7]);
}

#[test]
fn duplicate_patterns_each_report_their_own_list() {
    let matches = full_scan("ababab", &["ab", "ab"]);
    assert_eq!(matches[0], vec![0, 2, 4]);
    assert_eq!(matches[1], vec![0, 2, 4]);
}

#[test]
fn zero_length_patterns_are_skipped() {
    let matches = full_scan("abab", &["", "ab"]);
    assert!(matches[0].is_empty());
    assert_eq!(matches[1], vec![0, 2]);
}

#[test]
fn pattern_absent_from_text_alphabet_still_compresses() {
    // 'x', 'y', 'z' never occur in the text; building must not fail and the
    // pattern simply finds nothing.
    let matches = full_scan("aaaa", &["xyz", "aa"]);
    assert!(matches[0].is_empty());
    assert_eq!(matches[1], vec![0, 1, 2]);
}

#[test]
fn offsets_are_character_based_not_byte_based() {
    let text = "abc@123\u{a3}\u{2603}\u{1f4a1}abc\u{1f4ac}abc\u{1f30d}";
    let patterns = [
        "abc",
        "\u{1f4a1}",
        "123",
        "\u{2603}",
        "\u{1f30d}",
        "\u{1f4ac}",
    ];
    let matches = full_scan(text, &patterns);
    assert_eq!(matches[0], vec![0, 10, 14]);
    assert_eq!(matches[1], vec![9]);
    assert_eq!(matches[2], vec![4]);
    assert_eq!(matches[3], vec![8]);
    assert_eq!(matches[4], vec![17]);
    assert_eq!(matches[5], vec![13]);
}

#[test]
fn per_pattern_offsets_are_strictly_increasing() {
    let matches = full_scan("aabaabaaab", &["a", "aa", "aab", "b"]);
    for list in &matches {
        for pair in list.windows(2) {
            assert!(pair[0] < pair[1], "offsets not increasing: {:?}", list);
        }
    }
}

#[test]
fn line_helpers_resolve_match_offsets() {
    let text = "let x = 1;\nlet y = x;\nprint(y);";
    let searcher = Searcher::build(text, &["let", "y"]).unwrap();
    let page = searcher.page_at(0, usize::MAX).unwrap();

    assert_eq!(page.matches_for(0), &[0, 11]);
    assert_eq!(searcher.line_col(0), Some((0, 0)));
    assert_eq!(searcher.line_col(11), Some((1, 0)));

    let y_hits = page.matches_for(1);
    assert_eq!(y_hits, &[15, 28]);
    assert_eq!(searcher.line_col(15), Some((1, 4)));
    assert_eq!(searcher.line_text(1).as_deref(), Some("let y = x;"));
    assert_eq!(searcher.line_count(), 3);
    assert_eq!(searcher.line_col(searcher.text_len()), None);
}
