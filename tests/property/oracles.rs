//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the automaton-backed fast paths. If an oracle and the automaton
//! disagree, the oracle is right.

use std::collections::HashMap;

/// O(n²) substring counting: every substring of every word, with exact
/// ending-position counts.
pub fn oracle_substring_counts(words: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len() {
            for j in i + 1..=chars.len() {
                let sub: String = chars[i..j].iter().collect();
                *counts.entry(sub).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Occurrence count of one substring by linear scan.
pub fn oracle_count(words: &[String], sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    let needle: Vec<char> = sub.chars().collect();
    let mut count = 0;
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for start in 0..chars.len() {
            if chars[start..].starts_with(&needle[..]) {
                count += 1;
            }
        }
    }
    count
}

/// A substring is a piece when the scan finds it at two or more positions.
pub fn oracle_is_piece(words: &[String], sub: &str) -> bool {
    oracle_count(words, sub) >= 2
}

/// Greedy factorization against oracle counts: at each offset take the
/// longest prefix occurring at least twice, falling back to one character.
pub fn oracle_factorize(words: &[String], word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let mut best_end = start;
        for end in (start + 1)..=chars.len() {
            let candidate: String = chars[start..end].iter().collect();
            if oracle_count(words, &candidate) >= 2 {
                best_end = end;
            }
        }
        let end = if best_end > start { best_end } else { start + 1 };
        pieces.push(chars[start..end].iter().collect());
        start = end;
    }
    pieces
}

#[test]
fn oracle_counts_banana() {
    let words = vec!["banana".to_string()];
    assert_eq!(oracle_count(&words, "ana"), 2);
    assert_eq!(oracle_count(&words, "a"), 3);
    assert_eq!(oracle_count(&words, "nan"), 1);
    assert!(!oracle_is_piece(&words, "nan"));
    assert!(oracle_is_piece(&words, "na"));
}
