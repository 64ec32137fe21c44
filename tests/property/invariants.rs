//! Structural and statistical invariants on randomly generated collections.

use proptest::prelude::*;

use morsel::{rank, rank_strings, representative, verify_automaton};

use super::common::annotated;
use super::oracles::oracle_substring_counts;
use super::{collection_strategy, unicode_collection_strategy};

proptest! {
    /// Every structural invariant holds on arbitrary input.
    #[test]
    fn built_automata_verify(words in collection_strategy()) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let automaton = annotated(&refs);
        let report = verify_automaton(&automaton).expect("invariants hold");
        prop_assert!(report.annotated);
    }

    /// The arena never exceeds two states per inserted symbol (sentinels
    /// included).
    #[test]
    fn state_count_bound(words in collection_strategy()) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let automaton = annotated(&refs);
        let symbols: usize = words.iter().map(|w| w.chars().count() + 1).sum();
        prop_assert!(automaton.num_states() <= 2 * symbols.max(1));
    }

    /// The ranked report enumerates exactly the distinct substrings, each
    /// with its oracle count.
    #[test]
    fn ranking_is_complete_and_correct(words in collection_strategy()) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let automaton = annotated(&refs);
        let expected = oracle_substring_counts(&words);

        let ranked = rank_strings(&automaton);
        prop_assert_eq!(ranked.len(), expected.len(), "distinct subword count");
        for entry in &ranked {
            prop_assert_eq!(
                expected.get(&entry.text).copied(),
                Some(entry.occurrences),
                "count of {:?}", entry.text
            );
            prop_assert_eq!(
                entry.score,
                (entry.text.chars().count() as u64) * (entry.occurrences as u64)
            );
        }
    }

    /// Scores arrive in non-increasing order, with the documented
    /// tie-break (shorter length first at equal score).
    #[test]
    fn ranking_order_holds(words in collection_strategy()) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let automaton = annotated(&refs);
        let entries = rank(&automaton);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].len <= pair[1].len);
            }
        }
    }

    /// Character-offset bookkeeping survives multi-byte text.
    #[test]
    fn unicode_collections_report_correctly(words in unicode_collection_strategy()) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let automaton = annotated(&refs);
        let expected = oracle_substring_counts(&words);

        let entries = rank(&automaton);
        prop_assert_eq!(entries.len(), expected.len());
        for entry in entries.iter().take(50) {
            let text = representative(&automaton, entry);
            prop_assert_eq!(
                expected.get(&text).copied(),
                Some(entry.occurrences),
                "count of {:?}", text
            );
        }
    }
}
