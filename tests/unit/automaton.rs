//! Structural tests for the automaton builder.
//!
//! The expected transition tables below are the known suffix automata for
//! each word, checked up to renaming of state ids: the test walks both
//! graphs in lockstep from the root and requires a one-to-one translation
//! between them.

use morsel::{Automaton, Builder, StateId, Symbol};
use std::collections::{BTreeMap, HashMap};

fn build_one(word: &str) -> Automaton {
    let symbols: Vec<Symbol> = word.chars().map(Symbol::from_char).collect();
    let mut builder = Builder::new();
    builder.push_word(&symbols);
    builder.finish()
}

/// Expected automaton shape: `structure[i]` lists state `i`'s outgoing
/// transitions as `(symbol, target)` pairs; state 0 is the root.
fn assert_structure(automaton: &Automaton, structure: &[&[(char, usize)]]) {
    assert_eq!(
        automaton.num_states(),
        structure.len(),
        "state count mismatch"
    );

    let expected: Vec<BTreeMap<char, usize>> = structure
        .iter()
        .map(|edges| edges.iter().copied().collect())
        .collect();

    // Pair (actual, expected) states breadth-first, requiring a consistent
    // bijection between ids.
    let mut translation: HashMap<usize, StateId> = HashMap::new();
    translation.insert(0, StateId::ROOT);
    let mut queue = vec![(StateId::ROOT, 0usize)];

    while let Some((actual_id, expected_id)) = queue.pop() {
        let actual: BTreeMap<char, StateId> = automaton
            .state(actual_id)
            .transitions
            .iter()
            .map(|(&sym, &target)| (sym.to_char().expect("no sentinels here"), target))
            .collect();

        let actual_keys: Vec<char> = actual.keys().copied().collect();
        let expected_keys: Vec<char> = expected[expected_id].keys().copied().collect();
        assert_eq!(
            actual_keys, expected_keys,
            "transition symbols differ at expected state {expected_id}"
        );

        for (&sym, &expected_target) in &expected[expected_id] {
            let actual_target = actual[&sym];
            match translation.get(&expected_target) {
                Some(&seen) => assert_eq!(
                    seen, actual_target,
                    "state {expected_target} maps to two different states"
                ),
                None => {
                    translation.insert(expected_target, actual_target);
                    queue.push((actual_target, expected_target));
                }
            }
        }
    }

    assert_eq!(
        translation.len(),
        structure.len(),
        "some expected states were never reached"
    );
}

#[test]
fn structure_aa() {
    assert_structure(&build_one("aa"), &[&[('a', 1)], &[('a', 2)], &[]]);
}

#[test]
fn structure_aba() {
    assert_structure(
        &build_one("aba"),
        &[&[('a', 1), ('b', 2)], &[('b', 2)], &[('a', 3)], &[]],
    );
}

#[test]
fn structure_abb() {
    assert_structure(
        &build_one("abb"),
        &[
            &[('a', 1), ('b', 4)],
            &[('b', 2)],
            &[('b', 3)],
            &[],
            &[('b', 3)],
        ],
    );
}

#[test]
fn structure_abbcbc() {
    assert_structure(
        &build_one("abbcbc"),
        &[
            &[('a', 1), ('b', 4), ('c', 8)],
            &[('b', 2)],
            &[('b', 3)],
            &[('c', 5)],
            &[('b', 3), ('c', 8)],
            &[('b', 6)],
            &[('c', 7)],
            &[],
            &[('b', 6)],
        ],
    );
}

#[test]
fn structure_abcbc() {
    assert_structure(
        &build_one("abcbc"),
        &[
            &[('a', 1), ('b', 4), ('c', 7)],
            &[('b', 2)],
            &[('c', 3)],
            &[('b', 5)],
            &[('c', 7)],
            &[('c', 6)],
            &[],
            &[('b', 5)],
        ],
    );
}

#[test]
fn structure_abbb() {
    assert_structure(
        &build_one("abbb"),
        &[
            &[('a', 1), ('b', 5)],
            &[('b', 2)],
            &[('b', 3)],
            &[('b', 4)],
            &[],
            &[('b', 6)],
            &[('b', 4)],
        ],
    );
}

#[test]
fn structure_dababd() {
    assert_structure(
        &build_one("dababd"),
        &[
            &[('d', 1), ('a', 7), ('b', 8)],
            &[('a', 2)],
            &[('b', 3)],
            &[('a', 4)],
            &[('b', 5)],
            &[('d', 6)],
            &[],
            &[('b', 8)],
            &[('a', 4), ('d', 6)],
        ],
    );
}

#[test]
fn every_substring_traverses_and_nothing_else() {
    let word = "mississippi";
    let automaton = build_one(word);
    let chars: Vec<char> = word.chars().collect();

    for i in 0..chars.len() {
        for j in i + 1..=chars.len() {
            let symbols: Vec<Symbol> = chars[i..j].iter().map(|&c| Symbol::from_char(c)).collect();
            assert!(
                automaton.traverse(&symbols).is_some(),
                "substring {:?} missing",
                chars[i..j].iter().collect::<String>()
            );
        }
    }

    for phantom in ["im", "sm", "ippis", "mississippii"] {
        let symbols: Vec<Symbol> = phantom.chars().map(Symbol::from_char).collect();
        assert!(automaton.traverse(&symbols).is_none(), "phantom {phantom}");
    }
}

#[test]
fn state_arena_stays_under_two_per_symbol() {
    for word in ["abracadabra", "aaaaaa", "abcdefgh", "abababab"] {
        let automaton = build_one(word);
        assert!(
            automaton.num_states() <= 2 * word.len().max(1),
            "{word}: {} states",
            automaton.num_states()
        );
    }
}
