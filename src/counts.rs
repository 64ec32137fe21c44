//! Occurrence count propagation over the suffix-link tree.
//!
//! Construction leaves every state's `occurrences` at zero. This pass seeds
//! and propagates them exactly once, after which the automaton can answer
//! "how often does this substring occur across the whole collection" in the
//! time it takes to walk the substring.
//!
//! Seeding: while a word is inserted, every real (non-sentinel) position
//! deposits one ending-position seed on its active state - the state whose
//! class contains the word's full prefix at that position. A freshly
//! created extension state therefore starts with the single ending position
//! it was created for; a state reused because the collection repeats itself
//! accumulates one seed per repetition; clones and sentinel-created states
//! that no position landed on hold zero.
//!
//! Propagation: states are visited in decreasing order of `len`, each adding
//! its running count to its suffix-link target. Because
//! `len(link(s)) < len(s)`, that order is a valid bottom-up traversal of the
//! link tree, and because all substrings of a state share one endpos set,
//! the single propagated number is exact for the state's entire length
//! range.

use crate::types::{Automaton, StateId};

/// Compute the exact occurrence count for every state.
///
/// Must run to completion after [`crate::build`] and before the reporter or
/// the factorizer touch the automaton; count accessors panic until it has.
/// Running it again is harmless - counts are re-derived from the
/// construction-time seeds.
pub fn annotate(automaton: &mut Automaton) {
    // Start every state from its seed. The root stays at zero: it
    // represents the empty subword, whose count is not a meaningful
    // quantity (it absorbs every propagated ending position below).
    for (state, &seed) in automaton.states.iter_mut().zip(&automaton.seeds) {
        state.occurrences = seed;
    }
    if let Some(root) = automaton.states.first_mut() {
        root.occurrences = 0;
    }

    // Bottom-up over the link tree via decreasing length.
    let mut order: Vec<StateId> = (1..automaton.states.len())
        .map(|i| StateId(i as u32))
        .collect();
    order.sort_unstable_by(|a, b| {
        automaton.states[b.as_usize()]
            .len
            .cmp(&automaton.states[a.as_usize()].len)
    });

    for id in order {
        let count = automaton.states[id.as_usize()].occurrences;
        if let Some(link) = automaton.states[id.as_usize()].link {
            automaton.states[link.as_usize()].occurrences += count;
        }
    }

    automaton.annotated = true;
}
