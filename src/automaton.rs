//! Online construction of the generalized suffix automaton.
//!
//! # Algorithm overview
//!
//! ```text
//! Input word: "abb"   (sentinel omitted for clarity)
//!
//! Extend 'a':  root ──a──▶ (1)            link(1) = root
//! Extend 'b':  (1) ──b──▶ (2)            walk links from (1): root also
//!              root ──b──▶ (2)            lacks 'b', gets the edge too
//! Extend 'b':  (2) ──b──▶ (3)            walk from (2): root has 'b'→(2),
//!                                         but len(2)=2 ≠ len(root)+1, so
//!              split: clone (2) as (4)    (4) takes len 1, (2)'s edges
//!              root ──b──▶ (4)            and link; (2) and (3) now link
//!                                         to (4)
//!
//! Final: every substring of "abb" is a root-originating path, and states
//! group substrings by their exact set of ending positions.
//! ```
//!
//! Each appended symbol creates one extension state and at most one clone,
//! so the arena never exceeds `2n` states for `n` inserted symbols.
//!
//! Construction is inherently sequential - the split logic depends on the
//! evolving structure - but the finished automaton is immutable and serves
//! any number of concurrent readers.
//!
//! # Multiple words
//!
//! The builder resets its active-state pointer to the root before every
//! word. When a word repeats material the automaton already contains, the
//! extension step finds the transition in place and reuses (or splits) the
//! existing state instead of creating one, so every substring keeps exactly
//! one state and suffix links keep strictly decreasing lengths. Each real
//! symbol still records one ending-position seed on its active state, which
//! is all the occurrence propagator needs (see [`crate::annotate`]).
//!
//! # References
//!
//! - Blumer et al. (1985): "The smallest automaton recognizing the
//!   subwords of a text"
//! - <https://cp-algorithms.com/string/suffix-automaton.html>

use crate::encode::EncodedWord;
use crate::types::{Automaton, EndPos, Origin, State, StateId, Symbol};
use std::collections::BTreeMap;

/// Incremental builder for a generalized suffix automaton.
///
/// Low-level surface: push raw symbol sequences one word at a time, then
/// [`finish`](Builder::finish). The usual entry point is [`build`], which
/// feeds it encoder output.
#[derive(Debug)]
pub struct Builder {
    states: Vec<State>,
    /// One ending-position tally per state: how many word positions had
    /// this state as their active state. The raw material for count
    /// propagation.
    seeds: Vec<usize>,
    /// Reconstructed word texts (sentinels dropped), indexed by insertion
    /// order. Kept so ranked entries can materialize substrings later.
    texts: Vec<String>,
}

impl Builder {
    /// A builder holding only the initial state.
    pub fn new() -> Self {
        Builder {
            states: vec![State {
                len: 0,
                link: None,
                transitions: BTreeMap::new(),
                occurrences: 0,
                origin: Origin::Extension,
                sentinel: false,
                rep: EndPos { word: 0, end: 0 },
            }],
            seeds: vec![0],
            texts: Vec::new(),
        }
    }

    /// Number of states so far, root included.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Insert one word, resetting the active-state pointer to the root
    /// first so substrings never bridge two words.
    pub fn push_word(&mut self, symbols: &[Symbol]) {
        let word = self.texts.len() as u32;
        self.texts
            .push(symbols.iter().filter_map(|s| s.to_char()).collect());

        let mut last = StateId::ROOT;
        let mut end = 0u32;
        for &sym in symbols {
            end += 1;
            last = self.extend(sym, last, EndPos { word, end });
            if !sym.is_sentinel() {
                // One ending position lands on the active state; sentinel
                // positions are excluded from counting outright.
                self.seeds[last.as_usize()] += 1;
            }
        }
    }

    /// Seal the builder into an immutable (not yet annotated) automaton.
    pub fn finish(self) -> Automaton {
        Automaton {
            states: self.states,
            seeds: self.seeds,
            texts: self.texts,
            annotated: false,
        }
    }

    fn alloc(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(state);
        self.seeds.push(0);
        id
    }

    /// The online extension step: advance the active state by `sym`,
    /// creating, reusing, or splitting as the existing structure demands.
    /// Returns the state representing the word's new full prefix.
    fn extend(&mut self, sym: Symbol, last: StateId, rep: EndPos) -> StateId {
        // Reuse path: the active state already continues with `sym`, which
        // happens whenever a word repeats material the collection has
        // already contributed. No new state may be created then - doing so
        // would give one substring two states.
        let existing = self.states[last.as_usize()].transitions.get(&sym).copied();
        if let Some(q) = existing {
            if self.states[q.as_usize()].len == self.states[last.as_usize()].len + 1 {
                return q;
            }
            return self.split(sym, last, q);
        }

        let cur = self.alloc(State {
            len: self.states[last.as_usize()].len + 1,
            link: None,
            transitions: BTreeMap::new(),
            occurrences: 0,
            origin: Origin::Extension,
            sentinel: sym.is_sentinel(),
            rep,
        });

        // Walk back through suffix links, pointing every link ancestor that
        // lacks a `sym` transition at the new state.
        let mut p = Some(last);
        while let Some(pid) = p {
            let state = &mut self.states[pid.as_usize()];
            if state.transitions.contains_key(&sym) {
                break;
            }
            state.transitions.insert(sym, cur);
            p = state.link;
        }

        // The walk exhausted the chain: the symbol is brand new along every
        // suffix, and the new state's longest proper suffix is empty.
        let Some(pid) = p else {
            self.states[cur.as_usize()].link = Some(StateId::ROOT);
            return cur;
        };

        let q = self.states[pid.as_usize()].transitions[&sym];
        if self.states[q.as_usize()].len == self.states[pid.as_usize()].len + 1 {
            // Lengths line up: q already represents exactly the suffix class
            // the new state should link to.
            self.states[cur.as_usize()].link = Some(q);
            return cur;
        }

        let clone = self.split(sym, pid, q);
        self.states[cur.as_usize()].link = Some(clone);
        cur
    }

    /// Split `q`: clone it at length `len(p) + 1`, redirect the `sym`
    /// transitions along `p`'s link chain that pointed at `q`, and relink
    /// `q` under the clone.
    ///
    /// This is the correctness-critical step. `q` bundles substrings whose
    /// ending positions are about to diverge; skipping or miscomputing the
    /// clone would leave states whose substrings no longer share an endpos
    /// set. Returns the clone.
    fn split(&mut self, sym: Symbol, p: StateId, q: StateId) -> StateId {
        let q_state = &self.states[q.as_usize()];
        let clone = State {
            len: self.states[p.as_usize()].len + 1,
            link: q_state.link,
            transitions: q_state.transitions.clone(),
            occurrences: 0,
            origin: Origin::Clone,
            sentinel: q_state.sentinel,
            rep: q_state.rep,
        };
        let clone = self.alloc(clone);

        let mut p = Some(p);
        while let Some(pid) = p {
            let state = &mut self.states[pid.as_usize()];
            match state.transitions.get_mut(&sym) {
                Some(target) if *target == q => *target = clone,
                _ => break,
            }
            p = state.link;
        }

        self.states[q.as_usize()].link = Some(clone);
        clone
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

/// Build the automaton over an encoded collection.
///
/// Words are processed in order, one at a time; the result contains every
/// substring of every word, grouped by endpos-equivalence. An empty
/// collection yields an automaton with only the initial state.
///
/// The result is not yet annotated - run [`crate::annotate`] before
/// querying occurrence counts.
pub fn build(words: &[EncodedWord]) -> Automaton {
    let mut builder = Builder::new();
    for word in words {
        builder.push_word(&word.symbols);
    }
    builder.finish()
}
