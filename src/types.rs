// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the automaton and its query results.
//!
//! Everything downstream leans on two invariants established here:
//!
//! - **State**: every substring of every input word is represented by exactly
//!   one state, reached by walking transitions from the root. Two substrings
//!   share a state iff they end at the same set of positions across the whole
//!   collection ("endpos-equivalence").
//!
//! - **Suffix links**: `len(link(s)) < len(s)` for every non-root state. The
//!   link edges form a tree rooted at the initial state, which is the
//!   structure the occurrence propagator walks bottom-up.
//!
//! States live in a flat arena (`Vec<State>`) and refer to each other by
//! [`StateId`] index. That sidesteps ownership cycles entirely: the link tree
//! and the transition DAG are just two views over the same indices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// NEWTYPES: Type-safe indices and symbols
// =============================================================================

/// Type-safe index into the automaton's state arena.
///
/// Prevents accidentally passing a length or a word index where a state
/// reference is expected. The root is always `StateId::ROOT` (index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct StateId(pub u32);

impl StateId {
    /// The initial state of every automaton.
    pub const ROOT: StateId = StateId(0);

    /// Create a new StateId, validating it's within the arena bounds.
    #[inline]
    pub fn new(id: u32, num_states: usize) -> Option<Self> {
        if (id as usize) < num_states {
            Some(StateId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for arena indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<StateId> for usize {
    fn from(id: StateId) -> Self {
        id.0 as usize
    }
}

/// One symbol of the generalized sequence: a Unicode scalar value, or the
/// reserved per-word sentinel.
///
/// The sentinel is `0x11_0000` - the first value past the Unicode scalar
/// range - so no character a caller can construct ever collides with it.
/// Sentinels terminate each word during construction and are excluded from
/// counting, ranking, and the piece predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// The shared word-terminator symbol.
    pub const SENTINEL: Symbol = Symbol(0x11_0000);

    /// Encode a character as a symbol.
    #[inline]
    pub fn from_char(c: char) -> Self {
        Symbol(c as u32)
    }

    /// Get the underlying scalar value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Is this the word-terminator symbol?
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Symbol::SENTINEL
    }

    /// Decode back to a character. `None` for the sentinel.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::from_char(c)
    }
}

// =============================================================================
// AUTOMATON STATES
// =============================================================================

/// How a state came into existence during construction.
///
/// The distinction drives occurrence counting: `Extension` states were
/// created for one concrete ending position and seed a count of 1; `Clone`
/// states were manufactured during a split to keep endpos-equivalence intact
/// and seed 0 (their occurrences arrive purely via link-tree propagation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Created while appending a symbol of some word.
    Extension,
    /// Created by splitting an existing state.
    Clone,
}

/// A representative ending position for a state: `word` and the character
/// offset one past the last character. Any ending position of the state
/// works; construction records the first one it sees so that ranked entries
/// can materialize their substring text lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndPos {
    pub word: u32,
    pub end: u32,
}

/// A node of the automaton: one endpos-equivalence class of substrings.
///
/// The class spans every substring length in `(len(link), len]`, all sharing
/// one set of ending positions and therefore one occurrence count.
#[derive(Debug, Clone)]
pub struct State {
    /// Length of the longest substring ending at this state.
    pub len: usize,
    /// The state representing the longest proper suffix that lives in a
    /// different equivalence class. `None` only for the root.
    pub link: Option<StateId>,
    /// Outgoing transitions, at most one per symbol. Ordered so that every
    /// walk over the automaton is deterministic.
    pub transitions: BTreeMap<Symbol, StateId>,
    /// Number of ending positions across the whole collection. Zero until
    /// the propagation pass runs; see [`crate::annotate`].
    pub occurrences: usize,
    /// Create vs clone, fixed at construction.
    pub origin: Origin,
    /// Created while inserting a sentinel symbol. Such states represent
    /// sentinel-terminated suffixes and are invisible to every query.
    pub sentinel: bool,
    /// A representative ending position for substring materialization.
    pub rep: EndPos,
}

impl State {
    /// Shortest substring length represented by this state.
    ///
    /// The state covers lengths `min_len()..=len`, all with identical
    /// ending positions.
    #[inline]
    pub fn min_len(&self, automaton: &Automaton) -> usize {
        match self.link {
            Some(link) => automaton.state(link).len + 1,
            None => 0,
        }
    }
}

// =============================================================================
// THE AUTOMATON
// =============================================================================

/// A generalized suffix automaton over a collection of words.
///
/// Built once via [`crate::build`] (or incrementally via [`crate::Builder`]),
/// annotated once via [`crate::annotate`], then shared immutably by any
/// number of concurrent readers. No query mutates it.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    /// Per-state ending-position seeds recorded during construction; the
    /// propagator turns these into exact occurrence counts.
    pub(crate) seeds: Vec<usize>,
    /// The input words, sentinel stripped, in insertion order. Used only to
    /// materialize substring text for ranked entries.
    pub(crate) texts: Vec<String>,
    pub(crate) annotated: bool,
}

impl Automaton {
    /// The initial state.
    pub const ROOT: StateId = StateId::ROOT;

    /// Access a state by id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds; ids handed out by this automaton
    /// are always valid.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.as_usize()]
    }

    /// Iterate over all states in arena order (root first).
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Total number of states, root included.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The input words, in insertion order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Has the occurrence propagation pass run?
    pub fn is_annotated(&self) -> bool {
        self.annotated
    }

    /// Occurrence count for a state.
    ///
    /// # Panics
    /// Panics if [`crate::annotate`] has not run - querying counts on a
    /// non-annotated automaton is a caller defect, not a recoverable
    /// condition.
    #[inline]
    pub fn occurrences(&self, id: StateId) -> usize {
        assert!(
            self.annotated,
            "occurrence counts queried before annotate() ran"
        );
        self.states[id.as_usize()].occurrences
    }

    /// Walk transitions from the root, consuming `symbols` one at a time.
    ///
    /// Returns the final state, or `None` if the walk falls off the
    /// automaton - i.e. the symbol sequence is not a substring of any
    /// input word.
    pub fn traverse(&self, symbols: &[Symbol]) -> Option<StateId> {
        let mut state = Self::ROOT;
        for sym in symbols {
            state = *self.state(state).transitions.get(sym)?;
        }
        Some(state)
    }

    /// Mark every state reachable from the root via non-sentinel
    /// transitions.
    ///
    /// Sentinel-labeled edges are skipped, so exactly the sentinel-created
    /// states come back unreachable - the walk is how `verify` proves that
    /// correspondence rather than assuming it.
    pub fn reachable(&self) -> Vec<bool> {
        let mut seen = vec![false; self.states.len()];
        let mut stack = vec![Self::ROOT];
        seen[Self::ROOT.as_usize()] = true;
        while let Some(id) = stack.pop() {
            for (&sym, &target) in &self.state(id).transitions {
                if sym.is_sentinel() || seen[target.as_usize()] {
                    continue;
                }
                seen[target.as_usize()] = true;
                stack.push(target);
            }
        }
        seen
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// One ranked entry of the subword statistics report: a single
/// `(state, length)` class.
///
/// The entry identifies its subword by state and length rather than by text;
/// call [`crate::representative`] to materialize the literal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// The state representing this subword.
    pub state: StateId,
    /// Subword length within the state's class.
    pub len: usize,
    /// Exact number of ending positions across the collection.
    pub occurrences: usize,
    /// `len * occurrences`.
    pub score: u64,
}

/// A ranked entry with its substring materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSubword {
    pub text: String,
    pub occurrences: usize,
    pub score: u64,
}

/// One piece of a factorization: `text` spans character offsets
/// `start..end` of the factorized word.
///
/// `occurrences` is the piece's collection-wide ending-position count.
/// Fallback pieces (emitted when no prefix occurs twice) carry whatever
/// count their single character has - possibly 1, or 0 for a character the
/// automaton has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub occurrences: usize,
}
