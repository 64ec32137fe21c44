//! The piece predicate and greedy factorization.
//!
//! A "piece" is a substring that occurs at two or more ending positions
//! across the whole collection. With the annotated automaton in hand, both
//! questions here are transition walks: membership plus a count lookup for
//! [`is_piece`], and a longest-confirmed-prefix scan for [`factorize`].
//!
//! All functions are pure reads; factorizing many words concurrently is
//! safe and, under the `parallel` feature, [`factorize_all`] does exactly
//! that.

use crate::types::{Automaton, Piece, StateId, Symbol};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The occurrence threshold that makes a substring a piece.
pub const MIN_PIECE_OCCURRENCES: usize = 2;

/// Does `substring` occur at least twice anywhere in the collection?
///
/// Walks transitions from the root consuming one symbol per character;
/// falling off the automaton means the substring never occurs at all. The
/// empty string is not a piece by definition.
///
/// Runs in time proportional to the query length.
///
/// # Panics
/// Panics if the automaton has not been annotated.
pub fn is_piece(automaton: &Automaton, substring: &str) -> bool {
    assert!(
        automaton.is_annotated(),
        "is_piece() queried before annotate() ran"
    );
    if substring.is_empty() {
        return false;
    }
    let symbols: Vec<Symbol> = substring.chars().map(Symbol::from_char).collect();
    match automaton.traverse(&symbols) {
        Some(state) => automaton.occurrences(state) >= MIN_PIECE_OCCURRENCES,
        None => false,
    }
}

/// Greedily factor `word` into maximal pieces, left to right.
///
/// At each position the scan walks as far as transitions allow, remembering
/// the longest prefix confirmed to be a piece, then emits it and resumes
/// after it. When not even a single-character piece exists, a one-character
/// fallback piece is emitted so the factorization always covers the word;
/// [`factorize_strict`] is the variant that refuses instead.
///
/// Concatenating the returned pieces reproduces `word` exactly - for words
/// of the original collection and for novel words alike (characters the
/// automaton has never seen just become fallback pieces).
///
/// # Panics
/// Panics if the automaton has not been annotated.
pub fn factorize(automaton: &Automaton, word: &str) -> Vec<Piece> {
    assert!(
        automaton.is_annotated(),
        "factorize() queried before annotate() ran"
    );
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let best_end = scan_longest_piece(automaton, &chars, start);
        let end = if best_end > start {
            best_end
        } else {
            // No prefix at this offset occurs twice; emit the bare
            // character and move on.
            start + 1
        };
        pieces.push(make_piece(automaton, &chars, start, end));
        start = end;
    }

    pieces
}

/// Greedy factorization that refuses words without a true factorization.
///
/// Identical scan to [`factorize`], but the moment the single-character
/// fallback would trigger, the word is declared unfactorizable and `None`
/// is returned. This preserves the stricter reading of the problem where
/// every emitted piece must itself occur at least twice.
///
/// # Panics
/// Panics if the automaton has not been annotated.
pub fn factorize_strict(automaton: &Automaton, word: &str) -> Option<Vec<Piece>> {
    assert!(
        automaton.is_annotated(),
        "factorize_strict() queried before annotate() ran"
    );
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let best_end = scan_longest_piece(automaton, &chars, start);
        if best_end == start {
            return None;
        }
        pieces.push(make_piece(automaton, &chars, start, best_end));
        start = best_end;
    }

    Some(pieces)
}

/// Factor every word of a collection.
///
/// With the `parallel` feature the words fan out across threads - the
/// automaton is read-only here, so no synchronization is involved.
pub fn factorize_all(automaton: &Automaton, words: &[String]) -> Vec<Vec<Piece>> {
    #[cfg(feature = "parallel")]
    {
        words
            .par_iter()
            .map(|word| factorize(automaton, word))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        words
            .iter()
            .map(|word| factorize(automaton, word))
            .collect()
    }
}

/// Walk transitions from the root along `chars[start..]`, returning the end
/// offset (exclusive) of the longest prefix whose state occurs at least
/// twice. Returns `start` when no such prefix exists.
fn scan_longest_piece(automaton: &Automaton, chars: &[char], start: usize) -> usize {
    let mut state = StateId::ROOT;
    let mut best_end = start;
    for (cursor, &c) in chars.iter().enumerate().skip(start) {
        let sym = Symbol::from_char(c);
        let Some(&next) = automaton.state(state).transitions.get(&sym) else {
            break;
        };
        state = next;
        if automaton.occurrences(state) >= MIN_PIECE_OCCURRENCES {
            best_end = cursor + 1;
        }
    }
    best_end
}

fn make_piece(automaton: &Automaton, chars: &[char], start: usize, end: usize) -> Piece {
    let symbols: Vec<Symbol> = chars[start..end].iter().map(|&c| Symbol::from_char(c)).collect();
    let occurrences = automaton
        .traverse(&symbols)
        .map(|state| automaton.occurrences(state))
        .unwrap_or(0);
    Piece {
        text: chars[start..end].iter().collect(),
        start,
        end,
        occurrences,
    }
}
