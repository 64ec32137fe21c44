// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subword statistics reporting.
//!
//! A state covers a contiguous range of subword lengths that all share one
//! occurrence count, and the number of distinct subwords can be quadratic in
//! the input. The reporter therefore works at `(state, length)` granularity
//! and never touches substring text unless asked: [`rank`] emits compact
//! [`ScoreEntry`] values, [`representative`] materializes one entry's text
//! on demand, and [`rank_strings`] is the fully materialized convenience
//! wrapper.
//!
//! # Ordering
//!
//! Entries sort by descending `score = length * occurrences`. Ties break by
//! ascending length, then ascending state id. Construction is
//! deterministic for a given input order, so the full ordering is too -
//! running the reporter twice always yields identical output.

use crate::types::{Automaton, RankedSubword, ScoreEntry, StateId};
use std::cmp::Ordering;

/// Rank every distinct subword class by `length * occurrences`.
///
/// One entry per `(state, length)` pair, covering each state's full length
/// range `(len(link), len]`. The root and sentinel-created states are
/// excluded, so every distinct subword of the collection appears exactly
/// once.
///
/// # Panics
/// Panics if the automaton has not been annotated.
pub fn rank(automaton: &Automaton) -> Vec<ScoreEntry> {
    assert!(
        automaton.is_annotated(),
        "rank() queried before annotate() ran"
    );

    let mut entries = Vec::new();
    for (idx, state) in automaton.states().enumerate().skip(1) {
        if state.sentinel {
            continue;
        }
        let occurrences = state.occurrences;
        let min_len = state.min_len(automaton);
        for len in min_len..=state.len {
            entries.push(ScoreEntry {
                state: StateId(idx as u32),
                len,
                occurrences,
                score: (len as u64) * (occurrences as u64),
            });
        }
    }

    entries.sort_unstable_by(compare);
    entries
}

/// Descending score, then ascending length, then ascending state id.
fn compare(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.len.cmp(&b.len))
        .then_with(|| a.state.cmp(&b.state))
}

/// Materialize the literal substring text of a ranked entry.
///
/// Uses the state's recorded representative ending position: the subword is
/// the `entry.len` characters ending there.
pub fn representative(automaton: &Automaton, entry: &ScoreEntry) -> String {
    let rep = automaton.state(entry.state).rep;
    let text = &automaton.texts()[rep.word as usize];
    let start = rep.end as usize - entry.len;
    text.chars().skip(start).take(entry.len).collect()
}

/// Rank with every entry's substring materialized.
///
/// Same ordering as [`rank`]. Prefer [`rank`] plus selective
/// [`representative`] calls when only a prefix of the ranking is needed -
/// materializing all entries is quadratic-size work on repetitive input.
pub fn rank_strings(automaton: &Automaton) -> Vec<RankedSubword> {
    rank(automaton)
        .iter()
        .map(|entry| RankedSubword {
            text: representative(automaton, entry),
            occurrences: entry.occurrences,
            score: entry.score,
        })
        .collect()
}
