// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural invariant checks for a built automaton.
//!
//! Construction is supposed to guarantee everything checked here; this
//! module exists so that the `inspect` command and the test suite can prove
//! it on real data instead of trusting the builder. Checks are linear in
//! the number of states plus transitions.
//!
//! # Invariants
//!
//! - The root has length 0, no suffix link, and is not sentinel-created.
//! - Every other state has a suffix link with strictly smaller length
//!   (the link edges form a tree rooted at the initial state).
//! - Every transition target is in bounds and at least one longer than its
//!   source.
//! - Exactly the sentinel-created states are unreachable from the root via
//!   non-sentinel transitions (every real subword has a path; sentinel
//!   suffixes have none).
//! - After annotation: along any reachable non-sentinel transition, the
//!   target's occurrence count never exceeds the source's (a longer
//!   substring cannot occur more often than its prefix).

use crate::types::{Automaton, Origin, StateId};
use serde::Serialize;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The initial state is malformed.
    MalformedRoot,
    /// A non-root state has no suffix link.
    MissingLink { state: u32 },
    /// A suffix link does not strictly decrease length.
    LinkLengthNotDecreasing {
        state: u32,
        len: usize,
        link_len: usize,
    },
    /// A suffix link points outside the arena.
    LinkOutOfBounds { state: u32, link: u32 },
    /// A transition target lies outside the arena.
    TransitionOutOfBounds { state: u32, target: u32 },
    /// A transition target is not longer than its source.
    TransitionLengthInvalid {
        state: u32,
        target: u32,
        state_len: usize,
        target_len: usize,
    },
    /// A state's reachability disagrees with its sentinel flag.
    SentinelReachabilityMismatch { state: u32, sentinel: bool },
    /// A longer substring claims more occurrences than its prefix.
    CountNotMonotonic {
        state: u32,
        target: u32,
        state_count: usize,
        target_count: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MalformedRoot => {
                write!(f, "root state must have len 0 and no suffix link")
            }
            InvariantError::MissingLink { state } => {
                write!(f, "state {} has no suffix link", state)
            }
            InvariantError::LinkLengthNotDecreasing {
                state,
                len,
                link_len,
            } => {
                write!(
                    f,
                    "state {} has len {} but its link has len {}",
                    state, len, link_len
                )
            }
            InvariantError::LinkOutOfBounds { state, link } => {
                write!(f, "state {} links to out-of-bounds state {}", state, link)
            }
            InvariantError::TransitionOutOfBounds { state, target } => {
                write!(
                    f,
                    "state {} has a transition to out-of-bounds state {}",
                    state, target
                )
            }
            InvariantError::TransitionLengthInvalid {
                state,
                target,
                state_len,
                target_len,
            } => {
                write!(
                    f,
                    "transition {} -> {} does not grow length ({} -> {})",
                    state, target, state_len, target_len
                )
            }
            InvariantError::SentinelReachabilityMismatch { state, sentinel } => {
                if *sentinel {
                    write!(f, "sentinel state {} is reachable without sentinels", state)
                } else {
                    write!(f, "state {} is unreachable from the root", state)
                }
            }
            InvariantError::CountNotMonotonic {
                state,
                target,
                state_count,
                target_count,
            } => {
                write!(
                    f,
                    "transition {} -> {} increases occurrences ({} -> {})",
                    state, target, state_count, target_count
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Tallies produced by a successful verification, consumed by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub states: usize,
    pub transitions: usize,
    pub clones: usize,
    pub sentinel_states: usize,
    pub reachable_states: usize,
    pub max_len: usize,
    pub annotated: bool,
}

/// Check every structural invariant, returning tallies on success.
pub fn verify_automaton(automaton: &Automaton) -> Result<VerificationReport, InvariantError> {
    let n = automaton.num_states();
    let root = automaton.state(StateId::ROOT);
    if root.len != 0 || root.link.is_some() || root.sentinel {
        return Err(InvariantError::MalformedRoot);
    }

    let mut transitions = 0;
    let mut clones = 0;
    let mut sentinel_states = 0;
    let mut max_len = 0;

    for (idx, state) in automaton.states().enumerate() {
        let id = idx as u32;
        max_len = max_len.max(state.len);
        if state.origin == Origin::Clone {
            clones += 1;
        }
        if state.sentinel {
            sentinel_states += 1;
        }

        if idx != 0 {
            match state.link {
                None => return Err(InvariantError::MissingLink { state: id }),
                Some(link) if link.as_usize() >= n => {
                    return Err(InvariantError::LinkOutOfBounds {
                        state: id,
                        link: link.get(),
                    })
                }
                Some(link) => {
                    let link_len = automaton.state(link).len;
                    if link_len >= state.len {
                        return Err(InvariantError::LinkLengthNotDecreasing {
                            state: id,
                            len: state.len,
                            link_len,
                        });
                    }
                }
            }
        }

        for &target in state.transitions.values() {
            transitions += 1;
            if target.as_usize() >= n {
                return Err(InvariantError::TransitionOutOfBounds {
                    state: id,
                    target: target.get(),
                });
            }
            let target_len = automaton.state(target).len;
            if target_len < state.len + 1 {
                return Err(InvariantError::TransitionLengthInvalid {
                    state: id,
                    target: target.get(),
                    state_len: state.len,
                    target_len,
                });
            }
        }
    }

    let reachable = automaton.reachable();
    for (idx, state) in automaton.states().enumerate() {
        if reachable[idx] == state.sentinel {
            return Err(InvariantError::SentinelReachabilityMismatch {
                state: idx as u32,
                sentinel: state.sentinel,
            });
        }
    }

    if automaton.is_annotated() {
        check_count_monotonicity(automaton, &reachable)?;
    }

    Ok(VerificationReport {
        states: n,
        transitions,
        clones,
        sentinel_states,
        reachable_states: reachable.iter().filter(|&&r| r).count(),
        max_len,
        annotated: automaton.is_annotated(),
    })
}

/// Extending a substring can only shrink its set of ending positions, so
/// counts must be non-increasing along every reachable transition path.
fn check_count_monotonicity(
    automaton: &Automaton,
    reachable: &[bool],
) -> Result<(), InvariantError> {
    for (idx, state) in automaton.states().enumerate().skip(1) {
        if !reachable[idx] || state.sentinel {
            continue;
        }
        for (&sym, &target) in &state.transitions {
            if sym.is_sentinel() {
                continue;
            }
            let target_count = automaton.state(target).occurrences;
            if target_count > state.occurrences {
                return Err(InvariantError::CountNotMonotonic {
                    state: idx as u32,
                    target: target.get(),
                    state_count: state.occurrences,
                    target_count,
                });
            }
        }
    }
    Ok(())
}
