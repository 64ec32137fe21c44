//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test builds its automaton the
//! same way.

#![doc(hidden)]

use crate::counts::annotate;
use crate::encode::{encode_collection, Alphabet};
use crate::types::Automaton;

/// Build and annotate an automaton over `words` with the unrestricted
/// alphabet. The canonical fixture for tests.
pub fn annotated(words: &[&str]) -> Automaton {
    let texts: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    let encoded = encode_collection(&texts, &Alphabet::any()).expect("test words encode");
    let mut automaton = crate::automaton::build(&encoded);
    annotate(&mut automaton);
    automaton
}

/// Like [`annotated`] but restricted to the lowercase alphabet, for tests
/// exercising alphabet validation alongside queries.
pub fn annotated_lowercase(words: &[&str]) -> Automaton {
    let texts: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    let encoded =
        encode_collection(&texts, &Alphabet::lowercase()).expect("test words are lowercase");
    let mut automaton = crate::automaton::build(&encoded);
    annotate(&mut automaton);
    automaton
}
