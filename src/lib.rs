//! Subword statistics and greedy piece factorization over a generalized
//! suffix automaton.
//!
//! One structure, built once over the whole word collection, answers both
//! problems this crate cares about: ranking every distinct subword by
//! `length * occurrences`, and factoring each word into maximal "pieces"
//! (substrings occurring at least twice anywhere in the collection).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  encode.rs  │────▶│ automaton.rs │────▶│  counts.rs  │
//! │ (Alphabet,  │     │ (build,      │     │ (annotate)  │
//! │  sentinels) │     │  Builder)    │     │             │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//!                          ┌──────────────────────┴──────┐
//!                          ▼                             ▼
//!                   ┌──────────────┐              ┌─────────────┐
//!                   │   rank.rs    │              │  factor.rs  │
//!                   │ (rank, rank_ │              │ (is_piece,  │
//!                   │  strings)    │              │  factorize) │
//!                   └──────────────┘              └─────────────┘
//! ```
//!
//! Data flows strictly downward: the reporter and the factorizer both read
//! the same built, annotated, immutable automaton, so it is constructed
//! exactly once and then shared freely across threads.
//!
//! # Usage
//!
//! ```
//! use morsel::{annotate, build, encode_collection, factorize, is_piece, rank_strings, Alphabet};
//!
//! let words = vec!["banana".to_string(), "ananas".to_string()];
//! let encoded = encode_collection(&words, &Alphabet::any())?;
//! let mut automaton = build(&encoded);
//! annotate(&mut automaton);
//!
//! assert!(is_piece(&automaton, "ana"));
//! let ranked = rank_strings(&automaton);
//! assert_eq!(ranked[0].text, "ana");
//!
//! let pieces = factorize(&automaton, "banana");
//! let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
//! assert_eq!(joined, "banana");
//! # Ok::<(), morsel::EncodeError>(())
//! ```

// Module declarations
mod automaton;
mod counts;
mod encode;
mod factor;
mod rank;
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use automaton::{build, Builder};
pub use counts::annotate;
pub use encode::{
    encode_collection, encode_query, encode_word, Alphabet, EncodeError, EncodedWord,
};
pub use factor::{
    factorize, factorize_all, factorize_strict, is_piece, MIN_PIECE_OCCURRENCES,
};
pub use rank::{rank, rank_strings, representative};
pub use types::{
    Automaton, EndPos, Origin, Piece, RankedSubword, ScoreEntry, State, StateId, Symbol,
};
pub use utils::{normalize, read_words};
pub use verify::{verify_automaton, InvariantError, VerificationReport};
