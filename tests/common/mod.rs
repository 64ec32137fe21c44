//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical fixtures from morsel::testing
pub use morsel::testing::{annotated, annotated_lowercase};

/// Convenience: owned strings from literals.
pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|w| w.to_string()).collect()
}

/// Join factorization pieces back into the word they came from.
pub fn joined(pieces: &[morsel::Piece]) -> String {
    pieces.iter().map(|p| p.text.as_str()).collect()
}
