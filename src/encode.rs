//! Sequence encoding: words in, sentinel-terminated symbol sequences out.
//!
//! The encoder is the only place input validation happens. Everything past
//! it works on [`Symbol`] sequences that are guaranteed to be inside the
//! configured alphabet, so the automaton builder and the query layer never
//! have to worry about malformed input.
//!
//! Each word gets the shared [`Symbol::SENTINEL`] appended. One sentinel
//! value is enough for the whole collection because construction resets its
//! active-state pointer before every word and flags sentinel-created states,
//! keeping sentinel-terminated suffixes out of counts and enumeration.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which characters the collection is allowed to contain.
///
/// Membership is checked per symbol at encode time; the first violation
/// surfaces as [`EncodeError::InvalidSymbol`].
#[derive(Debug, Clone, Default)]
pub enum Alphabet {
    /// Any Unicode scalar value.
    #[default]
    Any,
    /// ASCII graphic characters and space.
    Ascii,
    /// Lowercase ASCII letters `a..=z`.
    Lowercase,
    /// An explicit character set.
    Custom(HashSet<char>),
}

impl Alphabet {
    /// Alphabet accepting everything.
    pub fn any() -> Self {
        Alphabet::Any
    }

    /// ASCII graphic characters and space.
    pub fn ascii() -> Self {
        Alphabet::Ascii
    }

    /// Lowercase ASCII letters only.
    pub fn lowercase() -> Self {
        Alphabet::Lowercase
    }

    /// An explicit character set.
    pub fn of(chars: impl IntoIterator<Item = char>) -> Self {
        Alphabet::Custom(chars.into_iter().collect())
    }

    /// Is `c` a member of this alphabet?
    pub fn contains(&self, c: char) -> bool {
        match self {
            Alphabet::Any => true,
            Alphabet::Ascii => c == ' ' || c.is_ascii_graphic(),
            Alphabet::Lowercase => c.is_ascii_lowercase(),
            Alphabet::Custom(set) => set.contains(&c),
        }
    }
}

/// Error type for encoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeError {
    /// A character outside the configured alphabet. Not recoverable locally;
    /// propagated to the caller at encode time.
    InvalidSymbol {
        /// Index of the offending word in the collection.
        word: usize,
        /// Character offset of the offending symbol within the word.
        position: usize,
        /// The symbol itself.
        symbol: char,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidSymbol {
                word,
                position,
                symbol,
            } => {
                write!(
                    f,
                    "symbol {:?} at word {}, position {} is outside the configured alphabet",
                    symbol, word, position
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// One word, encoded and sentinel-terminated, ready for the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord {
    /// The word's symbols with the trailing [`Symbol::SENTINEL`].
    pub symbols: Vec<Symbol>,
}

impl EncodedWord {
    /// Number of real (non-sentinel) symbols.
    pub fn len(&self) -> usize {
        self.symbols.len() - 1
    }

    /// True when the word had no characters (the sequence is just the
    /// sentinel).
    pub fn is_empty(&self) -> bool {
        self.symbols.len() == 1
    }
}

/// Encode one word against `alphabet`, appending the sentinel.
///
/// `word_index` is only used to report the location of a bad symbol.
pub fn encode_word(
    text: &str,
    alphabet: &Alphabet,
    word_index: usize,
) -> Result<EncodedWord, EncodeError> {
    let mut symbols = Vec::with_capacity(text.chars().count() + 1);
    for (position, c) in text.chars().enumerate() {
        if !alphabet.contains(c) {
            return Err(EncodeError::InvalidSymbol {
                word: word_index,
                position,
                symbol: c,
            });
        }
        symbols.push(Symbol::from_char(c));
    }
    symbols.push(Symbol::SENTINEL);
    Ok(EncodedWord { symbols })
}

/// Encode the whole collection, preserving word order.
///
/// Pure transformation: the input is untouched and an empty collection
/// yields an empty output (which in turn builds the degenerate root-only
/// automaton).
pub fn encode_collection(
    texts: &[String],
    alphabet: &Alphabet,
) -> Result<Vec<EncodedWord>, EncodeError> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| encode_word(text, alphabet, i))
        .collect()
}

/// Encode a query string: same validation, no sentinel.
///
/// Used by the piece predicate and the factorizer, whose inputs walk the
/// automaton but never extend it.
pub fn encode_query(text: &str, alphabet: &Alphabet) -> Result<Vec<Symbol>, EncodeError> {
    let mut symbols = Vec::with_capacity(text.chars().count());
    for (position, c) in text.chars().enumerate() {
        if !alphabet.contains(c) {
            return Err(EncodeError::InvalidSymbol {
                word: 0,
                position,
                symbol: c,
            });
        }
        symbols.push(Symbol::from_char(c));
    }
    Ok(symbols)
}
