//! Encoder behavior: validation, sentinel termination, error reporting.

use morsel::{encode_collection, encode_query, encode_word, Alphabet, EncodeError, Symbol};

use super::common::words;

#[test]
fn each_word_ends_with_the_shared_sentinel() {
    let encoded = encode_collection(&words(&["ab", "ba", ""]), &Alphabet::any()).unwrap();
    assert_eq!(encoded.len(), 3);
    for word in &encoded {
        assert_eq!(word.symbols.last(), Some(&Symbol::SENTINEL));
        assert_eq!(
            word.symbols.iter().filter(|s| s.is_sentinel()).count(),
            1,
            "exactly one sentinel per word"
        );
    }
}

#[test]
fn alphabet_matrix() {
    let cases: &[(&str, Alphabet, bool)] = &[
        ("hello", Alphabet::lowercase(), true),
        ("heLlo", Alphabet::lowercase(), false),
        ("hello world!", Alphabet::ascii(), true),
        ("héllo", Alphabet::ascii(), false),
        ("héllo", Alphabet::any(), true),
        ("gattaca", Alphabet::of("acgt".chars()), true),
        ("gattaca!", Alphabet::of("acgt".chars()), false),
    ];
    for (text, alphabet, ok) in cases {
        assert_eq!(
            encode_word(text, alphabet, 0).is_ok(),
            *ok,
            "{text:?} against {alphabet:?}"
        );
    }
}

#[test]
fn error_pinpoints_word_and_position() {
    let err = encode_collection(&words(&["fine", "als0"]), &Alphabet::lowercase()).unwrap_err();
    assert_eq!(
        err,
        EncodeError::InvalidSymbol {
            word: 1,
            position: 3,
            symbol: '0',
        }
    );
    let rendered = err.to_string();
    assert!(rendered.contains("word 1"));
    assert!(rendered.contains("position 3"));
}

#[test]
fn multibyte_positions_are_character_offsets() {
    let err = encode_word("日本語X", &Alphabet::of("日本語".chars()), 0).unwrap_err();
    match err {
        EncodeError::InvalidSymbol { position, symbol, .. } => {
            assert_eq!(position, 3);
            assert_eq!(symbol, 'X');
        }
    }
}

#[test]
fn queries_validate_but_stay_unterminated() {
    let symbols = encode_query("abc", &Alphabet::any()).unwrap();
    assert_eq!(symbols.len(), 3);
    assert!(!symbols.iter().any(|s| s.is_sentinel()));

    assert!(encode_query("a!c", &Alphabet::lowercase()).is_err());
}
