// Unit tests for the hex codec
// Properties are checked against the `hex` crate as an independent decoder

use crate::hex::{HexText, encode, try_encode};

use proptest::prelude::*;

/// **VALUE**: Pins the exact output for a known input.
///
/// **WHY THIS MATTERS**: Callers decode the text with SQL `decode(..., 'hex')` or
/// equivalent. Lowercase digits or swapped nibbles would still "look" like hex but
/// decode to different bytes.
///
/// **BUG THIS CATCHES**: Would catch a lowercase alphabet or low-nibble-first order.
#[test]
fn given_known_bytes_when_encoded_then_produces_uppercase_high_nibble_first() {
    // GIVEN: Bytes covering both nibbles
    let bytes = [0x00, 0x0F, 0xA5, 0xFF, b'a'];

    // WHEN: Encoding
    let text = encode(&bytes);

    // THEN: Exact uppercase digits, high nibble first
    assert_eq!(text.as_str(), "000FA5FF61");
}

#[test]
fn given_empty_input_when_encoded_then_returns_empty_text() {
    let text = encode(&[]);

    assert!(text.is_empty());
    assert_eq!(text, HexText::default());
}

/// **VALUE**: Verifies the full byte range round-trips through a standard decoder.
///
/// **WHY THIS MATTERS**: Binary files and command output contain every byte value.
/// A single wrong table entry corrupts data silently.
///
/// **BUG THIS CATCHES**: Would catch an alphabet typo or a sign-extension bug on bytes
/// >= 0x80.
#[test]
fn given_all_byte_values_when_encoded_then_decodes_back() {
    // GIVEN: Every byte value 0-255
    let bytes: Vec<u8> = (0..=255).collect();

    // WHEN: Encoding
    let text = encode(&bytes);

    // THEN: Decodes back exactly
    assert_eq!(text.len(), 512);
    assert_eq!(text.source_len(), 256);
    assert_eq!(::hex::decode(text.as_str()).unwrap(), bytes);
}

#[test]
fn given_bytes_when_try_encoded_then_matches_encode() {
    let bytes = b"pg_sys\n\0\xff";

    assert_eq!(try_encode(bytes).unwrap(), encode(bytes));
}

/// **VALUE**: Verifies the fallible encoder emits uppercase digits for every byte value.
///
/// **WHY THIS MATTERS**: `read_file` and `eval` go through `try_encode`, not `encode`.
/// The standard encoder it fills produces lowercase digits that must be raised.
///
/// **BUG THIS CATCHES**: Would catch dropping the uppercase pass or sizing the digit
/// buffer wrong.
#[test]
fn given_all_byte_values_when_try_encoded_then_matches_uppercase_encoder() {
    // GIVEN: Every byte value 0-255
    let bytes: Vec<u8> = (0..=255).collect();

    // WHEN: Encoding through the fallible path
    let text = try_encode(&bytes).unwrap();

    // THEN: Same text as the standard uppercase encoder
    assert_eq!(text.as_str(), ::hex::encode_upper(&bytes));
    assert!(text.as_str().ends_with("FEFF"));
}

#[test]
fn given_empty_input_when_try_encoded_then_returns_empty_text() {
    let text = try_encode(&[]).unwrap();

    assert_eq!(text, HexText::default());
}

proptest! {
    #[test]
    fn encoded_length_is_twice_the_input(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = encode(&bytes);
        prop_assert_eq!(text.len(), bytes.len() * 2);
    }

    #[test]
    fn encoded_text_uses_only_uppercase_hex_digits(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = encode(&bytes);
        prop_assert!(text.as_str().bytes().all(|c| matches!(c, b'0'..=b'9' | b'A'..=b'F')));
    }

    #[test]
    fn encoded_text_decodes_to_input(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let text = encode(&bytes);
        prop_assert_eq!(::hex::decode(text.as_str()).unwrap(), bytes);
    }

    #[test]
    fn each_pair_encodes_one_byte(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let text = encode(&bytes);
        for (i, pair) in text.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(pair).unwrap();
            prop_assert_eq!(u8::from_str_radix(pair, 16).unwrap(), bytes[i]);
        }
    }
}
