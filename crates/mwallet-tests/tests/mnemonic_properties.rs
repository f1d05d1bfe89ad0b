//! Property tests for the mnemonic codec and the user-input decoder.

use mwallet_core::constants::{MAX_SEED_BYTES, MIN_SEED_BYTES};
use mwallet_core::ErrorKind;
use mwallet_seed::wordlist::{word_index, word_list};
use mwallet_seed::{
    byte_to_word, checksum_byte, decode_user_input, decode_user_input_with_bounds, encode,
};
use mwallet_tests::helpers::seed_of_len;
use proptest::prelude::*;

fn seed_in_bounds() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MIN_SEED_BYTES..=MAX_SEED_BYTES)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn phrase_roundtrip(seed in seed_in_bounds()) {
        let phrase = encode(&seed);
        prop_assert_eq!(phrase.split(' ').count(), seed.len() + 1);
        prop_assert_eq!(decode_user_input(&phrase).unwrap(), seed);
    }

    #[test]
    fn hex_roundtrip(seed in seed_in_bounds()) {
        prop_assert_eq!(decode_user_input(&to_hex(&seed)).unwrap(), seed);
    }

    #[test]
    fn removing_a_data_word_is_a_parity_error(
        seed in seed_in_bounds(),
        idx in any::<prop::sample::Index>(),
    ) {
        let phrase = encode(&seed);
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let removed = idx.index(seed.len());
        words.remove(removed);

        let err = decode_user_input(&words.join(" ")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Encoding);
        let expected = format!("is not valid at position {removed}");
        prop_assert!(err.to_string().contains(&expected), "{}", err);
    }

    #[test]
    fn duplicating_a_word_is_a_parity_error(
        seed in seed_in_bounds(),
        idx in any::<prop::sample::Index>(),
    ) {
        let phrase = encode(&seed);
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let dup = idx.index(words.len());
        words.insert(dup, words[dup]);

        let err = decode_user_input(&words.join(" ")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Encoding);
        let expected = format!("is not valid at position {}", dup + 1);
        prop_assert!(err.to_string().contains(&expected), "{}", err);
    }

    #[test]
    fn swapping_a_data_word_fails_unless_checksum_collides(
        seed in seed_in_bounds(),
        idx in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let pos = idx.index(seed.len());
        let mut altered = seed.clone();
        altered[pos] = altered[pos].wrapping_add(delta);

        let phrase = encode(&seed);
        let mut words: Vec<&str> = phrase.split(' ').collect();
        words[pos] = byte_to_word(altered[pos], pos);
        let result = decode_user_input(&words.join(" "));

        if checksum_byte(&altered) == checksum_byte(&seed) {
            prop_assert_eq!(result.unwrap(), altered);
        } else {
            let err = result.unwrap_err();
            prop_assert!(err.to_string().contains("checksum mismatch"), "{}", err);
        }
    }

    #[test]
    fn some_bit_flip_changes_the_checksum_word(seed in seed_in_bounds()) {
        let original = byte_to_word(checksum_byte(&seed), seed.len());
        let changed = (0..seed.len() * 8).any(|bit| {
            let mut flipped = seed.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);
            byte_to_word(checksum_byte(&flipped), seed.len()) != original
        });
        prop_assert!(changed);
    }

    #[test]
    fn length_gate(len in 1usize..=2 * MAX_SEED_BYTES) {
        let seed = seed_of_len(len);
        let result = decode_user_input(&encode(&seed));
        if (MIN_SEED_BYTES..=MAX_SEED_BYTES).contains(&len) {
            prop_assert_eq!(result.unwrap(), seed);
        } else {
            let err = result.unwrap_err();
            let expected = format!("invalid seed length {len}");
            prop_assert!(err.to_string().contains(&expected), "{}", err);
        }
    }

    #[test]
    fn word_case_and_spacing_do_not_matter(seed in seed_in_bounds()) {
        let phrase = encode(&seed).to_uppercase().replace(' ', "   ");
        prop_assert_eq!(decode_user_input(&format!("\t{phrase}\n")).unwrap(), seed);
    }
}

#[test]
fn same_byte_at_even_and_odd_positions() {
    assert_eq!(byte_to_word(0x00, 0), word_list()[0]);
    assert_eq!(byte_to_word(0x00, 1), word_list()[1]);
    assert_ne!(byte_to_word(0x00, 0), byte_to_word(0x00, 1));
    assert_eq!(word_index(byte_to_word(0x00, 1)), Some(1));
}

#[test]
fn single_hex_token_bypasses_the_mnemonic_path() {
    assert_eq!(
        decode_user_input_with_bounds("deadbeef", 1..=MAX_SEED_BYTES).unwrap(),
        vec![0xDE, 0xAD, 0xBE, 0xEF]
    );
    // Under the default bounds the same four bytes are too short.
    let err = decode_user_input("deadbeef").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
    assert!(err.to_string().contains("invalid seed length 4"), "{err}");
}

#[test]
fn altered_checksum_word_is_a_checksum_mismatch() {
    let seed = seed_of_len(32);
    let phrase = encode(&seed);
    let mut words: Vec<&str> = phrase.split(' ').collect();
    let last = words.len() - 1;
    words[last] = byte_to_word(checksum_byte(&seed) ^ 0x80, last);

    let err = decode_user_input(&words.join(" ")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
    assert!(err.to_string().contains("checksum mismatch"), "{err}");
}
