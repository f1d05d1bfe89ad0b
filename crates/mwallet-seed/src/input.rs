//! Seeds as typed by users, and fresh seed generation.

use std::ops::RangeInclusive;

use mwallet_core::constants::{MAX_SEED_BYTES, MIN_SEED_BYTES, RECOMMENDED_SEED_BYTES};
use mwallet_core::{EncodingError, Error, Op};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::mnemonic::{self, checksum_byte};

/// Decode a seed entered either as a single hex string or as a word phrase
/// ending in a checksum word.
///
/// Input is trimmed and split on single spaces. One token is read as hex;
/// several tokens as a phrase, whose checksum word is verified and
/// stripped. Whatever the branch, the resulting seed must be between
/// [`MIN_SEED_BYTES`] and [`MAX_SEED_BYTES`] long.
///
/// A phrase that decodes to fewer than two bytes (nothing to check the
/// checksum against) yields an empty seed, which the length check rejects.
///
/// The returned bytes are secret; the caller zeroes them when done.
///
/// # Errors
///
/// [`ErrorKind::Encoding`](mwallet_core::ErrorKind::Encoding) for malformed
/// hex, unknown or misplaced words, a checksum mismatch or a bad length.
pub fn decode_user_input(input: &str) -> Result<Vec<u8>, Error> {
    decode_user_input_with_bounds(input, MIN_SEED_BYTES..=MAX_SEED_BYTES)
}

/// [`decode_user_input`] with the accepted seed lengths supplied by the
/// caller, for key derivation schemes with other bounds.
pub fn decode_user_input_with_bounds(
    input: &str,
    bounds: RangeInclusive<usize>,
) -> Result<Vec<u8>, Error> {
    const OP: Op = "input::decode_user_input";

    let words: Vec<&str> = input.trim().split(' ').collect();
    let mut seed = match words.as_slice() {
        [hex_seed] => Zeroizing::new(
            hex::decode(hex_seed)
                .map_err(|e| Error::encoding(OP, EncodingError::InvalidHex(e.to_string())))?,
        ),
        words => {
            let mut decoded = Zeroizing::new(mnemonic::decode(words).map_err(|e| e.context(OP))?);
            // At least one data byte plus the checksum byte.
            if decoded.len() < 2 {
                Zeroizing::new(Vec::new())
            } else {
                let data_len = decoded.len() - 1;
                if checksum_byte(&decoded[..data_len]) != decoded[data_len] {
                    return Err(Error::encoding(OP, EncodingError::ChecksumMismatch));
                }
                decoded[data_len] = 0;
                decoded.truncate(data_len);
                decoded
            }
        }
    };

    if !bounds.contains(&seed.len()) {
        return Err(Error::encoding(
            OP,
            EncodingError::InvalidSeedLength {
                len: seed.len(),
                min: *bounds.start(),
                max: *bounds.end(),
            },
        ));
    }
    Ok(std::mem::take(&mut *seed))
}

/// Whether `input` decodes to a usable seed.
pub fn verify_seed(input: &str) -> bool {
    decode_user_input(input).map(Zeroizing::new).is_ok()
}

/// A new random seed of [`RECOMMENDED_SEED_BYTES`] from the OS CSPRNG.
pub fn generate_seed() -> Zeroizing<Vec<u8>> {
    let mut seed = Zeroizing::new(vec![0u8; RECOMMENDED_SEED_BYTES]);
    rand::rngs::OsRng.fill_bytes(&mut seed);
    seed
}

/// A new random seed, already encoded as a word phrase.
pub fn generate_mnemonic() -> Zeroizing<String> {
    let seed = generate_seed();
    Zeroizing::new(mnemonic::encode(&seed))
}
