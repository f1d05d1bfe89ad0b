//! Word-phrase encoding of binary seeds.
//!
//! Each byte becomes one word of the alternating table, picked by the byte
//! value and the parity of its position, followed by one checksum word.
//! Parity makes a dropped, duplicated or swapped word detectable on its own;
//! the checksum catches the rest.

use mwallet_core::{EncodingError, Error, Op};
use sha2::{Digest, Sha256};

use crate::wordlist::{byte_to_word, word_index};

/// First byte of `SHA-256(SHA-256(data))`.
pub fn checksum_byte(data: &[u8]) -> u8 {
    let intermediate = Sha256::digest(data);
    Sha256::digest(intermediate)[0]
}

/// Encode `seed` as a space-separated phrase ending in a checksum word.
///
/// The checksum word is spelled as the byte at position `seed.len()`.
pub fn encode(seed: &[u8]) -> String {
    let checksum = checksum_byte(seed);
    seed.iter()
        .chain(std::iter::once(&checksum))
        .enumerate()
        .map(|(i, &b)| byte_to_word(b, i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a sequence of words back to bytes.
///
/// Blank words are skipped. The result includes the trailing checksum byte;
/// verifying it is up to the caller (see [`crate::input::decode_user_input`]).
///
/// # Errors
///
/// [`ErrorKind::Encoding`](mwallet_core::ErrorKind::Encoding) when a word is
/// not in the table, or when its parity does not match its position.
pub fn decode<I>(words: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    const OP: Op = "mnemonic::decode";

    let mut decoded = Vec::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        let index = word_index(word)
            .ok_or_else(|| Error::encoding(OP, EncodingError::UnknownWord(word.to_string())))?;
        let position = decoded.len();
        if usize::from(index % 2) != position % 2 {
            return Err(Error::encoding(
                OP,
                EncodingError::WordOutOfPlace {
                    word: word.to_string(),
                    position,
                },
            ));
        }
        decoded.push((index / 2) as u8);
    }
    Ok(decoded)
}
