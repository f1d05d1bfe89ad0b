//! # mwallet-seed
//! Seed encoding and seed encryption.
//!
//! Converts binary wallet seeds to and from a human-verifiable word phrase,
//! and seals seeds at rest under a passphrase.
//!
//! # Modules
//!
//! - [`wordlist`]: the 512-word alternating table and its reverse index
//! - [`mnemonic`]: position-sensitive word encoding with a checksum word
//! - [`input`]: decoding of user-typed seeds (hex or words), seed generation
//! - [`vault`]: scrypt + XSalsa20-Poly1305 seed encryption
//!
//! Seed bytes returned by this crate are owned by the caller, who is
//! responsible for zeroing them once done. Generated seeds come wrapped in
//! [`zeroize::Zeroizing`].

pub mod input;
pub mod mnemonic;
pub mod vault;
pub mod wordlist;

pub use input::{
    decode_user_input, decode_user_input_with_bounds, generate_mnemonic, generate_seed, verify_seed,
};
pub use mnemonic::{checksum_byte, decode, encode};
pub use vault::{SeedVault, VaultKey, VaultParams};
pub use wordlist::{byte_to_word, word_list};
