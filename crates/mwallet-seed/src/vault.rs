//! Passphrase encryption of wallet seeds at rest.
//!
//! The key is scrypt over the passphrase with an empty salt, so a
//! passphrase always maps to the same key and the blob needs to carry
//! nothing but the nonce. Sealing is NaCl `crypto_secretbox`
//! (XSalsa20-Poly1305), which keeps blobs readable by any NaCl
//! implementation holding the same key.
//!
//! # Wire format
//! ```text
//! nonce (24 bytes) || auth_tag (16 bytes) || ciphertext
//! ```
//!
//! Opening never reveals *why* it failed: a wrong passphrase, a truncated
//! blob and a flipped bit all come back as
//! [`ErrorKind::InvalidPassphrase`](mwallet_core::ErrorKind::InvalidPassphrase).

use std::fmt;
use std::time::Instant;

use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Key, Nonce, XSalsa20Poly1305};
use mwallet_core::constants::{VAULT_KEY_LEN, VAULT_SCRYPT_LOG_N, VAULT_SCRYPT_P, VAULT_SCRYPT_R};
use mwallet_core::{Error, ErrorKind, Op};
use rand::RngCore;
use scrypt::Params;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// XSalsa20 nonce length in bytes.
const NONCE_LEN: usize = 24;

/// Poly1305 authentication tag length in bytes.
const TAG_LEN: usize = 16;

/// scrypt cost parameters.
///
/// | Parameter | Default | Meaning |
/// |-----------|---------|---------|
/// | `log_n`   | 15      | log2 of the CPU/memory cost `N` (32 MiB at `r = 8`) |
/// | `r`       | 8       | Block size |
/// | `p`       | 1       | Parallelism |
///
/// The defaults are part of the blob format: a seed sealed under one set of
/// parameters only opens under the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultParams {
    /// log2 of `N`. Must be below `16 * r`.
    pub log_n: u8,
    /// Block size. Must be at least 1.
    pub r: u32,
    /// Parallelism. Must be at least 1.
    pub p: u32,
}

impl Default for VaultParams {
    fn default() -> Self {
        Self {
            log_n: VAULT_SCRYPT_LOG_N,
            r: VAULT_SCRYPT_R,
            p: VAULT_SCRYPT_P,
        }
    }
}

/// A 256-bit seed encryption key, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey([u8; VAULT_KEY_LEN]);

impl VaultKey {
    pub fn as_bytes(&self) -> &[u8; VAULT_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VaultKey").field(&"[REDACTED]").finish()
    }
}

/// Seals and opens seeds under a passphrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedVault {
    params: VaultParams,
}

impl SeedVault {
    pub fn new(params: VaultParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> VaultParams {
        self.params
    }

    /// Derive the encryption key for `passphrase`.
    ///
    /// Deterministic: the same passphrase and parameters always give the
    /// same key. Deliberately slow; blocks the calling thread.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DerivationFailure`] if scrypt rejects the parameters.
    pub fn derive_key(&self, passphrase: &[u8]) -> Result<VaultKey, Error> {
        const OP: Op = "vault::derive_key";

        let params = Params::new(self.params.log_n, self.params.r, self.params.p, VAULT_KEY_LEN)
            .map_err(|e| Error::derivation(OP, e))?;

        let started = Instant::now();
        let mut key = VaultKey([0u8; VAULT_KEY_LEN]);
        scrypt::scrypt(passphrase, &[], &params, &mut key.0)
            .map_err(|e| Error::derivation(OP, e))?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "vault key derived");

        Ok(key)
    }

    /// Encrypt `seed` under `passphrase`.
    ///
    /// Every call draws a fresh random nonce, so sealing the same seed twice
    /// gives different blobs.
    ///
    /// # Errors
    ///
    /// Only key derivation can fail, see [`derive_key`](Self::derive_key).
    pub fn seal(&self, passphrase: &[u8], seed: &str) -> Result<Vec<u8>, Error> {
        const OP: Op = "vault::seal";

        let key = self.derive_key(passphrase).map_err(|e| e.context(OP))?;
        let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_bytes()));

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), seed.as_bytes())
            .map_err(|_| Error::new(OP, ErrorKind::Encoding, "seed too large to seal"))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&sealed);
        Ok(blob)
    }

    /// Decrypt a blob produced by [`seal`](Self::seal).
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::DerivationFailure`] if the key cannot be derived.
    /// - [`ErrorKind::InvalidPassphrase`] for every other failure: wrong
    ///   passphrase, truncated or tampered blob, or a plaintext that is not
    ///   UTF-8.
    pub fn open(&self, passphrase: &[u8], blob: &[u8]) -> Result<String, Error> {
        const OP: Op = "vault::open";

        let key = self.derive_key(passphrase).map_err(|e| e.context(OP))?;
        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(Error::invalid_passphrase(OP));
        }
        let (nonce_bytes, sealed) = blob.split_at(NONCE_LEN);

        let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_bytes()));
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| Error::invalid_passphrase(OP))?;

        String::from_utf8(plaintext).map_err(|e| {
            e.into_bytes().zeroize();
            Error::invalid_passphrase(OP)
        })
    }
}

/// [`SeedVault::derive_key`] with the default parameters.
pub fn derive_key(passphrase: &[u8]) -> Result<VaultKey, Error> {
    SeedVault::default().derive_key(passphrase)
}

/// [`SeedVault::seal`] with the default parameters.
pub fn seal(passphrase: &[u8], seed: &str) -> Result<Vec<u8>, Error> {
    SeedVault::default().seal(passphrase, seed)
}

/// [`SeedVault::open`] with the default parameters.
pub fn open(passphrase: &[u8], blob: &[u8]) -> Result<String, Error> {
    SeedVault::default().open(passphrase, blob)
}
