//! Seed, vault and storage constants.

/// Minimum master seed length in bytes (BIP-32).
pub const MIN_SEED_BYTES: usize = 16;

/// Maximum master seed length in bytes (BIP-32).
pub const MAX_SEED_BYTES: usize = 64;

/// Seed length used when generating new seeds (BIP-32 recommendation).
pub const RECOMMENDED_SEED_BYTES: usize = 32;

/// Number of entries in the word table. Even indices and odd indices form
/// the two 256-word parity classes.
pub const WORD_LIST_LEN: usize = 512;

/// log2 of the scrypt cost `N` for the seed vault KDF (N = 32768).
pub const VAULT_SCRYPT_LOG_N: u8 = 15;

/// scrypt block size `r` for the seed vault KDF.
pub const VAULT_SCRYPT_R: u32 = 8;

/// scrypt parallelism `p` for the seed vault KDF.
pub const VAULT_SCRYPT_P: u32 = 1;

/// Length of the key produced by the seed vault KDF (XSalsa20 key).
pub const VAULT_KEY_LEN: usize = 32;

/// Public passphrase used to open a wallet when the user has not set one.
pub const INSECURE_PUB_PASSPHRASE: &str = "public";

/// Default database file name inside the multi-wallet root directory.
pub const WALLETS_DB_NAME: &str = "wallets.db";

/// Default log file name inside the multi-wallet root directory.
pub const LOG_FILE_NAME: &str = "mwallet.log";

/// Metadata key holding the startup passphrase hash.
pub const STARTUP_PASSPHRASE_FIELD: &[u8] = b"startup-passphrase";
