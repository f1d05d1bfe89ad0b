//! Shared test helpers.

use mwallet_seed::{SeedVault, VaultParams};
use mwallet_store::{MultiWallet, MultiWalletConfig};
use tempfile::TempDir;

/// scrypt parameters cheap enough to run hundreds of times per test.
pub fn fast_vault() -> SeedVault {
    SeedVault::new(VaultParams {
        log_n: 10,
        r: 8,
        p: 1,
    })
}

/// A multi-wallet rooted in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the wallet is used.
pub fn temp_multiwallet() -> (MultiWallet, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = MultiWalletConfig {
        root_dir: dir.path().join("mwallet"),
        ..MultiWalletConfig::default()
    };
    let mw = MultiWallet::open(config).unwrap().with_vault(fast_vault());
    (mw, dir)
}

/// A deterministic seed of `len` bytes.
pub fn seed_of_len(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(151).wrapping_add(7)).collect()
}
