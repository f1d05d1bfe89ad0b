//! The multi-wallet façade.
//!
//! [`MultiWallet`] owns the configuration and the wallets database, and
//! provides the utilities shared by every wallet it manages: batched
//! database writes, the optional startup passphrase, temporary wallet
//! loading and encrypted seed persistence.

use std::fs;
use std::io;
use std::path::Path;

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use mwallet_core::constants::{INSECURE_PUB_PASSPHRASE, STARTUP_PASSPHRASE_FIELD};
use mwallet_core::{run_batch, Error, ErrorKind, Op, WalletLoader};
use mwallet_seed::SeedVault;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::config::MultiWalletConfig;
use crate::error::MultiWalletError;
use crate::storage::{WalletsDb, WalletsTx};

/// Shared state and utilities of a set of wallets living under one root
/// directory.
pub struct MultiWallet {
    config: MultiWalletConfig,
    db: WalletsDb,
    vault: SeedVault,
}

impl MultiWallet {
    /// Create the root directory if needed and open the wallets database.
    pub fn open(config: MultiWalletConfig) -> Result<Self, MultiWalletError> {
        fs::create_dir_all(&config.root_dir)?;
        let db = WalletsDb::open(config.db_path())?;
        info!(root_dir = %config.root_dir.display(), "multi-wallet opened");

        Ok(Self {
            config,
            db,
            vault: SeedVault::default(),
        })
    }

    /// Use `vault` for seed encryption instead of the default parameters.
    pub fn with_vault(mut self, vault: SeedVault) -> Self {
        self.vault = vault;
        self
    }

    pub fn config(&self) -> &MultiWalletConfig {
        &self.config
    }

    pub fn db(&self) -> &WalletsDb {
        &self.db
    }

    /// Run `op` in a single database transaction, committing only if it
    /// returns `Ok`. See [`run_batch`].
    pub fn batch_db_transaction<'a, T, E, F>(&'a self, op: F) -> Result<T, E>
    where
        F: FnOnce(&WalletsTx<'a>) -> Result<T, E>,
        E: From<Error>,
    {
        run_batch(&self.db, op)
    }

    /// Total size in bytes of all files under the root directory.
    pub fn root_dir_file_size_in_bytes(&self) -> Result<u64, MultiWalletError> {
        Ok(dir_size(&self.config.root_dir)?)
    }

    // ------------------------------------------------------------------
    // Startup passphrase
    // ------------------------------------------------------------------

    /// Whether a startup passphrase is set.
    pub fn is_startup_security_set(&self) -> Result<bool, MultiWalletError> {
        Ok(self.db.get_metadata(STARTUP_PASSPHRASE_FIELD)?.is_some())
    }

    /// Set the startup passphrase, replacing any existing one.
    pub fn set_startup_passphrase(&self, passphrase: &[u8]) -> Result<(), MultiWalletError> {
        const OP: Op = "multiwallet::set_startup_passphrase";

        let hash = hash_startup_passphrase(passphrase, OP)?;
        self.batch_db_transaction(|tx| tx.put_metadata(STARTUP_PASSPHRASE_FIELD, hash.as_bytes()))?;
        info!("startup passphrase set");
        Ok(())
    }

    /// Check `passphrase` against the stored startup passphrase.
    ///
    /// Succeeds when no startup passphrase is set.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidPassphrase`] on mismatch.
    pub fn verify_startup_passphrase(&self, passphrase: &[u8]) -> Result<(), MultiWalletError> {
        const OP: Op = "multiwallet::verify_startup_passphrase";

        let stored = self.db.get_metadata(STARTUP_PASSPHRASE_FIELD)?;
        check_startup_hash(stored, passphrase, OP)?;
        Ok(())
    }

    /// Replace the startup passphrase after verifying the current one.
    ///
    /// The stored hash is read, checked and replaced in one transaction.
    pub fn change_startup_passphrase(
        &self,
        current: &[u8],
        new: &[u8],
    ) -> Result<(), MultiWalletError> {
        const OP: Op = "multiwallet::change_startup_passphrase";

        self.batch_db_transaction(|tx| -> Result<(), Error> {
            check_startup_hash(tx.get_metadata(STARTUP_PASSPHRASE_FIELD)?, current, OP)?;
            let hash = hash_startup_passphrase(new, OP)?;
            tx.put_metadata(STARTUP_PASSPHRASE_FIELD, hash.as_bytes())
        })?;
        info!("startup passphrase changed");
        Ok(())
    }

    /// Remove the startup passphrase after verifying it.
    ///
    /// The stored hash is read, checked and deleted in one transaction.
    pub fn remove_startup_passphrase(&self, current: &[u8]) -> Result<(), MultiWalletError> {
        const OP: Op = "multiwallet::remove_startup_passphrase";

        self.batch_db_transaction(|tx| -> Result<(), Error> {
            check_startup_hash(tx.get_metadata(STARTUP_PASSPHRASE_FIELD)?, current, OP)?;
            tx.delete_metadata(STARTUP_PASSPHRASE_FIELD)
        })?;
        info!("startup passphrase removed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Wallets
    // ------------------------------------------------------------------

    /// Open a wallet through `loader`, hand it to `on_loaded`, then unload it.
    ///
    /// An empty `public_passphrase` means the wallet was created without one
    /// and is opened with [`INSECURE_PUB_PASSPHRASE`]. The wallet is unloaded
    /// on every exit from `on_loaded`, including a panic.
    pub fn load_wallet_temporarily<L, T, F>(
        &self,
        loader: &mut L,
        public_passphrase: &str,
        on_loaded: F,
    ) -> Result<T, Error>
    where
        L: WalletLoader,
        F: FnOnce(&L::Wallet) -> Result<T, Error>,
    {
        const OP: Op = "multiwallet::load_wallet_temporarily";

        let public_passphrase = if public_passphrase.is_empty() {
            INSECURE_PUB_PASSPHRASE
        } else {
            public_passphrase
        };

        let wallet = loader
            .open_existing_wallet(public_passphrase.as_bytes())
            .map_err(|e| e.context(OP))?;
        let _unload = UnloadGuard(loader);
        on_loaded(&wallet)
    }

    /// Encrypt `seed` under `passphrase` and store it as wallet `wallet_id`'s
    /// seed record, replacing any previous one.
    pub fn store_encrypted_seed(
        &self,
        wallet_id: u32,
        passphrase: &[u8],
        seed: &str,
    ) -> Result<(), MultiWalletError> {
        const OP: Op = "multiwallet::store_encrypted_seed";

        let blob = self.vault.seal(passphrase, seed).map_err(|e| e.context(OP))?;
        self.batch_db_transaction(|tx| tx.put_wallet(wallet_id, &blob))?;
        debug!(wallet_id, "encrypted seed stored");
        Ok(())
    }

    /// Read and decrypt wallet `wallet_id`'s seed. `Ok(None)` if the wallet
    /// has no seed record.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidPassphrase`] if `passphrase` is wrong or the
    /// record is damaged.
    pub fn load_decrypted_seed(
        &self,
        wallet_id: u32,
        passphrase: &[u8],
    ) -> Result<Option<Zeroizing<String>>, MultiWalletError> {
        const OP: Op = "multiwallet::load_decrypted_seed";

        let Some(blob) = self.db.get_wallet(wallet_id)? else {
            return Ok(None);
        };
        let seed = self.vault.open(passphrase, &blob).map_err(|e| e.context(OP))?;
        Ok(Some(Zeroizing::new(seed)))
    }
}

/// Argon2id PHC string for `passphrase` under a fresh random salt.
fn hash_startup_passphrase(passphrase: &[u8], op: Op) -> Result<String, Error> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    let hash = Argon2::default()
        .hash_password(passphrase, &salt)
        .map_err(|e| Error::derivation(op, e))?;
    Ok(hash.to_string())
}

/// Verify `passphrase` against a stored PHC string. No stored hash means no
/// startup passphrase, which accepts anything.
fn check_startup_hash(stored: Option<Vec<u8>>, passphrase: &[u8], op: Op) -> Result<(), Error> {
    let Some(stored) = stored else {
        return Ok(());
    };
    let corrupt = |cause: &dyn std::fmt::Display| {
        Error::new(op, ErrorKind::Encoding, format!("corrupt startup passphrase hash: {cause}"))
    };
    let stored = String::from_utf8(stored).map_err(|e| corrupt(&e))?;
    let hash = PasswordHash::new(&stored).map_err(|e| corrupt(&e))?;

    Argon2::default()
        .verify_password(passphrase, &hash)
        .map_err(|e| match e {
            password_hash::Error::Password => Error::invalid_passphrase(op),
            other => Error::derivation(op, other),
        })
}

/// Unloads the wallet when dropped.
struct UnloadGuard<'l, L: WalletLoader>(&'l mut L);

impl<L: WalletLoader> Drop for UnloadGuard<'_, L> {
    fn drop(&mut self) {
        if let Err(e) = self.0.unload_wallet() {
            warn!("failed to unload wallet: {}", e);
        }
    }
}

/// Recursive sum of regular file sizes. Symlinks are counted, not followed.
fn dir_size(path: &Path) -> io::Result<u64> {
    let mut size = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            size += dir_size(&entry.path())?;
        } else {
            size += entry.metadata()?.len();
        }
    }
    Ok(size)
}
