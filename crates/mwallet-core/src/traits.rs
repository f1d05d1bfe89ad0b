//! Trait interfaces between mwallet and its collaborators.
//!
//! - [`TransactionalStore`] / [`StoreTransaction`]: the minimal contract a
//!   persistence backend must offer for [`run_batch`](crate::run_batch)
//!   (mwallet-store implements it over RocksDB)
//! - [`WalletLoader`]: the external wallet runtime that opens and unloads
//!   wallets; mwallet only drives its lifecycle

use crate::error::Error;

/// A backend that can begin writable transactions.
///
/// Implementations provide whatever writer isolation the backend offers;
/// mwallet adds no locking of its own on top.
pub trait TransactionalStore {
    /// Handle to an open transaction, borrowing the store.
    type Tx<'s>: StoreTransaction
    where
        Self: 's;

    /// Begin a writable transaction.
    fn begin_rw(&self) -> Result<Self::Tx<'_>, Error>;
}

/// An open writable transaction.
///
/// Dropping a transaction without committing must discard its writes.
pub trait StoreTransaction {
    /// Make all writes of the transaction visible atomically.
    fn commit(self) -> Result<(), Error>;

    /// Discard all writes of the transaction.
    fn rollback(&self) -> Result<(), Error>;
}

/// The wallet runtime's loader.
///
/// `open_existing_wallet` fails with [`ErrorKind::InvalidPassphrase`](crate::ErrorKind::InvalidPassphrase)
/// when the public passphrase is wrong.
pub trait WalletLoader {
    /// Handle to an opened wallet.
    type Wallet;

    /// Open the wallet stored under the loader's data directory.
    fn open_existing_wallet(&mut self, public_passphrase: &[u8]) -> Result<Self::Wallet, Error>;

    /// Unload the currently opened wallet, releasing its database.
    fn unload_wallet(&mut self) -> Result<(), Error>;
}
