//! RocksDB-backed wallet storage.
//!
//! [`WalletsDb`] keeps two column families in a single `TransactionDB`:
//! `metadata` for multi-wallet settings and `wallets` for per-wallet
//! records keyed by wallet id. Writes go through [`WalletsTx`], which is the
//! handle [`run_batch`](mwallet_core::run_batch) lends to a batch.

use std::path::Path;

use mwallet_core::{Error, Op, StoreTransaction, TransactionalStore};
use rocksdb::{
    ColumnFamily, ColumnFamilyDescriptor, Options, Transaction, TransactionDB,
    TransactionDBOptions,
};
use tracing::debug;

// --- Column family names ---

const CF_METADATA: &str = "metadata";
const CF_WALLETS: &str = "wallets";

const ALL_CFS: &[&str] = &[CF_METADATA, CF_WALLETS];

/// Wallet ids are stored big-endian so records iterate in id order.
fn wallet_key(id: u32) -> [u8; 4] {
    id.to_be_bytes()
}

/// The multi-wallet database.
pub struct WalletsDb {
    db: TransactionDB,
}

impl WalletsDb {
    /// Open or create the database at `path`, creating missing column
    /// families.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        const OP: Op = "storage::open";

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        let cf_descriptors = ALL_CFS
            .iter()
            .map(|name| ColumnFamilyDescriptor::new(*name, Options::default()));

        let db = TransactionDB::open_cf_descriptors(
            &db_opts,
            &TransactionDBOptions::default(),
            path.as_ref(),
            cf_descriptors,
        )
        .map_err(|e| Error::transaction(OP, e))?;
        debug!(path = %path.as_ref().display(), "wallets db opened");

        Ok(Self { db })
    }

    /// Read a metadata value outside of any batch.
    pub fn get_metadata(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error> {
        const OP: Op = "storage::get_metadata";
        let cf = self.cf_handle(CF_METADATA)?;
        self.db.get_cf(cf, key).map_err(|e| Error::transaction(OP, e))
    }

    /// Read a wallet record outside of any batch.
    pub fn get_wallet(&self, id: u32) -> Result<Option<Vec<u8>>, Error> {
        const OP: Op = "storage::get_wallet";
        let cf = self.cf_handle(CF_WALLETS)?;
        self.db
            .get_cf(cf, wallet_key(id))
            .map_err(|e| Error::transaction(OP, e))
    }

    fn cf_handle(&self, name: &str) -> Result<&ColumnFamily, Error> {
        self.db.cf_handle(name).ok_or_else(|| {
            Error::transaction("storage::cf_handle", format!("missing column family: {name}"))
        })
    }
}

impl TransactionalStore for WalletsDb {
    type Tx<'s> = WalletsTx<'s>;

    fn begin_rw(&self) -> Result<WalletsTx<'_>, Error> {
        Ok(WalletsTx {
            tx: self.db.transaction(),
            db: self,
        })
    }
}

/// A writable transaction over [`WalletsDb`].
///
/// Reads see the transaction's own uncommitted writes. Dropping the handle
/// without committing discards everything written through it.
pub struct WalletsTx<'db> {
    tx: Transaction<'db, TransactionDB>,
    db: &'db WalletsDb,
}

impl WalletsTx<'_> {
    pub fn put_metadata(&self, key: &[u8], value: &[u8]) -> Result<(), Error> {
        const OP: Op = "storage::put_metadata";
        let cf = self.db.cf_handle(CF_METADATA)?;
        self.tx.put_cf(cf, key, value).map_err(|e| Error::transaction(OP, e))
    }

    pub fn get_metadata(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error> {
        const OP: Op = "storage::get_metadata";
        let cf = self.db.cf_handle(CF_METADATA)?;
        self.tx.get_cf(cf, key).map_err(|e| Error::transaction(OP, e))
    }

    pub fn delete_metadata(&self, key: &[u8]) -> Result<(), Error> {
        const OP: Op = "storage::delete_metadata";
        let cf = self.db.cf_handle(CF_METADATA)?;
        self.tx.delete_cf(cf, key).map_err(|e| Error::transaction(OP, e))
    }

    pub fn put_wallet(&self, id: u32, value: &[u8]) -> Result<(), Error> {
        const OP: Op = "storage::put_wallet";
        let cf = self.db.cf_handle(CF_WALLETS)?;
        self.tx
            .put_cf(cf, wallet_key(id), value)
            .map_err(|e| Error::transaction(OP, e))
    }

    pub fn get_wallet(&self, id: u32) -> Result<Option<Vec<u8>>, Error> {
        const OP: Op = "storage::get_wallet";
        let cf = self.db.cf_handle(CF_WALLETS)?;
        self.tx
            .get_cf(cf, wallet_key(id))
            .map_err(|e| Error::transaction(OP, e))
    }

    pub fn delete_wallet(&self, id: u32) -> Result<(), Error> {
        const OP: Op = "storage::delete_wallet";
        let cf = self.db.cf_handle(CF_WALLETS)?;
        self.tx
            .delete_cf(cf, wallet_key(id))
            .map_err(|e| Error::transaction(OP, e))
    }
}

impl StoreTransaction for WalletsTx<'_> {
    fn commit(self) -> Result<(), Error> {
        self.tx
            .commit()
            .map_err(|e| Error::transaction("storage::commit", e))
    }

    fn rollback(&self) -> Result<(), Error> {
        self.tx
            .rollback()
            .map_err(|e| Error::transaction("storage::rollback", e))
    }
}
