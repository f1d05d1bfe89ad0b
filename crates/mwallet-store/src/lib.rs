//! # mwallet-store
//! Persistence and multi-wallet utilities.
//!
//! - [`storage`]: RocksDB `TransactionDB` with `metadata` and `wallets`
//!   column families, implementing [`mwallet_core::TransactionalStore`]
//! - [`config`]: layered configuration (defaults, file, `MWALLET_*` env)
//! - [`logging`]: tracing subscriber setup
//! - [`multiwallet`]: batched writes, startup passphrase, temporary wallet
//!   loading and encrypted seed records

pub mod config;
pub mod error;
pub mod logging;
pub mod multiwallet;
pub mod storage;

pub use config::MultiWalletConfig;
pub use error::MultiWalletError;
pub use logging::init_logging;
pub use multiwallet::MultiWallet;
pub use storage::{WalletsDb, WalletsTx};
