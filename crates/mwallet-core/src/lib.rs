//! # mwallet-core
//! Error types, seed constants and the storage and wallet-runtime contracts
//! shared by the mwallet crates.

pub mod batch;
pub mod constants;
pub mod error;
pub mod traits;

pub use batch::run_batch;
pub use error::{EncodingError, Error, ErrorKind, Op};
pub use traits::{StoreTransaction, TransactionalStore, WalletLoader};
