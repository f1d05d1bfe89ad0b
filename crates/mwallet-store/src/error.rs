use mwallet_core::{Error, ErrorKind};
use thiserror::Error;

/// Failure of a [`MultiWallet`](crate::MultiWallet) operation.
#[derive(Error, Debug)]
pub enum MultiWalletError {
    #[error(transparent)] Wallet(#[from] Error),
    #[error("io: {0}")] Io(#[from] std::io::Error),
    #[error("config: {0}")] Config(#[from] config::ConfigError),
}

impl MultiWalletError {
    /// The [`ErrorKind`] of a wallet error; `None` for I/O and config failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Wallet(e) => Some(e.kind()),
            Self::Io(_) | Self::Config(_) => None,
        }
    }
}
