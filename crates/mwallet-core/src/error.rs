//! Error types for mwallet.
//!
//! Every failure carries a coarse [`ErrorKind`], the label of the operation
//! that raised it and a human-readable message. Callers branch on the kind;
//! the label and message are for people.
use std::fmt;

use thiserror::Error;

/// Label of the operation that produced an error, e.g. `"mnemonic::decode"`.
pub type Op = &'static str;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed hex, unknown or misplaced mnemonic word, checksum mismatch
    /// or out-of-bounds seed length. The caller should re-prompt for input.
    Encoding,
    /// Wrong passphrase, or ciphertext that failed authentication. The two
    /// are deliberately indistinguishable.
    InvalidPassphrase,
    /// The key derivation function itself failed (e.g. allocation).
    DerivationFailure,
    /// The persistence backend failed to begin, commit or roll back.
    TransactionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Encoding => "encoding",
            Self::InvalidPassphrase => "invalid passphrase",
            Self::DerivationFailure => "key derivation failure",
            Self::TransactionFailure => "transaction failure",
        };
        f.write_str(s)
    }
}

/// Detail of an [`ErrorKind::Encoding`] failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("word '{0}' is not in the word list")] UnknownWord(String),
    #[error("word '{word}' is not valid at position {position}, check for missing words")] WordOutOfPlace { word: String, position: usize },
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("checksum mismatch")] ChecksumMismatch,
    #[error("invalid seed length {len}: must be between {min} and {max} bytes")] InvalidSeedLength { len: usize, min: usize, max: usize },
}

/// An mwallet failure: kind, originating operation and message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{op}: {message}")]
pub struct Error {
    op: Op,
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Build an error from its parts.
    pub fn new(op: Op, kind: ErrorKind, message: impl fmt::Display) -> Self {
        Self {
            op,
            kind,
            message: message.to_string(),
        }
    }

    /// An [`ErrorKind::Encoding`] error.
    pub fn encoding(op: Op, detail: EncodingError) -> Self {
        Self::new(op, ErrorKind::Encoding, detail)
    }

    /// An [`ErrorKind::InvalidPassphrase`] error. Carries no detail on purpose.
    pub fn invalid_passphrase(op: Op) -> Self {
        Self::new(op, ErrorKind::InvalidPassphrase, ErrorKind::InvalidPassphrase)
    }

    /// An [`ErrorKind::DerivationFailure`] error.
    pub fn derivation(op: Op, cause: impl fmt::Display) -> Self {
        Self::new(op, ErrorKind::DerivationFailure, cause)
    }

    /// An [`ErrorKind::TransactionFailure`] error.
    pub fn transaction(op: Op, cause: impl fmt::Display) -> Self {
        Self::new(op, ErrorKind::TransactionFailure, cause)
    }

    /// Re-tag the error with an outer operation, keeping the inner label in
    /// the message: `inner: msg` becomes `outer: inner: msg`.
    pub fn context(self, op: Op) -> Self {
        Self {
            message: format!("{}: {}", self.op, self.message),
            op,
            kind: self.kind,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `self.kind() == kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}
