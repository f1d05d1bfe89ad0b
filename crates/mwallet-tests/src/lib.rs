//! Integration test suite for mwallet.
//!
//! Exercises the seed codec, the vault and batched persistence together,
//! against real RocksDB instances in temporary directories.

pub mod helpers;
