//! Seed vault properties and on-disk seed records.

use mwallet_core::ErrorKind;
use mwallet_seed::{decode_user_input, encode, generate_mnemonic, SeedVault};
use mwallet_store::{MultiWallet, MultiWalletConfig};
use mwallet_tests::helpers::{fast_vault, seed_of_len, temp_multiwallet};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn open_inverts_seal(
        passphrase in prop::collection::vec(any::<u8>(), 0..64),
        seed in ".{0,200}",
    ) {
        let vault = fast_vault();
        let blob = vault.seal(&passphrase, &seed).unwrap();
        prop_assert_eq!(vault.open(&passphrase, &blob).unwrap(), seed);
    }

    #[test]
    fn other_passphrase_is_rejected(
        p1 in prop::collection::vec(any::<u8>(), 0..32),
        p2 in prop::collection::vec(any::<u8>(), 0..32),
        seed in "[a-z ]{1,100}",
    ) {
        prop_assume!(p1 != p2);
        let vault = fast_vault();
        let blob = vault.seal(&p1, &seed).unwrap();
        let err = vault.open(&p2, &blob).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidPassphrase);
    }

    #[test]
    fn any_single_bit_flip_is_rejected(
        bit in any::<prop::sample::Index>(),
    ) {
        let vault = fast_vault();
        let blob = vault.seal(b"pass", "tactics perceptive skydive").unwrap();
        let bit = bit.index(blob.len() * 8);
        let mut tampered = blob.clone();
        tampered[bit / 8] ^= 1 << (bit % 8);
        let err = vault.open(b"pass", &tampered).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidPassphrase);
    }
}

#[test]
fn mnemonic_survives_the_vault() {
    let vault = fast_vault();
    let phrase = generate_mnemonic();
    let blob = vault.seal(b"spending", &phrase).unwrap();
    let opened = vault.open(b"spending", &blob).unwrap();
    assert_eq!(decode_user_input(&opened).unwrap(), decode_user_input(&phrase).unwrap());
}

#[test]
fn blobs_are_portable_between_vaults_with_equal_params() {
    let blob = fast_vault().seal(b"pass", "seed").unwrap();
    let other = SeedVault::new(fast_vault().params());
    assert_eq!(other.open(b"pass", &blob).unwrap(), "seed");
}

#[test]
fn seed_records_persist_across_reopen() {
    let (mw, dir) = temp_multiwallet();
    let config = mw.config().clone();
    let phrase = encode(&seed_of_len(32));
    mw.store_encrypted_seed(1, b"pass", &phrase).unwrap();
    mw.store_encrypted_seed(2, b"other", "second wallet").unwrap();
    drop(mw);

    let mw = MultiWallet::open(config)
        .unwrap()
        .with_vault(fast_vault());
    assert_eq!(mw.load_decrypted_seed(1, b"pass").unwrap().unwrap().as_str(), phrase);
    assert_eq!(
        mw.load_decrypted_seed(2, b"pass").unwrap_err().kind(),
        Some(ErrorKind::InvalidPassphrase)
    );
    assert!(mw.load_decrypted_seed(3, b"pass").unwrap().is_none());
    drop(dir);
}

#[test]
fn overwriting_a_seed_record_replaces_it() {
    let (mw, _dir) = temp_multiwallet();
    mw.store_encrypted_seed(1, b"old", "first").unwrap();
    mw.store_encrypted_seed(1, b"new", "second").unwrap();
    assert_eq!(mw.load_decrypted_seed(1, b"new").unwrap().unwrap().as_str(), "second");
    assert!(mw.load_decrypted_seed(1, b"old").is_err());
}

/// nonce 00..17 || secretbox of "tactics perceptive skydive unravel breadline"
/// under scrypt("hunter2", no salt, N = 2^15, r = 8, p = 1).
const NACL_SEED_RECORD: &str = "000102030405060708090a0b0c0d0e0f1011121314151617\
                                6e1afa467a7f82067d2593e3874ae8b4958f2d1fcb530ffe\
                                1a0c566d5670d6b6584a0f79ac2327a8fb8f21c11f45cc3e\
                                078c0777395e174026098b43";

#[test]
fn existing_nacl_seed_record_loads_with_default_vault() {
    let dir = tempfile::tempdir().unwrap();
    let mw = MultiWallet::open(MultiWalletConfig {
        root_dir: dir.path().join("mwallet"),
        ..MultiWalletConfig::default()
    })
    .unwrap();
    let record = hex::decode(NACL_SEED_RECORD).unwrap();
    mw.batch_db_transaction(|tx| tx.put_wallet(7, &record)).unwrap();

    let seed = mw.load_decrypted_seed(7, b"hunter2").unwrap().unwrap();
    assert_eq!(seed.as_str(), "tactics perceptive skydive unravel breadline");
    assert_eq!(
        mw.load_decrypted_seed(7, b"Hunter2").unwrap_err().kind(),
        Some(ErrorKind::InvalidPassphrase)
    );
}
