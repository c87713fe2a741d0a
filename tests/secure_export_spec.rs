use morse_vault::morse::{cipher, compression};
use morse_vault::{MorseVault, MorseVaultError, Standard};
use proptest::prelude::*;

const HEADER_LEN: usize = cipher::SALT_LEN + cipher::IV_LEN;

#[test]
fn compress_round_trips() {
    for payload in [
        &b""[..],
        &b"SOS"[..],
        &b"... --- ... "[..],
        &[0u8; 1024][..],
    ] {
        let compressed = compression::compress(payload).unwrap();
        let restored = compression::decompress(&compressed).unwrap();
        assert_eq!(restored, payload);
    }
}

#[test]
fn decompress_rejects_garbage() {
    let err = compression::decompress(b"not a zlib stream").unwrap_err();
    assert!(matches!(err, MorseVaultError::CorruptData(_)));
}

#[test]
fn decompress_rejects_truncated_stream() {
    let compressed = compression::compress(b"a perfectly ordinary payload").unwrap();
    let err = compression::decompress(&compressed[..compressed.len() - 3]).unwrap_err();
    assert!(matches!(err, MorseVaultError::CorruptData(_)));
}

#[test]
fn encrypt_produces_the_documented_blob_layout() {
    let blob = cipher::encrypt("hunter2", b"payload").unwrap();
    assert!(blob.len() >= HEADER_LEN + 16);
    assert_eq!((blob.len() - HEADER_LEN) % 16, 0);

    // Empty plaintext pads to exactly one ciphertext block.
    let blob = cipher::encrypt("hunter2", b"").unwrap();
    assert_eq!(blob.len(), HEADER_LEN + 16);
}

#[test]
fn decrypt_restores_the_plaintext() {
    for payload in [&b""[..], &b"x"[..], &b"... --- ... "[..], &[7u8; 100][..]] {
        let blob = cipher::encrypt("pw1", payload).unwrap();
        assert_eq!(cipher::decrypt("pw1", &blob).unwrap(), payload);
    }
}

#[test]
fn repeated_encryption_is_randomized_but_consistent() {
    let first = cipher::encrypt("pw1", b"payload").unwrap();
    let second = cipher::encrypt("pw1", b"payload").unwrap();
    // Fresh salt and IV per call: the blobs must differ...
    assert_ne!(first, second);
    assert_ne!(&first[..HEADER_LEN], &second[..HEADER_LEN]);
    // ...while both still decrypt to the same plaintext.
    assert_eq!(cipher::decrypt("pw1", &first).unwrap(), b"payload");
    assert_eq!(cipher::decrypt("pw1", &second).unwrap(), b"payload");
}

#[test]
fn decrypt_rejects_wrong_password() {
    let blob = cipher::encrypt("pw1", b"payload").unwrap();
    assert!(cipher::decrypt("wrong", &blob).is_err());
}

#[test]
fn decrypt_rejects_short_blobs() {
    assert!(matches!(
        cipher::decrypt("pw1", b""),
        Err(MorseVaultError::DecryptionFailed)
    ));
    assert!(matches!(
        cipher::decrypt("pw1", &[0u8; 31]),
        Err(MorseVaultError::DecryptionFailed)
    ));
    // A bare salt/IV header with no ciphertext block is also invalid.
    assert!(matches!(
        cipher::decrypt("pw1", &[0u8; 32]),
        Err(MorseVaultError::DecryptionFailed)
    ));
}

#[test]
fn decrypt_rejects_partial_ciphertext_blocks() {
    let mut blob = cipher::encrypt("pw1", b"payload").unwrap();
    blob.pop();
    assert!(matches!(
        cipher::decrypt("pw1", &blob),
        Err(MorseVaultError::DecryptionFailed)
    ));
}

#[test]
fn export_import_round_trips_through_the_whole_pipeline() {
    let vault = MorseVault::new(Standard::International).unwrap();
    let blob = vault.export_secure("SOS", "pw1").unwrap();
    assert!(blob.len() >= HEADER_LEN + 16);
    assert_eq!(vault.import_secure(&blob, "pw1").unwrap(), "SOS ");
}

#[test]
fn export_carries_unmapped_characters_in_band() {
    let vault = MorseVault::new(Standard::International).unwrap();
    let blob = vault.export_secure("SOS SOS", "pw1").unwrap();
    // The space is not a table entry; it comes back as `?` per word group.
    assert_eq!(vault.import_secure(&blob, "pw1").unwrap(), "SOS? SOS ");
}

#[test]
fn import_fails_fast_on_wrong_password() {
    let vault = MorseVault::new(Standard::International).unwrap();
    let blob = vault.export_secure("SOS", "pw1").unwrap();
    assert!(vault.import_secure(&blob, "wrong").is_err());
}

#[test]
fn import_fails_on_truncated_blob() {
    let vault = MorseVault::new(Standard::International).unwrap();
    let blob = vault.export_secure("SOS", "pw1").unwrap();
    assert!(matches!(
        vault.import_secure(&blob[..16], "pw1"),
        Err(MorseVaultError::DecryptionFailed)
    ));
}

proptest! {
    #[test]
    fn compression_round_trips_any_buffer(payload in prop::collection::vec(any::<u8>(), 0..512)) {
        let compressed = compression::compress(&payload).unwrap();
        prop_assert_eq!(compression::decompress(&compressed).unwrap(), payload);
    }
}

proptest! {
    // Each case pays for two PBKDF2 derivations; keep the case count low.
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn encryption_round_trips_any_buffer(
        payload in prop::collection::vec(any::<u8>(), 0..256),
        password in "[ -~]{0,16}",
    ) {
        let blob = cipher::encrypt(&password, &payload).unwrap();
        prop_assert_eq!(cipher::decrypt(&password, &blob).unwrap(), payload);
    }
}
