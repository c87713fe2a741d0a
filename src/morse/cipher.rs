//! Password-based encryption of export payloads.
//!
//! Blob layout (at-rest format, exact):
//! - Bytes 0..16:  salt, fresh CSPRNG output per encrypt call
//! - Bytes 16..32: IV, fresh CSPRNG output per encrypt call
//! - Bytes 32..:   AES-256-CBC ciphertext with PKCS#7 padding
//!
//! The key is derived per call via PBKDF2-HMAC-SHA256 with
//! [`PBKDF2_ITERATIONS`] iterations and a 32-byte output, held in a
//! [`Zeroizing`] buffer and wiped when the call returns. Iteration count,
//! hash, key length, cipher, mode and padding are all part of the format:
//! a compatible implementation must reproduce them exactly.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::Hmac;
use log::trace;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::error::{MorseVaultError, Result};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;
/// IV length in bytes (one AES block).
pub const IV_LEN: usize = 16;
/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;
/// PBKDF2-HMAC-SHA256 iteration count. Part of the blob format.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// AES block size; ciphertext length is always a multiple of this.
const BLOCK_LEN: usize = 16;
/// Salt and IV prefix preceding the ciphertext.
const HEADER_LEN: usize = SALT_LEN + IV_LEN;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypt a payload under a password.
///
/// Generates a fresh random salt and IV for every call, so encrypting the
/// same payload twice yields different blobs that both decrypt to it.
/// Returns `salt ‖ IV ‖ ciphertext`. The empty payload is valid and pads to
/// one full ciphertext block.
pub fn encrypt(password: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(password.as_bytes(), &salt)?;
    trace!("Encrypting {} bytes with AES-256-CBC", plaintext.len());

    let ciphertext =
        Aes256CbcEnc::new((&*key).into(), (&iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a `salt ‖ IV ‖ ciphertext` blob under a password.
///
/// # Errors
/// Returns `DecryptionFailed` if the blob is shorter than the 32-byte
/// salt/IV header, if the ciphertext length is zero or not a multiple of the
/// block size, or if the padding is invalid after decryption. A wrong
/// password and corrupted data both surface as invalid padding and are
/// intentionally indistinguishable.
pub fn decrypt(password: &str, blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < HEADER_LEN {
        return Err(MorseVaultError::DecryptionFailed);
    }

    let salt: [u8; SALT_LEN] = blob[..SALT_LEN]
        .try_into()
        .map_err(|_| MorseVaultError::DecryptionFailed)?;
    let iv: [u8; IV_LEN] = blob[SALT_LEN..HEADER_LEN]
        .try_into()
        .map_err(|_| MorseVaultError::DecryptionFailed)?;
    let ciphertext = &blob[HEADER_LEN..];

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(MorseVaultError::DecryptionFailed);
    }

    let key = derive_key(password.as_bytes(), &salt)?;
    trace!("Decrypting {} ciphertext bytes with AES-256-CBC", ciphertext.len());

    Aes256CbcDec::new((&*key).into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| MorseVaultError::DecryptionFailed)
}

/// Derive the AES-256 key from a password and salt.
///
/// The key lives only for the duration of the enclosing call and is zeroed
/// on drop. Neither the password nor the key is ever logged.
fn derive_key(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, PBKDF2_ITERATIONS, key.as_mut())
        .map_err(|_| MorseVaultError::KeyDerivation)?;
    Ok(key)
}
