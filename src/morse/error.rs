//! Custom error types for the morse-vault crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MorseVaultError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The requested translation standard is not one of the named standards.
    #[error("Unknown translation standard: {0:?}. Expected \"international\" or \"american\".")]
    UnknownStandard(String),

    /// A symbol-table definition line did not split into exactly two fields.
    /// Construction aborts; no partial table is produced.
    #[error("Malformed symbol-table line {line}: {content:?} (expected `<character> <token>`)")]
    MalformedTableLine { line: usize, content: String },

    /// Decompression of invalid or truncated bytes, or a decrypted payload
    /// that does not decode as expected.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Decryption failed: the blob is too short, the ciphertext length is not
    /// a multiple of the cipher block size, or the padding is invalid after
    /// decryption. A wrong password and corrupted data are indistinguishable
    /// here, so no further detail is reported.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// The password-based key derivation function rejected its parameters.
    #[error("Key derivation failed")]
    KeyDerivation,
}

/// A convenience `Result` type alias using the crate's `MorseVaultError` type.
pub type Result<T> = std::result::Result<T, MorseVaultError>;
