//! Core morse-vault module: symbol tables, translation, and the
//! secure-export pipeline.

pub mod cipher;
pub mod compression;
pub mod error;
pub mod table;
pub mod translator;

use log::info;

pub use error::{MorseVaultError, Result};
pub use table::{Standard, SymbolTable};
pub use translator::Translator;

/// Translation plus the secure-export pipeline over one symbol table.
///
/// Owns an immutable [`SymbolTable`] and composes the full export chain:
/// text → Morse → UTF-8 bytes → zlib → `salt ‖ IV ‖ ciphertext`, and the
/// inverse for import. Every stage fails fast; no partial output is produced.
pub struct MorseVault {
    table: SymbolTable,
}

impl MorseVault {
    /// Build a vault for one of the named standards.
    ///
    /// # Errors
    /// Returns an error if the standard's definition fails to parse.
    pub fn new(standard: Standard) -> Result<Self> {
        Ok(Self {
            table: SymbolTable::load(standard)?,
        })
    }

    /// Build a vault around a caller-supplied table.
    pub fn with_table(table: SymbolTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// A translator borrowing this vault's table.
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.table)
    }

    /// Encode text to a Morse string. Never fails.
    pub fn to_morse(&self, text: &str) -> String {
        self.translator().to_morse(text)
    }

    /// Decode a Morse string back to text. Never fails.
    pub fn to_text(&self, morse: &str) -> String {
        self.translator().to_text(morse)
    }

    /// Translate, compress and encrypt text into a self-describing blob.
    pub fn export_secure(&self, text: &str, password: &str) -> Result<Vec<u8>> {
        info!("Exporting {} characters", text.chars().count());

        let morse = self.translator().to_morse(text);
        let compressed = compression::compress(morse.as_bytes())?;
        let blob = cipher::encrypt(password, &compressed)?;

        info!("Export complete: {} byte blob", blob.len());
        Ok(blob)
    }

    /// Decrypt, decompress and decode a blob back to text.
    ///
    /// # Errors
    /// Propagates the first failing stage: `DecryptionFailed` for short or
    /// tampered blobs and wrong passwords, `CorruptData` if the decrypted
    /// payload is not a valid zlib stream or not valid UTF-8.
    pub fn import_secure(&self, blob: &[u8], password: &str) -> Result<String> {
        info!("Importing {} byte blob", blob.len());

        let compressed = cipher::decrypt(password, blob)?;
        let payload = compression::decompress(&compressed)?;
        let morse = String::from_utf8(payload)
            .map_err(|e| MorseVaultError::CorruptData(format!("payload is not UTF-8: {}", e)))?;

        Ok(self.translator().to_text(&morse))
    }
}
