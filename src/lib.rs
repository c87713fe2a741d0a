//! # morse-vault
//!
//! A bidirectional text/Morse-code translator with a secure export format.
//! Translation is driven by a pluggable symbol table (the shipped
//! "international" and "american" standards, or any caller-supplied
//! definition). Exports are zlib-compressed and encrypted with a
//! password-derived key into a self-describing `salt ‖ IV ‖ ciphertext` blob.
pub mod morse;

// Re-export the main types for convenience
pub use morse::{
    error::{MorseVaultError, Result},
    table::{Standard, SymbolTable},
    translator::{Translator, UNKNOWN_SUB, WORD_MARK},
    MorseVault,
};
