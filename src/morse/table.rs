//! Symbol-table loading and bidirectional character/token lookup.

use std::collections::HashMap;
use std::str::FromStr;

use log::debug;

use super::error::{MorseVaultError, Result};

/// The named symbol-table standards shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    International,
    American,
}

impl Standard {
    /// The embedded definition source for this standard.
    pub fn definition(&self) -> &'static str {
        match self {
            Standard::International => include_str!("../../tables/international.txt"),
            Standard::American => include_str!("../../tables/american.txt"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Standard::International => "international",
            Standard::American => "american",
        }
    }
}

impl FromStr for Standard {
    type Err = MorseVaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "international" => Ok(Standard::International),
            "american" => Ok(Standard::American),
            other => Err(MorseVaultError::UnknownStandard(other.to_string())),
        }
    }
}

/// A bidirectional mapping between characters and Morse tokens.
///
/// Built once from a line-oriented definition source and immutable afterwards,
/// so instances can be shared and read concurrently without locking.
///
/// Keys are stored uppercased. Values are not required to be unique: the
/// reverse map is built with first-inserted-wins, so decoding a token that
/// appears more than once in the source resolves to the first entry.
#[derive(Debug)]
pub struct SymbolTable {
    forward: HashMap<char, String>,
    reverse: HashMap<String, char>,
}

impl SymbolTable {
    /// Load the symbol table for a named standard.
    pub fn load(standard: Standard) -> Result<Self> {
        debug!("Loading {} symbol table", standard.name());
        Self::parse(standard.definition())
    }

    /// Parse a symbol table from a definition source.
    ///
    /// Each non-blank line that does not start with `#` must hold exactly two
    /// whitespace-separated fields: a single character and its token. Any
    /// other shape aborts the parse with the offending line number; no
    /// partial table is returned.
    pub fn parse(source: &str) -> Result<Self> {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (character, token) = match (fields.next(), fields.next(), fields.next()) {
                (Some(c), Some(t), None) => (c, t),
                _ => {
                    return Err(MorseVaultError::MalformedTableLine {
                        line: idx + 1,
                        content: raw.to_string(),
                    })
                }
            };

            let mut chars = character.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(c), None) => uppercase(c),
                _ => {
                    return Err(MorseVaultError::MalformedTableLine {
                        line: idx + 1,
                        content: raw.to_string(),
                    })
                }
            };

            forward.insert(key, token.to_string());
            // First-inserted wins for duplicate tokens.
            reverse.entry(token.to_string()).or_insert(key);
        }

        debug!("Symbol table parsed: {} entries", forward.len());
        Ok(Self { forward, reverse })
    }

    /// Look up the token for a character (case-insensitive).
    pub fn encode_char(&self, c: char) -> Option<&str> {
        self.forward.get(&uppercase(c)).map(String::as_str)
    }

    /// Look up the character for a token.
    ///
    /// If the same token maps to several characters, the first one inserted
    /// during parsing wins.
    pub fn decode_token(&self, token: &str) -> Option<char> {
        self.reverse.get(token).copied()
    }

    /// Number of character mappings in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Uppercase a single character, taking the first char of multi-character
/// expansions (matches how keys are normalized at parse time).
fn uppercase(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
