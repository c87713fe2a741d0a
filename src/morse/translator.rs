//! Text/Morse translation over a borrowed symbol table.

use super::table::SymbolTable;

/// Separates translated words and stands in for untranslatable characters
/// in the Morse representation.
pub const WORD_MARK: char = '|';

/// Substituted on decode for tokens with no table entry.
pub const UNKNOWN_SUB: char = '?';

/// Translates between free text and Morse strings using a `SymbolTable`.
///
/// Both directions are total functions: untranslatable input is represented
/// in-band (`|` on encode, `?` on decode) rather than by failing, since free
/// text legitimately contains characters absent from classic Morse tables.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a SymbolTable,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Encode text to a Morse string.
    ///
    /// Input is uppercased and each character mapped independently: mapped
    /// characters contribute `token + " "`, unmapped characters (including
    /// spaces, which have no table entry) contribute `|` with no trailing
    /// space. Empty input yields empty output.
    pub fn to_morse(&self, text: &str) -> String {
        let mut morse = String::new();
        for c in text.chars() {
            match self.table.encode_char(c) {
                Some(token) => {
                    morse.push_str(token);
                    morse.push(' ');
                }
                None => morse.push(WORD_MARK),
            }
        }
        morse
    }

    /// Decode a Morse string back to text.
    ///
    /// The string is split on `|` into word groups and each group on
    /// whitespace into tokens; tokens without a table entry decode to `?`.
    /// A `|` that closes a non-empty group stood for exactly one unmapped
    /// input character, so it decodes to `?` inside that group; groups with
    /// no tokens (leading, trailing or consecutive marks) are dropped.
    /// A single space is appended after every emitted group, including the
    /// last — the trailing space is part of the compatibility contract.
    pub fn to_text(&self, morse: &str) -> String {
        let segments: Vec<&str> = morse.split(WORD_MARK).collect();
        let last = segments.len() - 1;

        let mut text = String::new();
        for (i, segment) in segments.iter().enumerate() {
            let mut group = String::new();
            for token in segment.split_whitespace() {
                group.push(self.table.decode_token(token).unwrap_or(UNKNOWN_SUB));
            }
            if group.is_empty() {
                continue;
            }
            if i < last {
                group.push(UNKNOWN_SUB);
            }
            text.push_str(&group);
            text.push(' ');
        }
        text
    }
}
