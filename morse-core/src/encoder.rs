//! Text to symbol-sequence translation

use heapless::Vec;

use crate::record::SymbolSeq;
use crate::table;
use crate::types::{CodecError, EncodeMode, Symbol};

/// Translates text into per-character symbol sequences
///
/// Character grouping is preserved in the output because gap placement
/// is a property of character boundaries, not of the symbols
/// themselves: a run of dits cannot reveal where one character ends
/// and the next begins.
#[derive(Copy, Clone, Debug)]
pub struct MorseEncoder {
    mode: EncodeMode,
}

impl MorseEncoder {
    /// Create an encoder with the given unknown-character policy
    pub const fn new(mode: EncodeMode) -> Self {
        Self { mode }
    }

    /// Active unknown-character policy
    pub const fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Encode a single character
    ///
    /// Lookup always surfaces `UnknownCharacter` here; the lenient
    /// policy only applies to whole-text encoding where there is
    /// something left to keep.
    pub fn encode_char(&self, ch: char) -> Result<SymbolSeq, CodecError> {
        let ordinal = table::index_of(ch)?;
        Ok(table::record_at(ordinal).decode())
    }

    /// Encode text into one symbol sequence per input character
    ///
    /// In `Strict` mode the first unknown character aborts the encode;
    /// in `Lenient` mode unknown characters are dropped. The space
    /// character resolves through the table to a single `WordBreak`.
    pub fn encode<const N: usize>(&self, text: &str) -> Result<Vec<SymbolSeq, N>, CodecError> {
        let mut chars = Vec::new();
        for ch in text.chars() {
            match self.encode_char(ch) {
                Ok(symbols) => {
                    chars.push(symbols).map_err(|_| CodecError::BufferOverflow)?;
                }
                Err(CodecError::UnknownCharacter(_)) if self.mode == EncodeMode::Lenient => {}
                Err(err) => return Err(err),
            }
        }
        Ok(chars)
    }

    /// Encode text into a single concatenated symbol stream
    ///
    /// The flat view loses character boundaries, so it cannot feed the
    /// timing engine directly; it exists for callers that only need
    /// the symbols.
    pub fn encode_flat<const N: usize>(&self, text: &str) -> Result<Vec<Symbol, N>, CodecError> {
        let mut symbols = Vec::new();
        let chars = self.encode::<N>(text)?;
        for seq in &chars {
            for &symbol in seq.iter() {
                symbols.push(symbol).map_err(|_| CodecError::BufferOverflow)?;
            }
        }
        Ok(symbols)
    }
}

impl Default for MorseEncoder {
    fn default() -> Self {
        Self::new(EncodeMode::Strict)
    }
}
