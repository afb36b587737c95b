//! Fixed-size packed records holding variable-length symbol sequences
//!
//! Each record is two bytes, eight 2-bit slots. Slots are filled most
//! significant pair first, first byte before second, and the first
//! `Terminator` slot ends the sequence. `Terminator` encodes as zero,
//! so an all-zero tail is valid padding.

use heapless::Vec;

use crate::types::{CodecError, Symbol};

/// Number of 2-bit slots in one packed record
pub const RECORD_SLOTS: usize = 8;

/// One decoded character: up to eight symbols
pub type SymbolSeq = Vec<Symbol, RECORD_SLOTS>;

/// Two-byte packed code record
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PackedRecord([u8; 2]);

impl PackedRecord {
    /// Wrap two raw table bytes
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw record bytes, first byte first
    pub const fn as_bytes(&self) -> [u8; 2] {
        self.0
    }

    /// Pack a symbol sequence into a record
    ///
    /// Unused slots are padded with `Terminator`. Sequences longer than
    /// eight symbols do not fit and indicate a malformed table build.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, CodecError> {
        if symbols.len() > RECORD_SLOTS {
            return Err(CodecError::RecordOverflow);
        }

        let mut bytes = [0u8; 2];
        for (slot, symbol) in symbols.iter().enumerate() {
            bytes[slot / 4] |= symbol.code() << Self::shift(slot);
        }
        Ok(Self(bytes))
    }

    /// Unpack the symbol sequence held by this record
    ///
    /// Extraction stops at the first `Terminator` (exclusive). A record
    /// with no terminator still ends after all eight slots.
    pub fn decode(&self) -> SymbolSeq {
        let mut symbols = SymbolSeq::new();
        for slot in 0..RECORD_SLOTS {
            let code = self.0[slot / 4] >> Self::shift(slot);
            match Symbol::from_code(code) {
                Symbol::Terminator => break,
                symbol => {
                    // Cannot fail: capacity equals the slot count
                    symbols.push(symbol).ok();
                }
            }
        }
        symbols
    }

    /// Bit offset of a slot within its byte (most significant pair first)
    const fn shift(slot: usize) -> u8 {
        (6 - 2 * (slot % 4)) as u8
    }
}
