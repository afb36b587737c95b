//! Text-to-events facade

use heapless::Vec;

use crate::encoder::MorseEncoder;
use crate::record::SymbolSeq;
use crate::table;
use crate::timing::{KeyEvent, TimingEngine};
use crate::types::{CodecError, MorseConfig};

/// Complete codec: text in, timed key events out
///
/// Construction validates the code tables once; after that every call
/// is a pure function over immutable data.
#[derive(Copy, Clone, Debug)]
pub struct MorseCodec {
    config: MorseConfig,
    encoder: MorseEncoder,
    timing: TimingEngine,
}

impl MorseCodec {
    /// Create a codec, verifying table integrity
    pub fn new(config: MorseConfig) -> Result<Self, CodecError> {
        table::check_tables()?;
        Ok(Self {
            config,
            encoder: MorseEncoder::new(config.mode),
            timing: TimingEngine::new(config.unit),
        })
    }

    /// Encode text straight to key events
    ///
    /// `N` bounds the event buffer. A dit costs two events and the
    /// longest character (six symbols) twelve, so `text.len() * 12`
    /// always suffices.
    pub fn encode<const N: usize>(&self, text: &str) -> Result<Vec<KeyEvent, N>, CodecError> {
        let chars = self.encoder.encode::<N>(text)?;
        self.timing.to_events(&chars)
    }

    /// Encode text to per-character symbol sequences
    pub fn encode_symbols<const N: usize>(
        &self,
        text: &str,
    ) -> Result<Vec<SymbolSeq, N>, CodecError> {
        self.encoder.encode(text)
    }

    /// Active configuration
    pub const fn config(&self) -> &MorseConfig {
        &self.config
    }

    /// The symbol encoder half
    pub const fn encoder(&self) -> &MorseEncoder {
        &self.encoder
    }

    /// The timing engine half
    pub const fn timing(&self) -> &TimingEngine {
        &self.timing
    }
}
