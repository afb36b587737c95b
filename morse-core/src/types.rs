//! Core data types for the morse codec

use crate::hal::Duration;

/// Timing symbols stored in the packed code table
///
/// The discriminants are the 2-bit field values used by the packed
/// record layout, so `Symbol as u8` is the wire encoding.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[repr(u8)]
pub enum Symbol {
    /// End-of-sequence sentinel (pads unused record slots)
    Terminator = 0,
    /// Dit (short element)
    Dit = 1,
    /// Dah (long element)
    Dah = 2,
    /// Inter-word silence
    WordBreak = 3,
}

impl Symbol {
    /// Returns the 2-bit packed code for this symbol
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Decode a 2-bit field value (only the low two bits are read)
    pub const fn from_code(code: u8) -> Symbol {
        match code & 0b11 {
            1 => Symbol::Dit,
            2 => Symbol::Dah,
            3 => Symbol::WordBreak,
            _ => Symbol::Terminator,
        }
    }

    /// Returns the keyed duration of this symbol in units
    ///
    /// `WordBreak` and `Terminator` produce no key-down time.
    pub const fn duration_units(&self) -> u32 {
        match self {
            Symbol::Dit => 1,
            Symbol::Dah => 3,
            Symbol::WordBreak | Symbol::Terminator => 0,
        }
    }

    /// Returns true if this symbol produces key output
    pub const fn is_keyed(&self) -> bool {
        match self {
            Symbol::Dit | Symbol::Dah => true,
            Symbol::WordBreak | Symbol::Terminator => false,
        }
    }
}

/// Policy for characters missing from the code table
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EncodeMode {
    /// Abort the whole encode on the first unknown character
    Strict,
    /// Skip unknown characters and keep going
    Lenient,
}

/// Codec error conditions
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Character is not in the code table
    UnknownCharacter(char),
    /// Symbol sequence does not fit the 8 slots of a packed record
    RecordOverflow,
    /// Character table and record table lengths disagree
    TableMisaligned,
    /// Caller-supplied output buffer is full
    BufferOverflow,
}

#[cfg(feature = "std")]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::UnknownCharacter(ch) => write!(f, "character {:?} is not in the code table", ch),
            CodecError::RecordOverflow => write!(f, "symbol sequence exceeds 8 record slots"),
            CodecError::TableMisaligned => write!(f, "character and record tables are misaligned"),
            CodecError::BufferOverflow => write!(f, "output buffer is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Codec configuration parameters
#[derive(Copy, Clone, Debug)]
pub struct MorseConfig {
    /// Unknown-character policy
    pub mode: EncodeMode,
    /// Basic timing unit (Dit duration)
    pub unit: Duration,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            mode: EncodeMode::Strict,
            unit: Duration::from_millis(60), // 20 WPM
        }
    }
}

impl MorseConfig {
    /// Create a new configuration with validation
    pub fn new(mode: EncodeMode, wpm: u32) -> Result<Self, &'static str> {
        if wpm == 0 || wpm > 100 {
            return Err("WPM must be between 1 and 100");
        }

        // Calculate unit time from WPM (PARIS standard: 50 units per word)
        let unit = Duration::from_millis(1200 / wpm as u64);

        Ok(Self { mode, unit })
    }

    /// Get Words Per Minute from current unit timing
    pub fn wpm(&self) -> u32 {
        (1200 / self.unit.as_millis() as u32).max(1)
    }

    /// Get intra-character gap duration (between symbols of one character)
    pub fn symbol_gap(&self) -> Duration {
        self.unit
    }

    /// Get inter-character gap duration
    pub fn char_gap(&self) -> Duration {
        Duration::from_millis(self.unit.as_millis() * 3)
    }

    /// Get word gap duration
    pub fn word_gap(&self) -> Duration {
        Duration::from_millis(self.unit.as_millis() * 7)
    }
}
