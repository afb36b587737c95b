//! Symbol sequences to timed key events
//!
//! Standard CW ratios, all derived from one unit (the dit duration):
//! dit on 1, dah on 3, gap between symbols of a character 1, gap
//! between characters 3, word gap 7. The word gap replaces the
//! character gaps that would otherwise border it, so total inter-word
//! silence is exactly 7 units.

use heapless::Vec;

use crate::hal::Duration;
use crate::record::SymbolSeq;
use crate::types::{CodecError, Symbol};

/// Inter-character gap in units
pub const CHAR_GAP_UNITS: u32 = 3;
/// Word gap in units
pub const WORD_GAP_UNITS: u32 = 7;

/// One key-line event: signal level and how long to hold it
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct KeyEvent {
    /// Key down (signal on) when true
    pub on: bool,
    /// How long the level is held
    pub duration: Duration,
}

impl KeyEvent {
    /// Key-down event
    pub const fn on_for(duration: Duration) -> Self {
        Self { on: true, duration }
    }

    /// Key-up event
    pub const fn off_for(duration: Duration) -> Self {
        Self { on: false, duration }
    }
}

/// Converts per-character symbol sequences into key events
#[derive(Copy, Clone, Debug)]
pub struct TimingEngine {
    unit: Duration,
}

impl TimingEngine {
    /// Create an engine with the given unit (dit) duration
    pub const fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// The configured unit duration
    pub const fn unit(&self) -> Duration {
        self.unit
    }

    /// Materialize the event sequence for a run of characters
    ///
    /// `chars` carries one symbol sequence per input character; the
    /// grouping is what marks character boundaries. The result is a
    /// complete, finite sequence: the caller may replay it with a
    /// blocking delay loop or feed it to a timer-driven state machine.
    pub fn to_events<const N: usize>(
        &self,
        chars: &[SymbolSeq],
    ) -> Result<Vec<KeyEvent, N>, CodecError> {
        let mut events = Vec::new();
        // Set once a keyed character has ended; the 3-unit boundary
        // gap is owed only if another keyed symbol follows.
        let mut gap_owed = false;

        for seq in chars {
            let mut keyed_in_char = false;
            for &symbol in seq.iter() {
                match symbol {
                    Symbol::Dit | Symbol::Dah => {
                        if gap_owed {
                            Self::push(&mut events, KeyEvent::off_for(self.unit * CHAR_GAP_UNITS))?;
                            gap_owed = false;
                        } else if keyed_in_char {
                            Self::push(&mut events, KeyEvent::off_for(self.unit))?;
                        }
                        let held = self.unit * symbol.duration_units();
                        Self::push(&mut events, KeyEvent::on_for(held))?;
                        keyed_in_char = true;
                    }
                    Symbol::WordBreak => {
                        // The word gap is the whole inter-word silence
                        Self::push(&mut events, KeyEvent::off_for(self.unit * WORD_GAP_UNITS))?;
                        gap_owed = false;
                        keyed_in_char = false;
                    }
                    Symbol::Terminator => break,
                }
            }
            if keyed_in_char {
                gap_owed = true;
            }
        }
        Ok(events)
    }

    /// Events for a single character's symbols
    pub fn char_events<const N: usize>(
        &self,
        seq: &SymbolSeq,
    ) -> Result<Vec<KeyEvent, N>, CodecError> {
        self.to_events(core::slice::from_ref(seq))
    }

    fn push<const N: usize>(
        events: &mut Vec<KeyEvent, N>,
        event: KeyEvent,
    ) -> Result<(), CodecError> {
        events.push(event).map_err(|_| CodecError::BufferOverflow)
    }
}
