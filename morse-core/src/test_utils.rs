//! Test utilities for codec functionality

#[cfg(all(feature = "test-utils", feature = "std"))]
pub mod render {
    //! Human-readable rendering of symbol sequences

    use heapless::String;

    use crate::record::SymbolSeq;
    use crate::types::Symbol;

    /// Render per-character symbol sequences as a morse string
    ///
    /// Dits become `.`, dahs `-`, word breaks `/`; characters are
    /// separated by single spaces. Output is truncated silently if it
    /// outgrows `N`.
    pub fn to_morse_string<const N: usize>(chars: &[SymbolSeq]) -> String<N> {
        let mut out = String::new();
        for (i, seq) in chars.iter().enumerate() {
            if i > 0 {
                out.push(' ').ok();
            }
            for symbol in seq.iter() {
                let glyph = match symbol {
                    Symbol::Dit => '.',
                    Symbol::Dah => '-',
                    Symbol::WordBreak => '/',
                    Symbol::Terminator => continue,
                };
                out.push(glyph).ok();
            }
        }
        out
    }
}

#[cfg(all(feature = "test-utils", feature = "std"))]
pub mod analysis {
    //! Timing breakdown of generated event sequences

    use crate::hal::Duration;
    use crate::timing::KeyEvent;

    /// Aggregate timing of one event sequence
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimingAnalysis {
        /// Total key-down time
        pub on_time: Duration,
        /// Total key-up time
        pub off_time: Duration,
        /// Number of key-down events
        pub on_events: usize,
        /// Number of key-up events
        pub off_events: usize,
    }

    impl TimingAnalysis {
        /// Total sequence duration
        pub fn total(&self) -> Duration {
            self.on_time + self.off_time
        }

        /// Key-down time expressed in whole units
        ///
        /// Returns `None` if the on-time is not an exact multiple of
        /// the unit.
        pub fn on_units(&self, unit: Duration) -> Option<u64> {
            let unit_ms = unit.as_millis();
            let on_ms = self.on_time.as_millis();
            if unit_ms == 0 || on_ms % unit_ms != 0 {
                return None;
            }
            Some(on_ms / unit_ms)
        }
    }

    /// Sum on/off durations over an event sequence
    pub fn analyze(events: &[KeyEvent]) -> TimingAnalysis {
        let mut analysis = TimingAnalysis {
            on_time: Duration::from_millis(0),
            off_time: Duration::from_millis(0),
            on_events: 0,
            off_events: 0,
        };

        for event in events {
            if event.on {
                analysis.on_time += event.duration;
                analysis.on_events += 1;
            } else {
                analysis.off_time += event.duration;
                analysis.off_events += 1;
            }
        }
        analysis
    }
}
