#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Bit-packed morse code dictionary, decoder, and CW timing engine for
//! embedded systems. Text goes in; a finite sequence of timed key
//! on/off events comes out, ready for whatever output driver the
//! target hardware provides.

pub mod types;
pub mod record;
pub mod table;
pub mod encoder;
pub mod timing;
pub mod codec;
pub mod hal;

#[cfg(feature = "embassy-time")]
pub mod player;

#[cfg(feature = "test-utils")]
pub mod test_utils;


pub use codec::*;
pub use encoder::*;
pub use record::*;
pub use timing::*;
pub use types::*;
pub use hal::{Duration, EmbeddedHalKeyOutput, HalError, Instant, KeyOutput};

/// Codec library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration for most CW applications
pub fn default_config() -> MorseConfig {
    MorseConfig {
        mode: EncodeMode::Strict,
        unit: Duration::from_millis(60), // 20 WPM
    }
}
