//! Hardware abstraction for the key output line

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Mock instant type for compilation without embassy-time
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Instant(u64);

    impl Instant {
        pub fn from_millis(ms: i64) -> Self {
            Self(ms as u64)
        }

        pub fn duration_since(&self, other: Instant) -> Duration {
            Duration::from_millis(self.0.saturating_sub(other.0))
        }

        pub fn as_millis(&self) -> u64 {
            self.0
        }
    }

    /// Mock duration type
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Add for Duration {
        type Output = Duration;

        fn add(self, rhs: Duration) -> Duration {
            Duration(self.0 + rhs.0)
        }
    }

    impl core::ops::Div<u32> for Duration {
        type Output = Duration;

        fn div(self, rhs: u32) -> Duration {
            Duration(self.0 / rhs as u64)
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0 * rhs as u64)
        }
    }
}

use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Invalid configuration
    InvalidConfig,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for key output control
///
/// The external output driver implements this; the codec never talks
/// to hardware directly.
pub trait KeyOutput {
    type Error: From<HalError>;

    /// Set key output state (true = key down, false = key up)
    fn set_state(&mut self, state: bool) -> Result<(), Self::Error>;

    /// Get current key output state
    fn get_state(&self) -> Result<bool, Self::Error>;

    /// Toggle key output state
    fn toggle(&mut self) -> Result<(), Self::Error> {
        let current = self.get_state()?;
        self.set_state(!current)
    }
}

/// Generic implementation for embedded-hal compatible output pins
pub struct EmbeddedHalKeyOutput<P> {
    pin: P,
    inverted: bool,
    state: bool,
}

impl<P> EmbeddedHalKeyOutput<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            state: false,
        }
    }

    /// Release the wrapped pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P> KeyOutput for EmbeddedHalKeyOutput<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
        let output_state = if self.inverted { !state } else { state };
        if output_state {
            self.pin.set_high().map_err(|_| HalError::GpioError)?;
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)?;
        }
        self.state = state;
        Ok(())
    }

    fn get_state(&self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use core::cell::RefCell;

    #[derive(Default)]
    pub struct MockKeyOutput {
        state: RefCell<bool>,
        transitions: RefCell<u32>,
    }

    impl MockKeyOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_active(&self) -> bool {
            *self.state.borrow()
        }

        /// Number of state changes observed
        pub fn transitions(&self) -> u32 {
            *self.transitions.borrow()
        }
    }

    impl KeyOutput for MockKeyOutput {
        type Error = HalError;

        fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
            if *self.state.borrow() != state {
                *self.transitions.borrow_mut() += 1;
            }
            *self.state.borrow_mut() = state;
            Ok(())
        }

        fn get_state(&self) -> Result<bool, Self::Error> {
            Ok(*self.state.borrow())
        }
    }
}
