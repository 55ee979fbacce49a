//! Blink configuration
//!
//! The pin is always named by the caller. Which line drives an LED is a
//! property of the board, not of this crate, so there is no default pin.

use core::fmt;

use fugit::{ExtU32, MillisDurationU32};

/// Time spent in each phase unless overridden with [`BlinkConfig::with_half_period`].
pub const DEFAULT_HALF_PERIOD: MillisDurationU32 = MillisDurationU32::millis(500);

/// Numeric index of a GPIO line, as defined by the hardware.
///
/// No range check happens here; the [`GpioBank`](crate::GpioBank) that
/// configures the pin decides what it accepts.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(u8);

impl PinId {
    /// Wrap a raw pin number.
    pub const fn new(num: u8) -> Self {
        Self(num)
    }

    /// The raw pin number.
    pub const fn num(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(num: u8) -> Self {
        Self(num)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Which pin to blink and how long each phase lasts.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkConfig {
    pin: PinId,
    half_period: MillisDurationU32,
}

impl BlinkConfig {
    /// Blink `pin` with the default half period of 500 ms.
    pub const fn new(pin: PinId) -> Self {
        Self {
            pin,
            half_period: DEFAULT_HALF_PERIOD,
        }
    }

    /// Replace the time spent in each phase.
    pub const fn with_half_period(mut self, half_period: MillisDurationU32) -> Self {
        self.half_period = half_period;
        self
    }

    /// The pin to configure as an output.
    pub const fn pin(&self) -> PinId {
        self.pin
    }

    /// Time spent in each of the ON and OFF phases.
    pub const fn half_period(&self) -> MillisDurationU32 {
        self.half_period
    }

    /// Length of one full ON + OFF cycle.
    pub fn period(&self) -> MillisDurationU32 {
        (self.half_period.to_millis() * 2).millis()
    }
}
