//! GPIO bank abstraction
//!
//! A bank hands out pins configured as push-pull outputs. This covers the two
//! HAL steps a blinky needs before the first write: bringing the pin up and
//! setting its direction.

use core::fmt::Debug;

use embedded_hal::digital::OutputPin;

use crate::config::PinId;

/// Source of output pins.
pub trait GpioBank {
    /// A pin configured as a digital output.
    type Output: OutputPin;

    /// Reported when a pin cannot be configured.
    type Error: Debug;

    /// Configure pin `id` as a push-pull output, driven low.
    ///
    /// The returned pin stays an output for as long as it exists.
    fn configure_output(&mut self, id: PinId) -> Result<Self::Output, Self::Error>;
}

impl<B: GpioBank + ?Sized> GpioBank for &mut B {
    type Output = B::Output;
    type Error = B::Error;

    #[inline]
    fn configure_output(&mut self, id: PinId) -> Result<Self::Output, Self::Error> {
        (**self).configure_output(id)
    }
}
