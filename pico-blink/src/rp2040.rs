//! RP2040 GPIO bank 0
//!
//! [`Bank0`] takes the whole set of bank 0 [`Pins`] and hands out any one of
//! them by number as a push-pull output. Pins are selected at runtime, so the
//! returned type is a [`DynPinId`] pin.
//!
//! ```ignore
//! let pins = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);
//! let mut bank = Bank0::new(pins);
//! let led = bank.configure_output(PinId::new(25))?;
//! ```

use core::fmt;

use embedded_hal::digital::OutputPin;
use rp2040_hal::gpio::{
    self, DynBankId, DynPinId, DynPullType, FunctionSioOutput, Pin, Pins,
};

use crate::bank::GpioBank;
use crate::config::PinId;

/// Number of user GPIOs in bank 0 (GPIO0 to GPIO29).
pub const BANK0_PIN_COUNT: u8 = 30;

/// A bank 0 pin configured as a push-pull output.
pub type LedPin = Pin<DynPinId, FunctionSioOutput, DynPullType>;

/// Reasons [`Bank0`] refuses to hand out a pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BankError {
    /// There is no such pin in bank 0.
    InvalidPin(PinId),
    /// The pin was already handed out by this bank.
    AlreadyTaken(PinId),
    /// The pin cannot be switched to the SIO function.
    FunctionRejected(PinId),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::InvalidPin(id) => write!(f, "{} is not a bank 0 pin", id),
            BankError::AlreadyTaken(id) => write!(f, "{} is already in use", id),
            BankError::FunctionRejected(id) => write!(f, "{} cannot be used as SIO output", id),
        }
    }
}

/// Owner of every bank 0 pin.
pub struct Bank0 {
    taken: u32,
}

impl Bank0 {
    /// Take ownership of bank 0.
    ///
    /// Building [`Pins`] brings IO bank 0 out of reset, and consuming it here
    /// guarantees no typed pin handle for this bank exists elsewhere.
    pub fn new(pins: Pins) -> Self {
        let _ = pins;
        Self { taken: 0 }
    }

    /// Whether pin `id` has already been handed out.
    pub fn is_taken(&self, id: PinId) -> bool {
        id.num() < BANK0_PIN_COUNT && self.taken & (1 << id.num()) != 0
    }
}

impl GpioBank for Bank0 {
    type Output = LedPin;
    type Error = BankError;

    fn configure_output(&mut self, id: PinId) -> Result<LedPin, BankError> {
        if id.num() >= BANK0_PIN_COUNT {
            return Err(BankError::InvalidPin(id));
        }
        if self.is_taken(id) {
            return Err(BankError::AlreadyTaken(id));
        }

        // Safety: `Pins` was consumed in `Bank0::new` and the `taken` mask
        // makes sure each number is only instantiated once.
        let pin = unsafe {
            gpio::new_pin(DynPinId {
                bank: DynBankId::Bank0,
                num: id.num(),
            })
        };
        let mut pin = pin
            .try_into_function::<FunctionSioOutput>()
            .map_err(|_| BankError::FunctionRejected(id))?;
        match pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }

        self.taken |= 1 << id.num();
        Ok(pin)
    }
}
