//! Blink controller
//!
//! Owns one output pin and one blocking delay source, and alternates the pin
//! between two phases:
//!
//! ```text
//! initialize ──> On ──(half period)──> Off ──(half period)──> On ──> ...
//! ```
//!
//! The first write after initialization is always HIGH. There is no terminal
//! phase.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::bank::GpioBank;
use crate::config::BlinkConfig;

/// One half of a blink cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pin driven high.
    On,
    /// Pin driven low.
    Off,
}

impl Phase {
    /// Logic level driven while in this phase.
    pub const fn level(self) -> PinState {
        match self {
            Phase::On => PinState::High,
            Phase::Off => PinState::Low,
        }
    }

    /// The phase that follows this one.
    pub const fn next(self) -> Self {
        match self {
            Phase::On => Phase::Off,
            Phase::Off => Phase::On,
        }
    }
}

/// Failure to set up the controller.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitError<E> {
    /// The bank refused to configure the pin as an output.
    Configure(E),
}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Configure(e) => write!(f, "failed to configure output pin: {:?}", e),
        }
    }
}

/// Blinks a single output pin.
pub struct BlinkController<P, D> {
    pin: P,
    delay: D,
    config: BlinkConfig,
    phase: Phase,
}

impl<P, D> BlinkController<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Configure `config.pin()` as an output through `bank` and take ownership
    /// of it.
    ///
    /// This is the only place the pin direction is set. An error here means
    /// the hardware layer rejected the pin, and there is nothing to fall back
    /// to.
    pub fn initialize<B>(
        mut bank: B,
        delay: D,
        config: BlinkConfig,
    ) -> Result<Self, InitError<B::Error>>
    where
        B: GpioBank<Output = P>,
    {
        let pin = bank
            .configure_output(config.pin())
            .map_err(InitError::Configure)?;
        info!(
            "blink: {} configured as output, half period {} ms",
            config.pin(),
            config.half_period().to_millis()
        );
        Ok(Self::new(pin, delay, config))
    }

    /// Build a controller around a pin that is already an output.
    pub fn new(pin: P, delay: D, config: BlinkConfig) -> Self {
        Self {
            pin,
            delay,
            config,
            phase: Phase::On,
        }
    }

    /// The phase the next [`step`](Self::step) will drive.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Drive the current phase's level, block for the half period, then move
    /// to the other phase.
    ///
    /// Returns the phase that was just driven.
    pub fn step(&mut self) -> Result<Phase, P::Error> {
        let phase = self.phase;
        self.pin.set_state(phase.level())?;
        debug!("blink: {} -> {}", self.config.pin(), phase);
        self.delay.delay_ms(self.config.half_period().to_millis());
        self.phase = phase.next();
        Ok(phase)
    }

    /// Run `cycles` full ON + OFF cycles.
    pub fn run_cycles(&mut self, cycles: u32) -> Result<(), P::Error> {
        for _ in 0..cycles {
            self.step()?;
            self.step()?;
        }
        Ok(())
    }

    /// Blink until reset or power loss.
    ///
    /// # Panics
    /// If the pin reports a write error. The controller has no way to recover
    /// the line, so this is treated as fatal.
    pub fn run_forever(mut self) -> ! {
        loop {
            if let Err(e) = self.step() {
                error!(
                    "blink: write to {} failed: {}",
                    self.config.pin(),
                    defmt::Debug2Format(&e)
                );
                panic!("blink: write to {} failed: {:?}", self.config.pin(), e);
            }
        }
    }

    /// Stop blinking and give back the pin and the delay source.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::PinId;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use fugit::ExtU32;
    use std::vec::Vec;

    #[derive(Default)]
    struct LevelLog(Vec<PinState>);

    impl ErrorType for LevelLog {
        type Error = Infallible;
    }

    impl OutputPin for LevelLog {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.push(PinState::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.push(PinState::High);
            Ok(())
        }
    }

    #[derive(Default)]
    struct DelayLog(Vec<u32>);

    impl DelayNs for DelayLog {
        fn delay_ns(&mut self, ns: u32) {
            self.0.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.push(ms);
        }
    }

    /// Fails every write after the first `ok_writes`.
    struct FlakyPin {
        ok_writes: usize,
    }

    impl ErrorType for FlakyPin {
        type Error = ErrorKind;
    }

    impl OutputPin for FlakyPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.set_high()
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            match self.ok_writes.checked_sub(1) {
                Some(left) => {
                    self.ok_writes = left;
                    Ok(())
                }
                None => Err(ErrorKind::Other),
            }
        }
    }

    fn controller(half_period_ms: u32) -> BlinkController<LevelLog, DelayLog> {
        let config = BlinkConfig::new(PinId::new(25)).with_half_period(half_period_ms.millis());
        BlinkController::new(LevelLog::default(), DelayLog::default(), config)
    }

    #[test]
    fn phase_alternates() {
        assert_eq!(Phase::On.next(), Phase::Off);
        assert_eq!(Phase::Off.next(), Phase::On);
        assert_eq!(Phase::On.level(), PinState::High);
        assert_eq!(Phase::Off.level(), PinState::Low);
    }

    #[test]
    fn starts_on() {
        let blinky = controller(500);
        assert_eq!(blinky.phase(), Phase::On);
    }

    #[test]
    fn step_writes_then_waits() {
        let mut blinky = controller(500);
        assert_eq!(blinky.step(), Ok(Phase::On));
        assert_eq!(blinky.phase(), Phase::Off);
        assert_eq!(blinky.step(), Ok(Phase::Off));
        assert_eq!(blinky.phase(), Phase::On);

        let (pin, delay) = blinky.release();
        assert_eq!(pin.0, [PinState::High, PinState::Low]);
        assert_eq!(delay.0, [500, 500]);
    }

    #[test]
    fn cycles_are_two_steps_each() {
        let mut blinky = controller(40);
        blinky.run_cycles(3).unwrap();
        assert_eq!(blinky.phase(), Phase::On);

        let (pin, delay) = blinky.release();
        assert_eq!(pin.0.len(), 6);
        assert!(pin
            .0
            .iter()
            .enumerate()
            .all(|(i, level)| *level == if i % 2 == 0 { PinState::High } else { PinState::Low }));
        assert!(delay.0.iter().all(|ms| *ms == 40));
    }

    #[test]
    fn zero_cycles_touches_nothing() {
        let mut blinky = controller(500);
        blinky.run_cycles(0).unwrap();
        let (pin, delay) = blinky.release();
        assert!(pin.0.is_empty());
        assert!(delay.0.is_empty());
    }

    #[test]
    fn write_error_skips_delay_and_keeps_phase() {
        let config = BlinkConfig::new(PinId::new(3));
        let mut blinky = BlinkController::new(FlakyPin { ok_writes: 1 }, DelayLog::default(), config);
        assert_eq!(blinky.step(), Ok(Phase::On));
        assert_eq!(blinky.step(), Err(ErrorKind::Other));
        assert_eq!(blinky.phase(), Phase::Off);
        let (_, delay) = blinky.release();
        assert_eq!(delay.0, [500]);
    }

    #[test]
    #[should_panic(expected = "write to GPIO3 failed")]
    fn run_forever_panics_on_write_error() {
        let config = BlinkConfig::new(PinId::new(3));
        let blinky = BlinkController::new(FlakyPin { ok_writes: 9 }, DelayLog::default(), config);
        blinky.run_forever();
    }

    #[test]
    fn init_error_display() {
        let e: InitError<ErrorKind> = InitError::Configure(ErrorKind::Other);
        assert_eq!(
            std::format!("{}", e),
            "failed to configure output pin: Other"
        );
    }
}
