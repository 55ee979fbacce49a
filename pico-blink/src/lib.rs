//! Single-pin blink controller
//!
//! Drives one GPIO output line HIGH, waits half a period, drives it LOW, waits
//! again, forever. The controller is generic over the [`embedded-hal`] traits,
//! so the same state machine runs on real hardware and against recording fakes
//! in host tests.
//!
//! ## Basic usage
//! ```ignore
//! use pico_blink::{rp2040::Bank0, BlinkConfig, BlinkController, PinId};
//! use rp2040_hal::{clocks::init_clocks_and_plls, gpio::Pins, pac, Sio, Timer, Watchdog};
//!
//! let mut pac = pac::Peripherals::take().unwrap();
//! let mut watchdog = Watchdog::new(pac.WATCHDOG);
//! let clocks = init_clocks_and_plls(12_000_000, pac.XOSC, pac.CLOCKS, pac.PLL_SYS, pac.PLL_USB, &mut pac.RESETS, &mut watchdog).ok().unwrap();
//! let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
//! let sio = Sio::new(pac.SIO);
//! let pins = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);
//!
//! let mut bank = Bank0::new(pins);
//! let blinky = BlinkController::initialize(&mut bank, timer, BlinkConfig::new(PinId::new(25))).unwrap();
//! blinky.run_forever();
//! ```
//!
//! ## Cargo features
//!
//! - `rp2040`: the [`rp2040::Bank0`] backend, built on `rp2040-hal`.
//! - `defmt`: `defmt::Format` for the public types, plus log messages on pin
//!   configuration and every phase transition.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![warn(missing_docs)]
#![no_std]

#[macro_use]
mod fmt;

pub mod bank;
pub mod config;
pub mod controller;
#[cfg(feature = "rp2040")]
pub mod rp2040;

pub use bank::GpioBank;
pub use config::{BlinkConfig, PinId, DEFAULT_HALF_PERIOD};
pub use controller::{BlinkController, InitError, Phase};

pub use embedded_hal::digital::PinState;
pub use fugit;
