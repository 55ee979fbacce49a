//! # Pico Blinky
//!
//! Blinks the on-board LED of a Raspberry Pi Pico: 500 ms on, 500 ms off,
//! until reset.
//!
//! The LED sits on GP25. Boards with the LED elsewhere only need
//! `PICO_LED_PIN` changed.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use rp2040_hal as hal;

use hal::{clocks::init_clocks_and_plls, gpio::Pins, pac, Sio, Timer, Watchdog};
use pico_blink::{rp2040::Bank0, BlinkConfig, BlinkController, PinId};

/// The linker will place this boot block at the start of our program image. We
/// need this to help the ROM bootloader get our code up and running.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

/// External high-speed crystal on the Raspberry Pi Pico board is 12 MHz. Adjust
/// if your board has a different frequency
const XTAL_FREQ_HZ: u32 = 12_000_000u32;

/// GPIO wired to the on-board LED on the Pico.
const PICO_LED_PIN: PinId = PinId::new(25);

const BLINK: BlinkConfig = BlinkConfig::new(PICO_LED_PIN);

/// Entry point to our bare-metal application.
///
/// The `#[rp2040_hal::entry]` macro ensures the Cortex-M start-up code calls this function
/// as soon as all global variables and the spinlock are initialised.
#[rp2040_hal::entry]
fn main() -> ! {
    defmt::info!("pico-blink {}", env!("CARGO_PKG_VERSION"));

    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The timer is the blocking delay source between transitions
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let mut bank = Bank0::new(pins);

    let blinky = match BlinkController::initialize(&mut bank, timer, BLINK) {
        Ok(blinky) => blinky,
        Err(e) => defmt::panic!("cannot drive {}: {}", PICO_LED_PIN, e),
    };

    blinky.run_forever()
}

/// Program metadata for `picotool info`
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [rp_binary_info::EntryAddr; 5] = [
    rp_binary_info::rp_program_name!(c"pico-blink"),
    rp_binary_info::rp_cargo_version!(),
    rp_binary_info::rp_program_description!(c"Blinks the on-board LED on GP25"),
    rp_binary_info::rp_program_build_attribute!(),
    rp_binary_info::rp_pico_board!(c"pico"),
];

// End of file
