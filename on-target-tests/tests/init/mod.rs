use rp2040_hal as hal;

use hal::pac;

/// A debugger may restart the tests without a full system reset. Park core1
/// and release all spinlocks so each run starts from the same state.
///
/// Only call this first thing in `#[init]`, before anything uses core1 or a
/// spinlock.
pub unsafe fn reset_cleanup() {
    unsafe {
        let psm = &*pac::PSM::PTR;
        psm.frce_off().modify(|_, w| w.proc1().set_bit());
        while !psm.frce_off().read().proc1().bit_is_set() {
            cortex_m::asm::nop();
        }
        psm.frce_off().modify(|_, w| w.proc1().clear_bit());
        hal::sio::spinlock_reset();
    }
}
