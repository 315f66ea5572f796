//! Arms the MTB at boot and leaves it capturing.

#![no_std]
#![no_main]

use panic_halt as _; // panic handler

use cortex_m::asm;
use cortex_m_rt::entry;

#[entry]
fn main() -> ! {
    // everything from here on lands in a 1 KiB window; older packets
    // fall out as it wraps
    mtb_examples::start_capture(1024);

    loop {
        asm::nop();
    }
}
