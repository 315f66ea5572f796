//! Traces a region of interest, then stops for post-mortem inspection.

#![no_std]
#![no_main]

use panic_halt as _; // panic handler

use cortex_m::asm;
use cortex_m_rt::entry;
use prime_sieve::PrimeTable;

static PRIMES: PrimeTable<64> = PrimeTable::new();

#[entry]
fn main() -> ! {
    let mut mtb = mtb_examples::start_capture(256);

    // the workload under trace
    let count = PRIMES.primes().count() as u32;
    asm::delay(count);

    mtb.disable();
    asm::bkpt(); // inspect POSITION and the window from the debugger

    loop {}
}
