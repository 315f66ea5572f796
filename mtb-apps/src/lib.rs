#![no_std]

use mtb_trace::Mtb;

/// Arms the MTB over a `size`-byte window, halting on a bad size.
pub fn start_capture(size: usize) -> Mtb<'static> {
    let mut mtb = unsafe { Mtb::steal() };
    mtb.enable(size).unwrap();
    mtb
}
