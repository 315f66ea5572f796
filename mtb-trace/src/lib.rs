//! Control of the SAM L21 Micro Trace Buffer (MTB).
//!
//! The MTB continuously records execution trace packets into a window of
//! system SRAM. This crate arms and disarms that capture: [`Mtb::enable`]
//! scrubs the window and starts the unit, [`Mtb::disable`] stops it while
//! leaving the captured packets and write pointer in place for inspection.
//! Decoding the captured packets is a debugger's job, not this crate's.

#![no_std]

use core::fmt;
use core::ptr;

pub mod registers;

use registers::RegisterBlock;

/// Smallest capture window the hardware can address, in bytes.
pub const MIN_CAPTURE_SIZE: usize = 16;

/// Rejected trace-buffer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested window is smaller than [`MIN_CAPTURE_SIZE`] or not a
    /// power of two.
    InvalidSize { size: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { size } => {
                write!(f, "invalid capture window size: {} bytes", size)
            }
        }
    }
}

/// Handle on the MTB register file.
///
/// Holds no state of its own; the hardware registers are the state.
pub struct Mtb<'a> {
    regs: &'a RegisterBlock,
}

impl<'a> Mtb<'a> {
    /// Wraps a register block, hardware or simulated.
    ///
    /// # Safety
    ///
    /// `regs` must be an MTB register file whose BASE points at writable
    /// SRAM large enough for any window later armed, and no other context
    /// may access the block while the handle lives.
    pub const unsafe fn new(regs: &'a RegisterBlock) -> Self {
        Mtb { regs }
    }

    /// Arms the trace unit over a `size`-byte capture window.
    ///
    /// `size` must be a power of two of at least [`MIN_CAPTURE_SIZE`]
    /// bytes; anything else is rejected before a single register is
    /// written. Callers that prefer to halt on a bad size rather than
    /// recover can `unwrap()` under `panic-halt`.
    ///
    /// The window is scrubbed, the write pointer and flow control are
    /// reset, and the enabling MASTER write happens last, so the unit
    /// never observes a half-updated configuration. Arming while already
    /// armed re-runs the full sequence with the new size.
    pub fn enable(&mut self, size: usize) -> Result<(), Error> {
        if size < MIN_CAPTURE_SIZE || !size.is_power_of_two() {
            return Err(Error::InvalidSize { size });
        }
        let mask = size.trailing_zeros() - 4; // MASK of 0 selects 16 bytes

        #[cfg(feature = "defmt")]
        defmt::debug!("arming MTB: {} byte window, mask {}", size, mask);

        // scrub stale packets before capture restarts
        unsafe {
            ptr::write_bytes(self.regs.base.get() as *mut u8, 0, size);
        }

        self.regs.position.set(0); // write pointer to the window start
        self.regs.flow.set(0); // no watermark, no autostop
        // the MASTER write starts the unit; it must come last
        self.regs
            .master
            .set(registers::MASTER_EN | registers::master_mask(mask));

        Ok(())
    }

    /// Stops capture.
    ///
    /// Clears only the enable bit. The mask field, write pointer and
    /// window contents survive so the last capture can be read back.
    /// A no-op when already disabled.
    pub fn disable(&mut self) {
        let master = self.regs.master.get();
        self.regs.master.set(master & !registers::MASTER_EN);

        #[cfg(feature = "defmt")]
        defmt::debug!("MTB stopped at window offset {}", self.write_offset());
    }

    /// Whether the unit is currently capturing.
    pub fn is_enabled(&self) -> bool {
        self.regs.master.get() & registers::MASTER_EN != 0
    }

    /// Size in bytes of the armed capture window.
    pub fn capture_size(&self) -> usize {
        let mask = (self.regs.master.get() & registers::MASTER_MASK_BITS)
            >> registers::MASTER_MASK_POS;
        1 << (mask + 4)
    }

    /// Current write offset into the window.
    pub fn write_offset(&self) -> u32 {
        self.regs.position.get() & registers::POSITION_POINTER_BITS
    }

    /// Whether the write pointer has wrapped since arming.
    pub fn has_wrapped(&self) -> bool {
        self.regs.position.get() & registers::POSITION_WRAP != 0
    }

    /// Start of the capture SRAM.
    pub fn base(&self) -> *const u8 {
        self.regs.base.get() as *const u8
    }
}

impl Mtb<'static> {
    /// Conjures a handle to the fixed-address device block.
    ///
    /// # Safety
    ///
    /// Must be the sole handle on the MTB, and the device must actually
    /// be a SAM L21 with its MTB at [`registers::PTR`].
    pub unsafe fn steal() -> Self {
        Mtb {
            regs: &*registers::PTR,
        }
    }
}
