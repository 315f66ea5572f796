//! Register file of the Micro Trace Buffer (MTB), the execution trace
//! unit of the Cortex-M0+.
//!
//! Offsets, bit positions and the exponent bias of the MASK field are
//! fixed by the hardware (ARM DDI 0486, SAM L21 datasheet) and must be
//! honored exactly.

use vcell::VolatileCell;

/// MTB register file base address on the SAM L21.
pub const PTR: *const RegisterBlock = 0x4100_6000 as *const _;

/// The MTB register file.
///
/// Each register is one 32-bit word on the target; `base` is typed as a
/// native word since it carries an address.
#[repr(C)]
pub struct RegisterBlock {
    /// POSITION: write pointer into the capture window.
    pub position: VolatileCell<u32>,
    /// MASTER: enable bit and window size mask.
    pub master: VolatileCell<u32>,
    /// FLOW: watermark and auto-stop control.
    pub flow: VolatileCell<u32>,
    /// BASE: address of the capture SRAM. Read-only in hardware.
    pub base: VolatileCell<usize>,
}

/// MASTER.EN: master trace enable.
pub const MASTER_EN: u32 = 1 << 31;
/// MASTER.MASK position: window size exponent, bits 4:0.
pub const MASTER_MASK_POS: u32 = 0;
/// MASTER.MASK bits. A field value of 0 selects the 16 byte minimum.
pub const MASTER_MASK_BITS: u32 = 0x1f << MASTER_MASK_POS;

/// Encodes a window size exponent into the MASTER.MASK field.
pub const fn master_mask(exp: u32) -> u32 {
    (exp << MASTER_MASK_POS) & MASTER_MASK_BITS
}

/// POSITION.WRAP: the write pointer has wrapped at least once.
pub const POSITION_WRAP: u32 = 1 << 2;
/// POSITION.POINTER: write offset into the window, bits 31:3.
pub const POSITION_POINTER_BITS: u32 = !0x7;

/// FLOW.AUTOSTOP: stop tracing when POSITION reaches the watermark.
pub const FLOW_AUTOSTOP: u32 = 1 << 0;
/// FLOW.AUTOHALT: halt the core when POSITION reaches the watermark.
pub const FLOW_AUTOHALT: u32 = 1 << 1;
/// FLOW.WATERMARK: pointer value to compare against, bits 31:3.
pub const FLOW_WATERMARK_BITS: u32 = !0x7;
