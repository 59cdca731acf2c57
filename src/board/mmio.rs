use crate::register::RegisterIo;
use core::ptr;

/// Memory mapped IO, performing volatile accesses at physical addresses
///
/// Every address handed to this backend is dereferenced as-is, so it only makes sense where the
/// timer registers are identity-mapped (or no MMU is active)
pub struct Mmio {
    /// Prevents construction without going through `new`
    _private: (),
}

impl Mmio {
    /// Creates an MMIO backend
    /// # Safety
    /// Every address this backend is asked to access must be a valid, 4-byte aligned,
    /// memory-mapped device register, and must not be accessed in any conflicting way while this
    /// backend exists
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for Mmio {
    fn read32(&self, address: usize) -> u32 {
        debug_assert!(address % 4 == 0, "Register accesses should be aligned");
        // SAFETY: By assumption, `address` is a valid device register
        unsafe { ptr::read_volatile(ptr::with_exposed_provenance::<u32>(address)) }
    }

    fn write32(&self, address: usize, value: u32) {
        debug_assert!(address % 4 == 0, "Register accesses should be aligned");
        // SAFETY: By assumption, `address` is a valid device register
        unsafe { ptr::write_volatile(ptr::with_exposed_provenance_mut::<u32>(address), value) }
    }
}
