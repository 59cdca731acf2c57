//! Register-level access to one AXI interval timer
//!
//! Accesses go through a [`RegisterIo`] backend rather than a dereferenced register block, so the
//! same driver runs against real memory-mapped registers or an in-memory register file.

use core::marker::PhantomData;
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, RegisterLongName,
};

/// A capability to perform single, aligned 32-bit register accesses
pub trait RegisterIo {
    /// Reads the 32-bit register at `address`
    fn read32(&self, address: usize) -> u32;

    /// Writes `value` to the 32-bit register at `address`
    fn write32(&self, address: usize, value: u32);
}

impl<Io: RegisterIo + ?Sized> RegisterIo for &Io {
    fn read32(&self, address: usize) -> u32 {
        (**self).read32(address)
    }

    fn write32(&self, address: usize, value: u32) {
        (**self).write32(address, value);
    }
}

/// Offsets of each register from the base address of a timer
pub mod offset {
    /// Control/status register for counter 0
    pub const TCSR0: usize = 0x00;
    /// Load register for counter 0
    pub const TLR0: usize = 0x04;
    /// Counter 0, the low 32 bits of the cascaded counter
    pub const TCR0: usize = 0x08;
    /// Control/status register for counter 1
    pub const TCSR1: usize = 0x10;
    /// Load register for counter 1
    pub const TLR1: usize = 0x14;
    /// Counter 1, the high 32 bits of the cascaded counter
    pub const TCR1: usize = 0x18;
}

register_bitfields! {
    u32,
    /// Timer control/status register
    ///
    /// Counter 1 shares the layout, except that `CASC` and `ENALL` are only meaningful on counter 0
    pub TCSR [
        /// Timer mode
        MDT OFFSET(0) NUMBITS(1) [
            Generate = 0,
            Capture = 1,
        ],
        /// Up/down count select
        UDT OFFSET(1) NUMBITS(1) [
            Up = 0,
            Down = 1,
        ],
        /// External generate signal enable
        GENT OFFSET(2) NUMBITS(1) [],
        /// External capture trigger enable
        CAPT OFFSET(3) NUMBITS(1) [],
        /// Auto reload/hold
        ARHT OFFSET(4) NUMBITS(1) [],
        /// Load the counter from the load register
        LOAD OFFSET(5) NUMBITS(1) [],
        /// Interrupt enable
        ENIT OFFSET(6) NUMBITS(1) [],
        /// Counter enable
        ENT OFFSET(7) NUMBITS(1) [],
        /// Interrupt status
        TINT OFFSET(8) NUMBITS(1) [],
        /// Pulse width modulation enable
        PWMA OFFSET(9) NUMBITS(1) [],
        /// Enable both counters at once
        ENALL OFFSET(10) NUMBITS(1) [],
        /// Cascade the two counters into one 64-bit counter
        CASC OFFSET(11) NUMBITS(1) [],
    ]
}

/// Access marker for registers that can only be read
pub enum ReadOnly {}
/// Access marker for registers that can only be written
pub enum WriteOnly {}
/// Access marker for registers that can be both read and written
pub enum ReadWrite {}

/// Access markers that permit reads
pub trait CanRead {}
/// Access markers that permit writes
pub trait CanWrite {}

impl CanRead for ReadOnly {}
impl CanRead for ReadWrite {}
impl CanWrite for WriteOnly {}
impl CanWrite for ReadWrite {}

/// A handle to a single 32-bit register, accessed through `Io`
///
/// Implements the `tock-registers` interfaces appropriate to its access, so the usual `get`,
/// `set`, `write`, `modify` and `is_set` operations are available.
pub struct Register<'io, Io: ?Sized, Access, Name: RegisterLongName = ()> {
    /// Backend through which accesses are performed
    io: &'io Io,
    /// Absolute address of the register
    address: usize,
    /// Access permissions and bitfield layout
    associated: PhantomData<(Access, Name)>,
}

impl<'io, Io: ?Sized, Access, Name: RegisterLongName> Register<'io, Io, Access, Name> {
    /// Creates a handle to the register at `address`
    const fn new(io: &'io Io, address: usize) -> Self {
        Self {
            io,
            address,
            associated: PhantomData,
        }
    }

    /// The absolute address of this register
    #[must_use]
    pub const fn address(&self) -> usize {
        self.address
    }
}

impl<Io: RegisterIo + ?Sized, Access: CanRead, Name: RegisterLongName> Readable
    for Register<'_, Io, Access, Name>
{
    type T = u32;
    type R = Name;

    fn get(&self) -> u32 {
        self.io.read32(self.address)
    }
}

impl<Io: RegisterIo + ?Sized, Access: CanWrite, Name: RegisterLongName> Writeable
    for Register<'_, Io, Access, Name>
{
    type T = u32;
    type R = Name;

    fn set(&self, value: u32) {
        self.io.write32(self.address, value);
    }
}

/// The register set of one timer, located at a base address
pub struct TimerRegisters<'io, Io: ?Sized> {
    /// Control/status of counter 0, which also holds the cascade setting
    pub tcsr0: Register<'io, Io, ReadWrite, TCSR::Register>,
    /// Load value for counter 0
    pub tlr0: Register<'io, Io, WriteOnly>,
    /// Low word of the cascaded counter
    pub tcr0: Register<'io, Io, ReadOnly>,
    /// Control/status of counter 1
    pub tcsr1: Register<'io, Io, ReadWrite, TCSR::Register>,
    /// Load value for counter 1
    pub tlr1: Register<'io, Io, WriteOnly>,
    /// High word of the cascaded counter
    pub tcr1: Register<'io, Io, ReadOnly>,
}

impl<'io, Io: RegisterIo + ?Sized> TimerRegisters<'io, Io> {
    /// Describes the registers of the timer at `base_address`
    pub const fn new(io: &'io Io, base_address: usize) -> Self {
        Self {
            tcsr0: Register::new(io, base_address + offset::TCSR0),
            tlr0: Register::new(io, base_address + offset::TLR0),
            tcr0: Register::new(io, base_address + offset::TCR0),
            tcsr1: Register::new(io, base_address + offset::TCSR1),
            tlr1: Register::new(io, base_address + offset::TLR1),
            tcr1: Register::new(io, base_address + offset::TCR1),
        }
    }
}
