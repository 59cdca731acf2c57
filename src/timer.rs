//! Driver for the cascaded AXI interval timers
//!
//! Each timer is a pair of 32-bit up-counters joined into one 64-bit counter. A timer must be
//! initialized before use; afterwards it is started and stopped around the interval to measure,
//! and its count read back as a duration.
//!
//! No locking is performed: callers sharing a timer between execution contexts must serialize
//! access to it themselves. Distinct timers never interfere with each other.

use crate::{
    board::TimerConfig,
    register::{RegisterIo, TimerRegisters, TCSR},
    tick::Tick,
};
use core::time::Duration;
use derive_more::Display;
use log::{debug, trace};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

/// Errors reported by the interval timer driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// The raw timer number does not name one of the three timers
    #[display(fmt = "no interval timer is numbered {}", _0)]
    InvalidTimer(u32),
}

/// One of the three interval timers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, Display)]
#[repr(u32)]
pub enum TimerId {
    #[display(fmt = "Timer 0")]
    Timer0 = 0,
    #[display(fmt = "Timer 1")]
    Timer1 = 1,
    #[display(fmt = "Timer 2")]
    Timer2 = 2,
}

impl TimerId {
    /// Every timer, in order of their numbers
    pub const ALL: [Self; 3] = [Self::Timer0, Self::Timer1, Self::Timer2];
}

impl TryFrom<u32> for TimerId {
    type Error = Error;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        FromPrimitive::from_u32(number).ok_or(Error::InvalidTimer(number))
    }
}

impl From<TimerId> for u32 {
    fn from(timer: TimerId) -> Self {
        timer as u32
    }
}

/// A driver for the three interval timers of a board
#[allow(clippy::module_name_repetitions)]
pub struct IntervalTimer<Io> {
    /// Backend used for every register access
    io: Io,
    /// Base addresses and clock of the timers
    config: TimerConfig,
}

impl<Io: RegisterIo> IntervalTimer<Io> {
    /// Creates a driver for the timers described by `config`, accessed through `io`
    ///
    /// The timers themselves are left untouched until initialized.
    pub const fn new(io: Io, config: TimerConfig) -> Self {
        Self { io, config }
    }

    /// The board configuration this driver was created with
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// The register backend
    pub const fn io(&self) -> &Io {
        &self.io
    }

    /// Returns the base address of the registers of `timer`
    pub const fn resolve(&self, timer: TimerId) -> usize {
        self.config.base_address(timer)
    }

    /// Returns the base address of the timer with the raw number `number`
    ///
    /// Returns an `Err` if no such timer exists
    pub fn resolve_raw(&self, number: u32) -> Result<usize, Error> {
        TimerId::try_from(number).map(|timer| self.resolve(timer))
    }

    /// The registers of `timer`
    fn registers(&self, timer: TimerId) -> TimerRegisters<'_, Io> {
        TimerRegisters::new(&self.io, self.resolve(timer))
    }

    /// Initializes `timer`: clears both control registers, then cascades the two counters
    ///
    /// Must be called before the timer is otherwise used. The timer is left stopped.
    pub fn init(&self, timer: TimerId) -> Result<(), Error> {
        debug!("{timer}: initializing");
        let registers = self.registers(timer);
        registers.tcsr0.set(0);
        registers.tcsr1.set(0);
        registers.tcsr0.write(TCSR::CASC::SET);
        Ok(())
    }

    /// Initializes every timer, in order
    pub fn init_all(&self) -> Result<(), Error> {
        TimerId::ALL
            .into_iter()
            .try_for_each(|timer| self.init(timer))
    }

    /// Starts `timer` counting, preserving all other control bits
    pub fn start(&self, timer: TimerId) {
        trace!("{timer}: start");
        self.registers(timer).tcsr0.modify(TCSR::ENT::SET);
    }

    /// Stops `timer`, holding its current count
    pub fn stop(&self, timer: TimerId) {
        trace!("{timer}: stop");
        self.registers(timer).tcsr0.modify(TCSR::ENT::CLEAR);
    }

    /// Returns whether `timer` is currently counting
    pub fn is_running(&self, timer: TimerId) -> bool {
        self.registers(timer).tcsr0.is_set(TCSR::ENT)
    }

    /// Resets the count of `timer` to 0 and reinitializes it
    ///
    /// The timer is left stopped, regardless of whether it was running.
    pub fn reset(&self, timer: TimerId) -> Result<(), Error> {
        debug!("{timer}: resetting");
        let registers = self.registers(timer);

        registers.tlr0.set(0);
        registers.tcsr0.modify(TCSR::LOAD::SET);
        registers.tlr1.set(0);
        registers.tcsr1.modify(TCSR::LOAD::SET);

        // Loading can disturb the other control bits, so restore cascade mode
        self.init(timer)
    }

    /// Resets every timer, in order, then initializes them all again
    pub fn reset_all(&self) -> Result<(), Error> {
        TimerId::ALL
            .into_iter()
            .try_for_each(|timer| self.reset(timer))?;
        self.init_all()
    }

    /// Reads the 64-bit count of `timer`
    ///
    /// The counter words can tick between the reads of each half. If the high word changed
    /// while the low word was being read, a carry happened and the low word is read once more to
    /// pair with the newer high word. A second carry within that window is not possible at
    /// realistic clock rates, so this is not repeated.
    pub fn total_ticks(&self, timer: TimerId) -> Tick {
        let registers = self.registers(timer);

        let high = registers.tcr1.get();
        let low = registers.tcr0.get();
        let high_again = registers.tcr1.get();

        if high == high_again {
            Tick::from_words(high, low)
        } else {
            trace!("{timer}: counter carried during read ({high:#x} -> {high_again:#x})");
            Tick::from_words(high_again, registers.tcr0.get())
        }
    }

    /// Returns the time counted by `timer`, in seconds
    pub fn total_duration_seconds(&self, timer: TimerId) -> f64 {
        self.total_ticks(timer)
            .as_secs_f64(self.config.clock_frequency)
    }

    /// Returns the time counted by `timer`, rounded down to the nanosecond
    pub fn total_duration(&self, timer: TimerId) -> Duration {
        self.total_ticks(timer)
            .to_duration(self.config.clock_frequency)
    }
}
