/// Wrapper for memory-mapped registers
mod mmio;
pub use mmio::Mmio;

use crate::timer::TimerId;
use core::num::NonZeroU32;
use log::info;

/// Where the timers of a board live, and how fast they count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    /// Physical base address of each timer, indexed by timer number
    pub base_addresses: [usize; 3],
    /// Frequency of the clock driving all three timers, in Hz
    pub clock_frequency: NonZeroU32,
}

impl TimerConfig {
    /// Describes a board with the given timer base addresses and clock
    #[must_use]
    pub const fn new(base_addresses: [usize; 3], clock_frequency: NonZeroU32) -> Self {
        Self {
            base_addresses,
            clock_frequency,
        }
    }

    /// The base address of the registers of `timer`
    #[must_use]
    pub const fn base_address(&self, timer: TimerId) -> usize {
        match timer {
            TimerId::Timer0 => self.base_addresses[0],
            TimerId::Timer1 => self.base_addresses[1],
            TimerId::Timer2 => self.base_addresses[2],
        }
    }

    /// Logs the board configuration
    pub fn log(&self) {
        for timer in TimerId::ALL {
            info!("{}: base address {:#010x}", timer, self.base_address(timer));
        }
        info!("Timer clock frequency: {} Hz", self.clock_frequency);
    }
}

/// Clock frequency of the AXI timers on the Zybo design, in Hz
const ZYBO_CLOCK_FREQUENCY: NonZeroU32 = match NonZeroU32::new(100_000_000) {
    Some(frequency) => frequency,
    None => unreachable!(),
};

/// The three AXI timers of the Zybo hardware design
pub const ZYBO: TimerConfig = TimerConfig::new(
    [0x4280_0000, 0x4284_0000, 0x4288_0000],
    ZYBO_CLOCK_FREQUENCY,
);

#[cfg(test)]
mod tests {
    use super::ZYBO;
    use crate::timer::TimerId;

    #[test]
    fn timers_map_to_their_own_base_address() {
        assert_eq!(ZYBO.base_address(TimerId::Timer0), 0x4280_0000);
        assert_eq!(ZYBO.base_address(TimerId::Timer1), 0x4284_0000);
        assert_eq!(ZYBO.base_address(TimerId::Timer2), 0x4288_0000);
        assert_eq!(ZYBO.clock_frequency.get(), 100_000_000);
    }

    #[test]
    fn logging_without_a_logger_is_harmless() {
        ZYBO.log();
    }
}
