use bitfield_struct::bitfield;
use core::{num::NonZeroU32, time::Duration};

/// The number of nanoseconds per second
const NANOSEC_PER_SEC: u64 = 1_000_000_000;

/// The cascaded counter as the hardware exposes it: two 32-bit words
#[bitfield(u64)]
struct CounterWords {
    /// Counter 0
    low: u32,
    /// Counter 1, incremented whenever counter 0 wraps
    high: u32,
}

/// Encloses a count of timer clock ticks
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default)]
pub struct Tick {
    /// The tick value
    tick: u64,
}

impl Tick {
    /// No ticks at all
    pub const ZERO: Self = Self::new(0);

    /// Creates a new `Tick` enclosing the given tick
    #[must_use]
    pub const fn new(tick: u64) -> Self {
        Self { tick }
    }

    /// Joins the high and low counter words into a single count
    #[must_use]
    pub fn from_words(high: u32, low: u32) -> Self {
        Self {
            tick: CounterWords::new().with_low(low).with_high(high).into(),
        }
    }

    /// The upper 32 bits, as held by counter 1
    #[must_use]
    pub fn high(self) -> u32 {
        CounterWords::from(self.tick).high()
    }

    /// The lower 32 bits, as held by counter 0
    #[must_use]
    pub fn low(self) -> u32 {
        CounterWords::from(self.tick).low()
    }

    /// Converts to seconds by multiplying with the clock period of `frequency`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self, frequency: NonZeroU32) -> f64 {
        let period = 1.0 / f64::from(frequency.get());
        self.tick as f64 * period
    }

    /// Converts to a `Duration`, rounding down to the nanosecond
    #[must_use]
    pub fn to_duration(self, frequency: NonZeroU32) -> Duration {
        let frequency = u64::from(frequency.get());
        let seconds = self.tick / frequency;
        let remainder = self.tick % frequency;
        // `remainder < frequency`, so this is always less than one second
        let nanoseconds = u128::from(remainder) * u128::from(NANOSEC_PER_SEC) / u128::from(frequency);

        #[allow(clippy::cast_possible_truncation)]
        Duration::new(seconds, nanoseconds as u32)
    }
}

impl From<Tick> for u64 {
    fn from(tick: Tick) -> Self {
        tick.tick
    }
}

impl From<u64> for Tick {
    fn from(tick: u64) -> Self {
        Self { tick }
    }
}
