//! Driver for a board's three AXI interval timers
//!
//! Each timer cascades two 32-bit counters into a free-running 64-bit counter, used to measure
//! elapsed time between a start and a stop. Register accesses go through a [`RegisterIo`]
//! backend: [`board::Mmio`] on hardware, or any in-memory register file under test.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(clippy::correctness)]
#![warn(clippy::pedantic)]
#![warn(clippy::suspicious)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

/// Board descriptions and the memory-mapped register backend
pub mod board;
pub mod register;
/// Raw tick counts
pub mod tick;
pub mod timer;

pub use board::{Mmio, TimerConfig};
pub use register::RegisterIo;
pub use tick::Tick;
pub use timer::{Error, IntervalTimer, TimerId};
