//! Platform abstraction layer
//!
//! Handles the seams between the host and the simulation thread:
//! - Time (monotonic clock readings)
//! - Input (flags written by the input thread, drained once per tick)

pub mod input;
pub mod time;

pub use input::InputLatch;
pub use time::{Clock, ManualClock, SystemClock};
