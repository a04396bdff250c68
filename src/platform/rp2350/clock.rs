//! RP2350 clock implementation
//!
//! Millisecond time source backed by the `embassy-time` driver (the RP2350
//! 64-bit microsecond timer). The value is truncated to 32 bits, matching the
//! wraparound contract of `ClockInterface`.

use embassy_time::Instant;

use crate::platform::traits::ClockInterface;

/// Embassy-backed millisecond clock
///
/// The time driver is started by `embassy_rp::init`, so `begin` is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Create a new clock handle
    pub const fn new() -> Self {
        Self
    }
}

impl ClockInterface for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
