//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_blink::platform::mock::{MockClock, MockGpio};
//! use pico_blink::devices::led::BlinkTimer;
//!
//! let mut led = MockGpio::new_input();
//! let clock = MockClock::new();
//! let mut blink = BlinkTimer::new(&mut led, &clock);
//! blink.start(100, 900)?;
//! ```

#![cfg(any(test, feature = "mock"))]

mod clock;
mod gpio;
mod port;

pub use clock::MockClock;
pub use gpio::MockGpio;
pub use port::MockPort;
