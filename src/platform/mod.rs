//! Platform abstraction layer
//!
//! This module provides hardware abstraction for different microcontroller platforms.
//! Drivers depend only on the traits defined here, never on a specific HAL.

pub mod error;
pub mod register;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, Result};
pub use register::{MmioPort, PortRegisters, RegisterPin};
pub use traits::{ClockInterface, GpioInterface, GpioMode};
