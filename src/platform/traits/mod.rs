//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod clock;
pub mod gpio;

// Re-export trait interfaces
pub use clock::ClockInterface;
pub use gpio::{GpioInterface, GpioMode};
