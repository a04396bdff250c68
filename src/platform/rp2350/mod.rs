//! RP2350 platform implementation
//!
//! Raspberry Pi Pico 2 W support built on `embassy-rp` and `embassy-time`.
//! Only compiled with the `pico2_w` feature.

mod clock;
mod gpio;

pub use clock::EmbassyClock;
pub use gpio::Rp2350Gpio;
