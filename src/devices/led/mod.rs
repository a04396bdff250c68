//! LED drivers
//!
//! [`BlinkTimer`] toggles a GPIO pin on an on/off duty cycle from a polled
//! main loop, without ever blocking.
//!
//! # Example
//!
//! ```ignore
//! let clock = EmbassyClock::new();
//! let mut led = Rp2350Gpio::new(Flex::new(p.PIN_15));
//! let mut blink = BlinkTimer::new(&mut led, &clock);
//!
//! blink.start_period(1000)?;
//! loop {
//!     blink.poll()?;
//!     // other cooperative work
//! }
//! ```

mod blink;
mod error;
mod pattern;

pub use blink::BlinkTimer;
pub use error::{BlinkError, Result};
pub use pattern::BlinkPattern;
