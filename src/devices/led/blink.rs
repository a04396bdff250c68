//! Non-blocking LED blink timer
//!
//! # Lifecycle
//!
//! ```text
//!            start ──────────▶
//!  UNARMED                      ARMED ──┐ poll (toggle when due)
//!            ◀────────── stop           │
//!                                 ▲─────┘
//! ```
//!
//! `start` on an armed timer and `stop` on an unarmed one are rejected
//! without touching the pin. `poll` is a no-op while unarmed.
//!
//! # Timing
//!
//! The timer remembers when it last toggled and how long the current phase
//! lasts. Elapsed time is `now.wrapping_sub(last_toggle)`, which stays correct
//! across the 32-bit millisecond counter wrap. After `start` the LED is dark
//! for one off phase, then lit for `on_ms`, dark for `off_ms`, and so on.

use crate::devices::led::{BlinkError, BlinkPattern, Result};
use crate::platform::traits::{ClockInterface, GpioInterface, GpioMode};
use crate::{log_debug, log_trace, log_warn};

/// Polled on/off blinker for one GPIO pin
///
/// The timer borrows the pin and the clock; both stay owned by the caller.
/// Dropping the timer leaves the pin in whatever state it was last driven to.
pub struct BlinkTimer<'a, G: GpioInterface, C: ClockInterface> {
    gpio: &'a mut G,
    clock: &'a C,
    armed: bool,
    on_ms: u32,
    off_ms: u32,
    last_toggle_ms: u32,
    pending_ms: u32,
}

impl<'a, G: GpioInterface, C: ClockInterface> BlinkTimer<'a, G, C> {
    /// Create an unarmed timer. Does not touch the hardware.
    pub fn new(gpio: &'a mut G, clock: &'a C) -> Self {
        Self {
            gpio,
            clock,
            armed: false,
            on_ms: 0,
            off_ms: 0,
            last_toggle_ms: 0,
            pending_ms: 0,
        }
    }

    /// Arm the timer with explicit on and off times
    ///
    /// Drives the pin as a low output and schedules the first toggle (to lit)
    /// `off_ms` from now.
    ///
    /// # Errors
    ///
    /// - `BlinkError::AlreadyStarted` if the timer is armed; nothing changes.
    /// - `BlinkError::Platform` if the pin cannot be configured as a low
    ///   output; the timer stays unarmed and the pin is released to input.
    pub fn start(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
        if self.armed {
            log_warn!("LED blink start rejected: already started");
            return Err(BlinkError::AlreadyStarted);
        }

        self.clock.begin();
        self.gpio.set_mode(GpioMode::OutputPushPull)?;
        if let Err(e) = self.gpio.set_low() {
            // A failed start leaves the pin released
            let _ = self.gpio.set_mode(GpioMode::Input);
            return Err(e.into());
        }
        self.configure(on_ms, off_ms);

        self.last_toggle_ms = self.clock.now_ms();
        self.pending_ms = self.off_ms;
        self.armed = true;

        log_debug!("LED blink started: on={} ms, off={} ms", on_ms, off_ms);
        Ok(())
    }

    /// Arm the timer with a symmetric period (`period_ms / 2` each way)
    pub fn start_period(&mut self, period_ms: u32) -> Result<()> {
        let pattern = BlinkPattern::from_period(period_ms);
        self.start(pattern.on_ms, pattern.off_ms)
    }

    /// Arm the timer with a prepared pattern
    pub fn start_pattern(&mut self, pattern: BlinkPattern) -> Result<()> {
        self.start(pattern.on_ms, pattern.off_ms)
    }

    /// Replace the on and off times
    ///
    /// Allowed in either state. The running countdown is cleared, so an armed
    /// timer toggles on the next `poll` and continues with the new times.
    pub fn configure(&mut self, on_ms: u32, off_ms: u32) {
        self.on_ms = on_ms;
        self.off_ms = off_ms;
        self.last_toggle_ms = self.clock.now_ms();
        self.pending_ms = 0;
    }

    /// Replace the timing with a symmetric period (`period_ms / 2` each way)
    pub fn configure_period(&mut self, period_ms: u32) {
        let pattern = BlinkPattern::from_period(period_ms);
        self.configure(pattern.on_ms, pattern.off_ms);
    }

    /// Toggle the pin if the current phase has run out
    ///
    /// Call from every main loop iteration. Never blocks. Returns `Ok(true)`
    /// when the pin was toggled and `Ok(false)` when nothing was due or the
    /// timer is unarmed.
    ///
    /// # Errors
    ///
    /// Returns `BlinkError::Platform` if the pin rejects the toggle; timing
    /// state is left as it was so the next call retries. The pins in this
    /// crate (`MockGpio`, `RegisterPin`, `Rp2350Gpio`) only reject a toggle
    /// while in input mode, and an armed timer always holds its pin as an
    /// output, so this arm is only reachable with a custom `GpioInterface`.
    pub fn poll(&mut self) -> Result<bool> {
        if !self.armed {
            return Ok(false);
        }

        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_toggle_ms) < self.pending_ms {
            return Ok(false);
        }

        let lit = !self.gpio.read();
        self.gpio.toggle()?;

        self.pending_ms = if lit { self.on_ms } else { self.off_ms };
        self.last_toggle_ms = now;

        log_trace!("LED toggled: lit={}, next in {} ms", lit, self.pending_ms);
        Ok(true)
    }

    /// Disarm the timer and release the pin to input
    ///
    /// # Errors
    ///
    /// - `BlinkError::NotStarted` if the timer is not armed; the pin mode is
    ///   not touched.
    /// - `BlinkError::Platform` if the pin cannot be switched to input; the
    ///   timer is disarmed regardless.
    pub fn stop(&mut self) -> Result<()> {
        if !self.armed {
            log_warn!("LED blink stop rejected: not started");
            return Err(BlinkError::NotStarted);
        }

        self.armed = false;
        self.configure(0, 0);
        self.gpio.set_mode(GpioMode::Input)?;

        log_debug!("LED blink stopped");
        Ok(())
    }

    /// Whether the timer is between a successful `start` and `stop`
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Current pin level as read back from the pin
    pub fn is_lit(&self) -> bool {
        self.gpio.read()
    }

    /// Configured on/off times
    pub fn pattern(&self) -> BlinkPattern {
        BlinkPattern::new(self.on_ms, self.off_ms)
    }

    /// Length of the phase currently being timed
    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    /// Shared access to the driven pin
    pub fn gpio(&self) -> &G {
        self.gpio
    }
}
