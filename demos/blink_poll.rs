//! Polled LED blink demo for RP2350
//!
//! Blinks an LED from a busy main loop with `BlinkTimer::poll`, showing that
//! the loop stays free for other work between toggles. Timing comes from the
//! `LED_ON_MS` / `LED_OFF_MS` parameters (build-time defaults: 500 ms each).
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W - LED with series resistor on GPIO15
//!
//! # Usage
//!
//! ```bash
//! LED_ON_MS=100 LED_OFF_MS=900 cargo build --release \
//!     --target thumbv8m.main-none-eabihf --features pico2_w --example blink_poll
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio::Flex;
use embassy_time::Timer;
use pico_blink::devices::led::BlinkTimer;
use pico_blink::parameters::{LedParams, ParameterStore};
use pico_blink::platform::rp2350::{EmbassyClock, Rp2350Gpio};
use {defmt_rtt as _, panic_probe as _};

/// Loop iterations between heartbeat log lines
const HEARTBEAT_EVERY: u32 = 100_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let mut store = ParameterStore::new();
    if let Err(e) = LedParams::register_defaults(&mut store) {
        defmt::warn!("LED parameter registration failed: {}", e);
    }
    let params = LedParams::from_store(&store);
    if !params.is_valid() {
        defmt::error!("LED parameters out of range");
        return;
    }

    let clock = EmbassyClock::new();
    let mut led = Rp2350Gpio::new(Flex::new(p.PIN_15));
    let mut blink = BlinkTimer::new(&mut led, &clock);

    if let Err(e) = blink.start_pattern(params.pattern()) {
        defmt::error!("Failed to start blink: {}", e);
        return;
    }
    let pattern = blink.pattern();
    defmt::info!(
        "Blinking GPIO15: on={} ms, off={} ms (period {} ms, {}% lit)",
        pattern.on_ms,
        pattern.off_ms,
        pattern.period_ms(),
        pattern.duty_percent()
    );

    let mut iterations: u32 = 0;
    loop {
        match blink.poll() {
            Ok(true) => defmt::debug!("LED lit: {}", blink.is_lit()),
            Ok(false) => {}
            Err(e) => defmt::warn!("LED poll failed: {}", e),
        }

        iterations = iterations.wrapping_add(1);
        if iterations % HEARTBEAT_EVERY == 0 {
            defmt::trace!("main loop alive: {} iterations", iterations);
        }

        // Other cooperative work would run here
        Timer::after_micros(50).await;
    }
}
