#![cfg_attr(not(test), no_std)]

//! pico_blink - Non-blocking LED blink driver for Raspberry Pi Pico 2 W
//!
//! This library provides a polled on/off LED blinker together with the
//! platform abstraction it runs on, so the same driver works against the
//! RP2350 HAL, raw GPIO registers, or host-side mocks.

// Platform abstraction layer (GPIO, clock, register access)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros
pub mod core;

// Runtime configuration
pub mod parameters;
