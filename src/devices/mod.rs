//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits,
//! so the same driver runs on hardware and against the mock platform.
//!
//! ## Modules
//!
//! - `led`: Non-blocking LED blink driver

pub mod led;
