//! LED Parameter Definitions
//!
//! # Parameters
//!
//! - `LED_ON_MS` - Time the status LED stays lit, in milliseconds
//! - `LED_OFF_MS` - Time the status LED stays dark, in milliseconds
//!
//! Defaults come from the `LED_ON_MS` / `LED_OFF_MS` environment variables at
//! build time (see `build.rs`), falling back to 500 ms each.

use super::store::{ParamFlags, ParamValue, ParameterStore};
use crate::devices::led::BlinkPattern;
use crate::platform::Result;

/// Fallback on time when the build-time default is missing or malformed
const FALLBACK_ON_MS: u32 = 500;

/// Fallback off time when the build-time default is missing or malformed
const FALLBACK_OFF_MS: u32 = 500;

/// Parse a build-time millisecond value, using `fallback` when absent or malformed
fn parse_ms(value: Option<&str>, fallback: u32) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

fn default_on_ms() -> u32 {
    parse_ms(option_env!("LED_ON_MS"), FALLBACK_ON_MS)
}

fn default_off_ms() -> u32 {
    parse_ms(option_env!("LED_OFF_MS"), FALLBACK_OFF_MS)
}

/// LED blink parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedParams {
    /// Lit time in milliseconds
    pub on_ms: u32,
    /// Dark time in milliseconds
    pub off_ms: u32,
}

impl Default for LedParams {
    fn default() -> Self {
        Self {
            on_ms: default_on_ms(),
            off_ms: default_off_ms(),
        }
    }
}

impl LedParams {
    /// Register LED parameters with default values
    ///
    /// # Arguments
    ///
    /// * `store` - Parameter store to register parameters in
    pub fn register_defaults(store: &mut ParameterStore) -> Result<()> {
        let defaults = Self::default();

        store.register(
            "LED_ON_MS",
            ParamValue::Int(clamp_to_i32(defaults.on_ms)),
            ParamFlags::empty(),
        )?;

        store.register(
            "LED_OFF_MS",
            ParamValue::Int(clamp_to_i32(defaults.off_ms)),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load LED parameters from parameter store
    ///
    /// Missing, negative, or non-integer entries fall back to the defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let defaults = Self::default();

        Self {
            on_ms: read_ms(store, "LED_ON_MS").unwrap_or(defaults.on_ms),
            off_ms: read_ms(store, "LED_OFF_MS").unwrap_or(defaults.off_ms),
        }
    }

    /// Validate LED parameters
    ///
    /// # Returns
    ///
    /// true if the full period fits in the 32-bit millisecond clock
    pub fn is_valid(&self) -> bool {
        self.on_ms.checked_add(self.off_ms).is_some()
    }

    /// Blink pattern for these parameters
    pub fn pattern(&self) -> BlinkPattern {
        BlinkPattern::new(self.on_ms, self.off_ms)
    }
}

fn read_ms(store: &ParameterStore, name: &str) -> Option<u32> {
    match store.get(name) {
        Some(ParamValue::Int(v)) => u32::try_from(*v).ok(),
        Some(ParamValue::Float(v)) if *v >= 0.0 && *v <= u32::MAX as f32 => Some(*v as u32),
        _ => None,
    }
}

fn clamp_to_i32(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
