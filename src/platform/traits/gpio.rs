//! Digital pin interface
//!
//! The capability set a blink driver needs from one output line: switch it
//! between driving and released, drive a level, flip it, and read it back.

use crate::platform::Result;

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum GpioMode {
    /// Released, high impedance
    Input,
    /// Driven push-pull
    OutputPushPull,
}

impl GpioMode {
    /// Returns `true` when the pin is being driven
    pub fn is_output(self) -> bool {
        self == GpioMode::OutputPushPull
    }
}

/// Digital pin driven by a blink driver
///
/// Drivers hold a `&mut` borrow of the pin for as long as they run; the pin
/// itself stays owned by the caller, who decides when it is created and
/// dropped. Two drivers cannot share one pin value, but nothing stops two pin
/// values from addressing the same physical line; that is a wiring error and
/// the last write wins.
pub trait GpioInterface {
    /// Drive the pin high
    ///
    /// # Errors
    ///
    /// `PlatformError::Gpio(GpioError::InvalidMode)` unless the pin is an
    /// output.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the pin low
    ///
    /// # Errors
    ///
    /// `PlatformError::Gpio(GpioError::InvalidMode)` unless the pin is an
    /// output.
    fn set_low(&mut self) -> Result<()>;

    /// Drive the opposite of the current output level
    ///
    /// # Errors
    ///
    /// `PlatformError::Gpio(GpioError::InvalidMode)` unless the pin is an
    /// output.
    fn toggle(&mut self) -> Result<()>;

    /// `true` if the line is high
    ///
    /// For an output this is the level being driven, for an input the
    /// sampled level.
    fn read(&self) -> bool;

    /// Switch direction
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Current direction
    fn mode(&self) -> GpioMode;
}
