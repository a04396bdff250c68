//! RP2350 GPIO implementation
//!
//! This module provides GPIO support for RP2350 using the `embassy-rp` crate.

use embassy_rp::gpio::{Flex, Pull};

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// RP2350 GPIO implementation
///
/// Wraps an `embassy-rp` flexible pin so the direction can be switched at
/// runtime (blink drivers release the pin back to input when stopped).
pub struct Rp2350Gpio<'d> {
    pin: Flex<'d>,
    mode: GpioMode,
}

impl<'d> Rp2350Gpio<'d> {
    /// Create a new RP2350 GPIO instance
    ///
    /// The pin starts as a floating input.
    ///
    /// # Arguments
    ///
    /// * `pin` - The HAL flexible pin
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_as_input();
        Self {
            pin,
            mode: GpioMode::Input,
        }
    }

    fn ensure_output(&self) -> Result<()> {
        if self.mode.is_output() {
            Ok(())
        } else {
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        }
    }
}

impl GpioInterface for Rp2350Gpio<'_> {
    fn set_high(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.toggle();
        Ok(())
    }

    fn read(&self) -> bool {
        if self.mode.is_output() {
            self.pin.is_set_high()
        } else {
            self.pin.is_high()
        }
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => self.pin.set_as_input(),
            GpioMode::OutputPushPull => self.pin.set_as_output(),
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
