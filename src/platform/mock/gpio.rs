//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode for test verification, and counts
/// level writes and mode changes so tests can assert that an operation had
/// no hardware side effect.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    writes: u32,
    mode_changes: u32,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            writes: 0,
            mode_changes: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            writes: 0,
            mode_changes: 0,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Number of successful `set_high`/`set_low`/`toggle` calls
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Number of `set_mode` calls
    pub fn mode_change_count(&self) -> u32 {
        self.mode_changes
    }

    fn drive(&mut self, level: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = level;
        self.writes += 1;
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn toggle(&mut self) -> Result<()> {
        self.drive(!self.state)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        self.mode_changes += 1;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
        assert_eq!(gpio.write_count(), 2);
    }

    #[test]
    fn test_mock_gpio_toggle() {
        let mut gpio = MockGpio::new_output();

        gpio.toggle().unwrap();
        assert!(gpio.read());

        gpio.toggle().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input() {
        let mut gpio = MockGpio::new_input();
        assert!(!gpio.read());

        // Simulate external signal
        gpio.set_input_state(true);
        assert!(gpio.read());

        // Input mode should not allow set_high/set_low
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());
        assert!(gpio.toggle().is_err());
        assert_eq!(gpio.write_count(), 0);
    }

    #[test]
    fn test_mock_gpio_mode() {
        let mut gpio = MockGpio::new_output();
        assert_eq!(gpio.mode(), GpioMode::OutputPushPull);

        gpio.set_mode(GpioMode::Input).unwrap();
        assert_eq!(gpio.mode(), GpioMode::Input);
        assert_eq!(gpio.mode_change_count(), 1);
    }
}
