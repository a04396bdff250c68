//! Direct register GPIO access
//!
//! Drives a single bit of a memory-mapped GPIO port without going through a
//! HAL pin object. The port is described by three registers (direction,
//! output latch, input level), the classic layout of 8-bit AVR parts and of
//! many Cortex-M GPIO blocks.
//!
//! [`RegisterPin`] adapts a port and a bit position to [`GpioInterface`], so
//! drivers treat it exactly like a HAL-backed pin.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Width of a port register in bits
const PORT_WIDTH: u8 = 32;

/// Register-level access to one GPIO port
pub trait PortRegisters {
    /// Set (output) or clear (input) the direction bits in `mask`
    fn set_direction(&mut self, mask: u32, output: bool);

    /// Drive the output latch bits in `mask` high or low
    fn write(&mut self, mask: u32, high: bool);

    /// Level currently latched for output on `mask`
    fn output_level(&self, mask: u32) -> bool;

    /// Level sampled on the input register for `mask`
    fn input_level(&self, mask: u32) -> bool;
}

/// Memory-mapped port accessed with volatile reads and writes
#[derive(Debug)]
pub struct MmioPort {
    direction: *mut u32,
    output: *mut u32,
    input: *const u32,
}

impl MmioPort {
    /// Create a port from raw register addresses
    ///
    /// # Safety
    ///
    /// All three addresses must point at valid, aligned 32-bit GPIO registers
    /// for the lifetime of the returned value, and nothing else may perform
    /// read-modify-write cycles on them concurrently.
    pub const unsafe fn new(direction: *mut u32, output: *mut u32, input: *const u32) -> Self {
        Self {
            direction,
            output,
            input,
        }
    }

    fn modify(reg: *mut u32, mask: u32, set: bool) {
        // SAFETY: `reg` is one of the registers validated by `MmioPort::new`
        unsafe {
            let value = core::ptr::read_volatile(reg);
            let value = if set { value | mask } else { value & !mask };
            core::ptr::write_volatile(reg, value);
        }
    }
}

impl PortRegisters for MmioPort {
    fn set_direction(&mut self, mask: u32, output: bool) {
        Self::modify(self.direction, mask, output);
    }

    fn write(&mut self, mask: u32, high: bool) {
        Self::modify(self.output, mask, high);
    }

    fn output_level(&self, mask: u32) -> bool {
        // SAFETY: see `MmioPort::new`
        unsafe { core::ptr::read_volatile(self.output) & mask != 0 }
    }

    fn input_level(&self, mask: u32) -> bool {
        // SAFETY: see `MmioPort::new`
        unsafe { core::ptr::read_volatile(self.input) & mask != 0 }
    }
}

/// One bit of a register-level GPIO port
#[derive(Debug)]
pub struct RegisterPin<R: PortRegisters> {
    port: R,
    mask: u32,
    mode: GpioMode,
}

impl<R: PortRegisters> RegisterPin<R> {
    /// Create a pin for bit `bit` of `port`
    ///
    /// The hardware is not touched; the pin reports `GpioMode::Input` until
    /// `set_mode` is called.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if `bit` is
    /// outside the port.
    pub fn new(port: R, bit: u8) -> Result<Self> {
        if bit >= PORT_WIDTH {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        Ok(Self {
            port,
            mask: 1 << bit,
            mode: GpioMode::Input,
        })
    }

    /// Bit mask of this pin within the port
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Access the underlying port
    pub fn port(&self) -> &R {
        &self.port
    }

    fn ensure_output(&self) -> Result<()> {
        if self.mode.is_output() {
            Ok(())
        } else {
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        }
    }
}

impl<R: PortRegisters> GpioInterface for RegisterPin<R> {
    fn set_high(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.port.write(self.mask, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.port.write(self.mask, false);
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.ensure_output()?;
        let level = self.port.output_level(self.mask);
        self.port.write(self.mask, !level);
        Ok(())
    }

    fn read(&self) -> bool {
        if self.mode.is_output() {
            self.port.output_level(self.mask)
        } else {
            self.port.input_level(self.mask)
        }
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => self.port.set_direction(self.mask, false),
            GpioMode::OutputPushPull => self.port.set_direction(self.mask, true),
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPort;

    #[test]
    fn test_register_pin_rejects_out_of_range_bit() {
        let err = RegisterPin::new(MockPort::new(), 32).unwrap_err();
        assert_eq!(err, PlatformError::Gpio(GpioError::InvalidPin));
    }

    #[test]
    fn test_register_pin_output() {
        let mut pin = RegisterPin::new(MockPort::new(), 5).unwrap();
        pin.set_mode(GpioMode::OutputPushPull).unwrap();
        assert_eq!(pin.port().direction(), 1 << 5);

        pin.set_high().unwrap();
        assert!(pin.read());
        assert_eq!(pin.port().output(), 1 << 5);

        pin.toggle().unwrap();
        assert!(!pin.read());
        assert_eq!(pin.port().output(), 0);
    }

    #[test]
    fn test_register_pin_leaves_other_bits_alone() {
        let mut port = MockPort::new();
        port.write(0b1000_0001, true);
        port.set_direction(0b1000_0001, true);

        let mut pin = RegisterPin::new(port, 3).unwrap();
        pin.set_mode(GpioMode::OutputPushPull).unwrap();
        pin.set_high().unwrap();
        pin.set_mode(GpioMode::Input).unwrap();

        assert_eq!(pin.port().output(), 0b1000_1001);
        assert_eq!(pin.port().direction(), 0b1000_0001);
    }

    #[test]
    fn test_register_pin_input() {
        let mut port = MockPort::new();
        port.set_input(1 << 2);
        let mut pin = RegisterPin::new(port, 2).unwrap();

        assert_eq!(pin.mode(), GpioMode::Input);
        assert!(pin.read());
        assert!(pin.set_high().is_err());
        assert!(pin.toggle().is_err());
    }

    #[test]
    fn test_mmio_port_volatile_access() {
        let mut direction: u32 = 0;
        let mut output: u32 = 0;
        let input: u32 = 0b0100;

        let port = unsafe { MmioPort::new(&mut direction, &mut output, &input) };
        let mut pin = RegisterPin::new(port, 1).unwrap();
        pin.set_mode(GpioMode::OutputPushPull).unwrap();
        pin.set_high().unwrap();
        assert!(pin.read());
        drop(pin);

        assert_eq!(direction, 0b0010);
        assert_eq!(output, 0b0010);
    }
}
