//! Mock register port for testing direct register pins

use crate::platform::register::PortRegisters;

/// In-memory direction/output/input register triple
#[derive(Debug, Default)]
pub struct MockPort {
    direction: u32,
    output: u32,
    input: u32,
}

impl MockPort {
    /// Create a port with every register cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw input register (for simulating external signals)
    pub fn set_input(&mut self, value: u32) {
        self.input = value;
    }

    /// Raw direction register
    pub fn direction(&self) -> u32 {
        self.direction
    }

    /// Raw output latch register
    pub fn output(&self) -> u32 {
        self.output
    }
}

impl PortRegisters for MockPort {
    fn set_direction(&mut self, mask: u32, output: bool) {
        if output {
            self.direction |= mask;
        } else {
            self.direction &= !mask;
        }
    }

    fn write(&mut self, mask: u32, high: bool) {
        if high {
            self.output |= mask;
        } else {
            self.output &= !mask;
        }
    }

    fn output_level(&self, mask: u32) -> bool {
        self.output & mask != 0
    }

    fn input_level(&self, mask: u32) -> bool {
        self.input & mask != 0
    }
}
