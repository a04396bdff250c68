//! Mock clock implementation for testing

use core::cell::Cell;

use crate::platform::traits::ClockInterface;

/// Mock millisecond clock with controllable time advancement
///
/// Time only moves when the test calls [`MockClock::advance`] or
/// [`MockClock::set`]. Advancing wraps at `u32::MAX` like a real 32-bit
/// millisecond counter.
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: Cell<u32>,
    begin_calls: Cell<u32>,
}

impl MockClock {
    /// Create a new mock clock starting at time 0
    pub fn new() -> Self {
        Self::with_initial(0)
    }

    /// Create a new mock clock starting at the specified time
    pub fn with_initial(ms: u32) -> Self {
        Self {
            current_ms: Cell::new(ms),
            begin_calls: Cell::new(0),
        }
    }

    /// Set the current time to an absolute value
    pub fn set(&self, ms: u32) {
        self.current_ms.set(ms);
    }

    /// Advance the current time, wrapping on overflow
    pub fn advance(&self, ms: u32) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }

    /// Number of times `begin` has been called
    pub fn begin_count(&self) -> u32 {
        self.begin_calls.get()
    }
}

impl ClockInterface for MockClock {
    fn begin(&self) {
        self.begin_calls.set(self.begin_calls.get() + 1);
    }

    fn now_ms(&self) -> u32 {
        self.current_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_initial_value() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.begin_count(), 0);
    }

    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::new();
        clock.advance(500);
        assert_eq!(clock.now_ms(), 500);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_mock_clock_wraps() {
        let clock = MockClock::with_initial(u32::MAX - 1);
        let mark = clock.now_ms();

        clock.advance(5);
        assert_eq!(clock.now_ms(), 3);
        assert_eq!(clock.elapsed_ms(mark), 5);
    }

    #[test]
    fn test_mock_clock_begin_counts() {
        let clock = MockClock::new();
        clock.begin();
        clock.begin();
        assert_eq!(clock.begin_count(), 2);
    }
}
