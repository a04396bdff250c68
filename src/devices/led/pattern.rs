//! Blink timing pattern

/// Default on time in milliseconds
const DEFAULT_ON_MS: u32 = 500;

/// Default off time in milliseconds
const DEFAULT_OFF_MS: u32 = 500;

/// On/off durations for one blink cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub struct BlinkPattern {
    /// Time the LED stays lit, in milliseconds
    pub on_ms: u32,
    /// Time the LED stays dark, in milliseconds
    pub off_ms: u32,
}

impl Default for BlinkPattern {
    fn default() -> Self {
        Self::new(DEFAULT_ON_MS, DEFAULT_OFF_MS)
    }
}

impl BlinkPattern {
    /// Pattern with explicit on and off times
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }

    /// Symmetric pattern from a full period
    ///
    /// Each half is `period_ms / 2`; an odd period loses its last millisecond.
    pub const fn from_period(period_ms: u32) -> Self {
        Self::new(period_ms / 2, period_ms / 2)
    }

    /// Full cycle length, saturating at `u32::MAX`
    pub const fn period_ms(&self) -> u32 {
        self.on_ms.saturating_add(self.off_ms)
    }

    /// Percentage of the period spent lit (0 for an empty period)
    pub fn duty_percent(&self) -> u8 {
        let period = self.on_ms as u64 + self.off_ms as u64;
        if period == 0 {
            return 0;
        }
        (self.on_ms as u64 * 100 / period) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pattern_default() {
        let pattern = BlinkPattern::default();
        assert_eq!(pattern.on_ms, 500);
        assert_eq!(pattern.off_ms, 500);
        assert_eq!(pattern.period_ms(), 1000);
        assert_eq!(pattern.duty_percent(), 50);
    }

    #[test]
    fn test_pattern_from_odd_period_truncates() {
        let pattern = BlinkPattern::from_period(1001);
        assert_eq!(pattern, BlinkPattern::new(500, 500));
        assert_eq!(pattern.period_ms(), 1000);
    }

    #[test]
    fn test_pattern_duty_percent() {
        assert_eq!(BlinkPattern::new(100, 900).duty_percent(), 10);
        assert_eq!(BlinkPattern::new(0, 0).duty_percent(), 0);
        assert_eq!(BlinkPattern::new(u32::MAX, 0).duty_percent(), 100);
    }

    #[test]
    fn test_pattern_period_saturates() {
        assert_eq!(BlinkPattern::new(u32::MAX, 1).period_ms(), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_from_period_is_floor_half(period in any::<u32>()) {
            let pattern = BlinkPattern::from_period(period);
            prop_assert_eq!(pattern.on_ms, period / 2);
            prop_assert_eq!(pattern.off_ms, period / 2);
            prop_assert!(period - pattern.period_ms() <= 1);
        }
    }
}
