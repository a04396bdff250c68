//! Blink driver error types

use core::fmt;

use crate::platform::PlatformError;

/// Result type for blink driver operations
pub type Result<T> = core::result::Result<T, BlinkError>;

/// Errors reported by [`BlinkTimer`](super::BlinkTimer)
///
/// `AlreadyStarted` and `NotStarted` are rejected lifecycle transitions: the
/// driver state is untouched and the caller may simply carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum BlinkError {
    /// `start` called while the timer is already armed
    AlreadyStarted,
    /// `stop` called while the timer is not armed
    NotStarted,
    /// The pin implementation reported a fault
    Platform(PlatformError),
}

impl From<PlatformError> for BlinkError {
    fn from(error: PlatformError) -> Self {
        BlinkError::Platform(error)
    }
}

impl fmt::Display for BlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::AlreadyStarted => write!(f, "Blink timer is already started"),
            BlinkError::NotStarted => write!(f, "Blink timer is not started"),
            BlinkError::Platform(e) => write!(f, "Blink pin fault: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::GpioError;

    #[test]
    fn test_blink_error_display() {
        assert_eq!(
            format!("{}", BlinkError::AlreadyStarted),
            "Blink timer is already started"
        );
        assert_eq!(
            format!("{}", BlinkError::NotStarted),
            "Blink timer is not started"
        );

        let error = BlinkError::from(PlatformError::Gpio(GpioError::HardwareError));
        assert_eq!(
            format!("{}", error),
            "Blink pin fault: GPIO error: hardware access failed"
        );
    }
}
