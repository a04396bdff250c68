//! Millisecond clock interface
//!
//! Monotonic time source for polled timing. The counter is 32 bits wide and
//! wraps after roughly 49.7 days. Distances between two samples are taken
//! with wrapping subtraction, so a wrap in between is measured correctly;
//! [`ClockInterface::elapsed_ms`] does that against the current time.

/// Monotonic millisecond clock
///
/// # Example
///
/// ```
/// use core::cell::Cell;
/// use pico_blink::platform::traits::ClockInterface;
///
/// struct Counter(Cell<u32>);
///
/// impl ClockInterface for Counter {
///     fn now_ms(&self) -> u32 {
///         self.0.get()
///     }
/// }
///
/// let clock = Counter(Cell::new(u32::MAX - 9));
/// let mark = clock.now_ms();
/// clock.0.set(15);
/// assert_eq!(clock.elapsed_ms(mark), 25);
/// ```
pub trait ClockInterface {
    /// Initialize the time source
    ///
    /// Must be idempotent: drivers call this on every start without knowing
    /// whether the clock is already running.
    fn begin(&self) {}

    /// Current time in milliseconds, monotonic modulo 2^32
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `since_ms`
    ///
    /// Uses wrapping subtraction so counter overflow between the two samples
    /// still yields the true distance.
    fn elapsed_ms(&self, since_ms: u32) -> u32 {
        self.now_ms().wrapping_sub(since_ms)
    }
}
