//! Monotonic time source

/// Monotonic millisecond clock
///
/// Only differences between readings are meaningful.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u64;
}
