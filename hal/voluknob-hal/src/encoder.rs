//! Rotary encoder position
//!
//! The control loop only ever sees an absolute count. Decoding the
//! quadrature signal into that count happens below this trait, either in
//! a sampling task or in hardware.

use portable_atomic::{AtomicI32, Ordering};

/// Source of an absolute encoder count
pub trait PositionSource {
    /// Current position in detents (clockwise is positive)
    fn position(&self) -> i32;
}

impl<T: PositionSource + ?Sized> PositionSource for &T {
    fn position(&self) -> i32 {
        (**self).position()
    }
}

/// Encoder count shared between the decoder and the control loop
///
/// The decoder side calls [`SharedPosition::step`], the control loop reads
/// through [`PositionSource`]. Counts wrap on overflow.
pub struct SharedPosition {
    count: AtomicI32,
}

impl Default for SharedPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedPosition {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
        }
    }

    /// Add a signed number of detents
    pub fn step(&self, delta: i32) {
        self.count.fetch_add(delta, Ordering::Relaxed);
    }
}

impl PositionSource for SharedPosition {
    fn position(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }
}
