//! Volume mirror, mute flag and interaction time

use voluknob_hal::ConsumerCode;

use crate::display::{Bitmap, DOWN_ARROW, UP_ARROW};

/// Upper end of the volume range
pub const MAX_VOLUME: u8 = 100;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise, positive delta
    Up,
    /// Counter-clockwise, negative delta
    Down,
}

impl Direction {
    /// Direction of a non-zero delta
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            0 => None,
            d if d > 0 => Some(Direction::Up),
            _ => Some(Direction::Down),
        }
    }

    /// HID usage to send for this direction
    pub fn code(self) -> ConsumerCode {
        match self {
            Direction::Up => ConsumerCode::VolumeIncrement,
            Direction::Down => ConsumerCode::VolumeDecrement,
        }
    }

    /// Arrow shown for this direction
    pub fn arrow(self) -> &'static Bitmap {
        match self {
            Direction::Up => &UP_ARROW,
            Direction::Down => &DOWN_ARROW,
        }
    }
}

/// State owned by the control loop
///
/// `volume` is a best-effort mirror. The host only ever receives relative
/// steps, so the two drift apart at the clamp boundaries or when the host
/// volume is changed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobState {
    volume: u8,
    muted: bool,
    last_position: i32,
    last_interaction_ms: u64,
}

impl KnobState {
    /// Start from a known encoder position
    ///
    /// `initial_volume` is clamped to [`MAX_VOLUME`].
    pub fn new(initial_volume: u8, position: i32, now_ms: u64) -> Self {
        Self {
            volume: initial_volume.min(MAX_VOLUME),
            muted: false,
            last_position: position,
            last_interaction_ms: now_ms,
        }
    }

    /// Local volume estimate, 0..=100
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Assumed host mute state
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Encoder position seen on the last movement
    pub fn last_position(&self) -> i32 {
        self.last_position
    }

    /// Time of the last interaction
    pub fn last_interaction_ms(&self) -> u64 {
        self.last_interaction_ms
    }

    /// Record a new encoder reading
    ///
    /// Returns the delta since the last recorded position, or `None` if
    /// the knob did not move.
    pub fn track_position(&mut self, position: i32) -> Option<i32> {
        let delta = position.wrapping_sub(self.last_position);
        if delta == 0 {
            return None;
        }
        self.last_position = position;
        Some(delta)
    }

    /// Apply an encoder delta to the volume mirror, clamping to 0..=100
    ///
    /// Returns the direction to report to the host (`None` for zero).
    pub fn apply_delta(&mut self, delta: i32) -> Option<Direction> {
        let volume = (self.volume as i32).saturating_add(delta);
        self.volume = volume.clamp(0, MAX_VOLUME as i32) as u8;
        Direction::from_delta(delta)
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Stamp an interaction
    pub fn touch(&mut self, now_ms: u64) {
        self.last_interaction_ms = now_ms;
    }

    /// Time since the last interaction
    pub fn idle_for(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_interaction_ms)
    }

    /// Strictly more than `timeout_ms` since the last interaction
    pub fn is_idle(&self, now_ms: u64, timeout_ms: u64) -> bool {
        self.idle_for(now_ms) > timeout_ms
    }
}
