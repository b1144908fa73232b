//! Idle animations
//!
//! Shown when the knob has not been touched for a while. An animation
//! only draws into a frame buffer; pacing, committing and interruption
//! belong to the control loop.

pub mod rain;

pub use rain::{Rain, COLUMNS, COLUMN_PITCH, GLYPHS, ROW_PITCH};
