//! Knob state
//!
//! Everything the control loop remembers between iterations lives in
//! [`KnobState`]. It is plain data with no hardware access, so all of the
//! volume/mute bookkeeping can be tested on the host.

pub mod knob;

pub use knob::{Direction, KnobState, MAX_VOLUME};
