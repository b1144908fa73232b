//! Board-agnostic core logic for the volume knob firmware
//!
//! This crate contains everything that does not depend on a specific
//! board:
//!
//! - Bitmaps, the 128x64 frame buffer and the bitmap renderer
//! - The falling-characters idle animation
//! - Knob state (volume mirror, mute flag, interaction timestamp)
//! - The polling control loop
//! - Build-time configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod controller;
pub mod display;
pub mod fault;
pub mod state;
pub mod traits;

pub use config::{ConfigError, KnobConfig};
pub use controller::{Iteration, Knob, KnobIo};
pub use fault::HardwareFault;
