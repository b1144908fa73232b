//! Voluknob Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the control loop talks through.
//! Board crates implement them on top of embassy peripherals, tests
//! implement them with plain mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  voluknob-firmware (embassy, RP2040)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  voluknob-core (control loop, display)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  voluknob-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::Button`] - Push-button level
//! - [`encoder::PositionSource`] - Absolute encoder count
//! - [`hid::ConsumerControl`] - USB HID consumer keys
//! - [`hid::ReportWriter`] - Raw consumer reports, clicked by [`hid::HidClick`]
//! - [`clock::Clock`] - Monotonic milliseconds

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod encoder;
pub mod gpio;
pub mod hid;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use encoder::{PositionSource, SharedPosition};
pub use gpio::{ActiveLow, Button};
pub use hid::{ConsumerCode, ConsumerControl, HidClick, ReportWriter};
