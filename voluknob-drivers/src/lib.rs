//! Hardware driver implementations
//!
//! Concrete implementations behind the traits the knob core talks to:
//!
//! - SSD1306 128x64 OLED over I2C ([`display::Ssd1306`])
//! - Quadrature decoding for the rotary encoder ([`encoder::QuadratureDecoder`])

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod encoder;
