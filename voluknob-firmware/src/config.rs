//! Knob configuration
//!
//! Generated by build.rs from knob.toml. The file has already been
//! validated, so the firmware uses it as-is.

include!(concat!(env!("OUT_DIR"), "/knob_config.rs"));
