//! Knob configuration
//!
//! All tunables are fixed at build time. The firmware's build script reads
//! `knob.toml`, deserializes it into [`KnobConfig`] and rejects the build
//! if [`KnobConfig::validate`] fails.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::MAX_VOLUME;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Initial volume above 100
    VolumeOutOfRange,
    /// Idle timeout of zero would start the animation on every iteration
    ZeroIdleTimeout,
    /// Frame interval of zero would spin the animation without yielding
    ZeroFrameInterval,
    /// Drop reset probability outside [0, 1]
    ProbabilityOutOfRange,
}

impl ConfigError {
    /// Human readable description
    pub const fn message(self) -> &'static str {
        match self {
            ConfigError::VolumeOutOfRange => "initial_volume must be between 0 and 100",
            ConfigError::ZeroIdleTimeout => "idle_timeout_ms must be greater than 0",
            ConfigError::ZeroFrameInterval => "frame_interval_ms must be greater than 0",
            ConfigError::ProbabilityOutOfRange => {
                "drop_reset_probability must be between 0.0 and 1.0"
            }
        }
    }
}

/// Knob tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct KnobConfig {
    /// Volume the local mirror assumes at power-on
    pub initial_volume: u8,
    /// Inactivity before the idle animation takes over the display
    pub idle_timeout_ms: u64,
    /// Time each animation frame stays visible
    pub frame_interval_ms: u32,
    /// Sleep after a mute toggle (crude debounce)
    pub mute_debounce_ms: u32,
    /// Chance per column per frame that a falling character restarts at the top
    pub drop_reset_probability: f32,
}

impl KnobConfig {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        initial_volume: MAX_VOLUME,
        idle_timeout_ms: 2000,
        frame_interval_ms: 50,
        mute_debounce_ms: 200,
        drop_reset_probability: 0.15,
    };

    /// Check every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_volume > MAX_VOLUME {
            return Err(ConfigError::VolumeOutOfRange);
        }
        if self.idle_timeout_ms == 0 {
            return Err(ConfigError::ZeroIdleTimeout);
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        // Written this way so NaN is rejected too
        if !(0.0..=1.0).contains(&self.drop_reset_probability) {
            return Err(ConfigError::ProbabilityOutOfRange);
        }
        Ok(())
    }
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
