//! Player Tuning Configuration
//!
//! Immutable-after-validation tuning for the movement core. A config that
//! fails validation refuses to start the controller; a misconfigured sign
//! on gravity would otherwise surface as a NaN jump impulse deep inside the
//! integrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::LayerMask;

/// Horizontal movement speed in m/s.
pub const MOVE_SPEED: f32 = 12.0;

/// Apex height of a jump in meters.
pub const JUMP_HEIGHT: f32 = 3.0;

/// Gravity acceleration in m/s² (negative: downward).
pub const GRAVITY: f32 = -9.81;

/// Radius of the ground-contact probe in meters.
pub const GROUND_CHECK_RADIUS: f32 = 0.4;

/// Vertical velocity held while grounded, in m/s. Slightly negative so the
/// character stays pressed to the ground instead of chattering on contact.
pub const SETTLE_VELOCITY: f32 = -2.0;

/// A tuning value that would produce physically invalid movement.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gravity must be negative, got {0}")]
    GravityNotNegative(f32),
    #[error("ground check radius must be positive, got {0}")]
    GroundRadiusNotPositive(f32),
    #[error("settle velocity must be negative, got {0}")]
    SettleVelocityNotNegative(f32),
    #[error("move speed must not be negative, got {0}")]
    MoveSpeedNegative(f32),
    #[error("jump height must not be negative, got {0}")]
    JumpHeightNegative(f32),
    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Movement and camera-ground tuning, immutable once the controller is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal speed in m/s.
    pub move_speed: f32,
    /// Jump apex height in meters.
    pub jump_height: f32,
    /// Gravity in m/s², must be negative.
    pub gravity: f32,
    /// Ground-probe radius in meters, must be positive.
    pub ground_check_radius: f32,
    /// Layers the ground probe may hit.
    pub ground_mask: LayerMask,
    /// Grounded vertical velocity in m/s, must be negative.
    pub settle_velocity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            jump_height: JUMP_HEIGHT,
            gravity: GRAVITY,
            ground_check_radius: GROUND_CHECK_RADIUS,
            ground_mask: LayerMask::ALL,
            settle_velocity: SETTLE_VELOCITY,
        }
    }
}

impl PlayerConfig {
    /// Check every tuning invariant.
    ///
    /// The comparisons are written so that NaN fails them too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity < 0.0) {
            return Err(ConfigError::GravityNotNegative(self.gravity));
        }
        if !(self.ground_check_radius > 0.0) {
            return Err(ConfigError::GroundRadiusNotPositive(self.ground_check_radius));
        }
        if !(self.settle_velocity < 0.0) {
            return Err(ConfigError::SettleVelocityNotNegative(self.settle_velocity));
        }
        if !(self.move_speed >= 0.0) {
            return Err(ConfigError::MoveSpeedNegative(self.move_speed));
        }
        if !(self.jump_height >= 0.0) {
            return Err(ConfigError::JumpHeightNegative(self.jump_height));
        }
        Ok(())
    }

    /// Parse and validate a JSON tuning document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON tuning document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
