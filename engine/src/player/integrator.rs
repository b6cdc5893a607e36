//! Character Movement Integrator
//!
//! Combines the tick's movement command with gravity, jumping, and ground
//! contact into one displacement vector. The integrator never touches the
//! world transform itself; the host's kinematic mover applies the
//! displacement and performs its own collision resolution.

use glam::Vec3;

use crate::input::MovementCommand;

use super::config::PlayerConfig;

/// Vertical motion state carried across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    /// Current vertical velocity in m/s (positive up).
    pub vertical_velocity: f32,
    /// Ground contact result of the most recent tick.
    pub grounded: bool,
}

/// Kinematic character integrator.
///
/// Horizontal motion is camera-relative and speed-scaled; vertical motion
/// accumulates gravity, with a jump impulse sized to reach the configured
/// apex height and a small negative settle velocity while grounded.
#[derive(Debug, Clone)]
pub struct CharacterIntegrator {
    move_speed: f32,
    jump_height: f32,
    gravity: f32,
    settle_velocity: f32,
    state: MovementState,
}

impl CharacterIntegrator {
    /// Build from a config that has already passed validation.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            jump_height: config.jump_height,
            gravity: config.gravity,
            settle_velocity: config.settle_velocity,
            state: MovementState::default(),
        }
    }

    /// Current vertical motion state.
    pub fn state(&self) -> MovementState {
        self.state
    }

    /// Current vertical velocity in m/s.
    pub fn vertical_velocity(&self) -> f32 {
        self.state.vertical_velocity
    }

    /// Overwrite the vertical velocity (host save/restore).
    pub fn set_vertical_velocity(&mut self, velocity: f32) {
        self.state.vertical_velocity = velocity;
    }

    /// Ground contact result of the most recent tick.
    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    /// The instantaneous upward velocity of a fresh jump: `sqrt(h * -2g)`,
    /// which peaks at exactly `jump_height` under constant gravity.
    pub fn jump_impulse(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Integrate one tick and return the displacement to hand to the
    /// kinematic mover.
    ///
    /// `forward` and `right` are the camera's horizontal basis. Order of
    /// the vertical terms matters: the grounded settle runs first, a jump
    /// impulse overwrites it, and gravity integrates on top of whichever
    /// won — even on the same tick the impulse was set.
    pub fn integrate(
        &mut self,
        dt: f32,
        command: &MovementCommand,
        grounded: bool,
        forward: Vec3,
        right: Vec3,
    ) -> Vec3 {
        let mut displacement = Vec3::ZERO;

        // Horizontal, camera-relative. The command direction is unit per
        // keyboard, but several sources can stack past unit length.
        let mut horizontal = right * command.direction.x + forward * command.direction.z;
        if horizontal.length() > 1.0 {
            horizontal = horizontal.normalize();
        }
        displacement += horizontal * self.move_speed * dt;

        self.state.grounded = grounded;

        if grounded && self.state.vertical_velocity < 0.0 {
            self.state.vertical_velocity = self.settle_velocity;
        }

        if command.jump_requested && grounded {
            self.state.vertical_velocity = self.jump_impulse();
        }

        self.state.vertical_velocity += self.gravity * dt;
        displacement += Vec3::Y * self.state.vertical_velocity * dt;

        displacement
    }
}
