//! Player Module
//!
//! Character movement and the per-frame orchestration around it.
//!
//! # Components
//!
//! - [`PlayerConfig`] - validated movement tuning (speed, gravity, jump)
//! - [`CharacterIntegrator`] - gravity/jump/ground displacement integration
//! - [`FirstPersonController`] - the per-frame pipeline the host drives:
//!   device changes in, displacement out
//! - [`KinematicMover`] - host collaborator that applies displacement

pub mod config;
pub mod controller;
pub mod integrator;

pub use config::{
    ConfigError, GRAVITY, GROUND_CHECK_RADIUS, JUMP_HEIGHT, MOVE_SPEED, PlayerConfig,
    SETTLE_VELOCITY,
};
pub use controller::{
    BuildError, FirstPersonController, FirstPersonControllerBuilder, KinematicMover,
};
pub use integrator::{CharacterIntegrator, MovementState};
