//! First-Person Controller
//!
//! The orchestrator the host loop drives once per simulated frame. It owns
//! the device registry, camera, ground detector, and movement integrator,
//! and talks to the host through three collaborators: the spatial query
//! (ground contact), the kinematic mover (displacement application), and
//! the sensitivity curve (pointer response).
//!
//! Construction is fail-fast: a missing collaborator or invalid tuning
//! refuses to build, because a partially wired controller would silently
//! compute invalid displacement every tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use escape_room_engine::player::{FirstPersonController, PlayerConfig};
//! use escape_room_engine::camera::ResponseCurve;
//!
//! let mut controller = FirstPersonController::builder()
//!     .config(PlayerConfig::default())
//!     .spatial_query(Box::new(world))
//!     .kinematic_mover(Box::new(character))
//!     .sensitivity_curve(Box::new(ResponseCurve::default()))
//!     .build()?;
//!
//! // Platform callbacks (any thread):
//! let sender = controller.device_sender();
//!
//! // Host frame loop:
//! controller.tick(delta_time);
//! ```

use std::fmt;

use glam::Vec3;
use log::warn;
use thiserror::Error;

use crate::camera::{CameraController, SensitivityCurve};
use crate::input::{
    DeviceChangeSender, DeviceHandle, DeviceRegistry, MovementCommand, poll_movement,
};
use crate::physics::{GroundDetector, SpatialQuery};

use super::config::{ConfigError, PlayerConfig};
use super::integrator::{CharacterIntegrator, MovementState};

/// Host-side application of the integrated displacement.
///
/// The mover owns the character's world transform and performs the host
/// engine's collision resolution; the core only hands it a displacement.
pub trait KinematicMover {
    /// World-space point of the character's ground probe (at the feet).
    fn ground_check_position(&self) -> Vec3;

    /// Apply one tick's displacement to the character.
    fn apply_move(&mut self, displacement: Vec3);
}

/// A controller could not be assembled.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("spatial query collaborator is required")]
    MissingSpatialQuery,
    #[error("kinematic mover collaborator is required")]
    MissingKinematicMover,
    #[error("sensitivity curve collaborator is required")]
    MissingSensitivityCurve,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Builder for [`FirstPersonController`]; see the module docs for the
/// expected wiring.
#[derive(Default)]
pub struct FirstPersonControllerBuilder {
    config: PlayerConfig,
    query: Option<Box<dyn SpatialQuery>>,
    mover: Option<Box<dyn KinematicMover>>,
    curve: Option<Box<dyn SensitivityCurve>>,
}

impl FirstPersonControllerBuilder {
    /// Use `config` instead of the default tuning.
    pub fn config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply the host's volumetric overlap query.
    pub fn spatial_query(mut self, query: Box<dyn SpatialQuery>) -> Self {
        self.query = Some(query);
        self
    }

    /// Supply the host's kinematic character mover.
    pub fn kinematic_mover(mut self, mover: Box<dyn KinematicMover>) -> Self {
        self.mover = Some(mover);
        self
    }

    /// Supply the pointer sensitivity curve.
    pub fn sensitivity_curve(mut self, curve: Box<dyn SensitivityCurve>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Validate the tuning and collaborators and assemble the controller.
    pub fn build(self) -> Result<FirstPersonController, BuildError> {
        self.config.validate()?;
        let query = self.query.ok_or(BuildError::MissingSpatialQuery)?;
        let mover = self.mover.ok_or(BuildError::MissingKinematicMover)?;
        let curve = self.curve.ok_or(BuildError::MissingSensitivityCurve)?;

        Ok(FirstPersonController {
            registry: DeviceRegistry::new(),
            camera: CameraController::new(curve),
            detector: GroundDetector::new(self.config.ground_check_radius, self.config.ground_mask),
            integrator: CharacterIntegrator::from_config(&self.config),
            config: self.config,
            query,
            mover,
        })
    }
}

/// Per-frame input, camera, and movement pipeline for one character.
pub struct FirstPersonController {
    config: PlayerConfig,
    registry: DeviceRegistry,
    camera: CameraController,
    detector: GroundDetector,
    integrator: CharacterIntegrator,
    query: Box<dyn SpatialQuery>,
    mover: Box<dyn KinematicMover>,
}

impl fmt::Debug for FirstPersonController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstPersonController")
            .field("config", &self.config)
            .field("camera", &self.camera)
            .field("devices", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl FirstPersonController {
    /// Start assembling a controller.
    pub fn builder() -> FirstPersonControllerBuilder {
        FirstPersonControllerBuilder::default()
    }

    /// Thread-safe device-change entry point for the platform layer.
    pub fn device_sender(&self) -> DeviceChangeSender {
        self.registry.sender()
    }

    /// Same-thread device-change entry point.
    pub fn on_device_change(&mut self, device: DeviceHandle, added: bool) {
        self.registry.on_device_change(device, added);
    }

    /// The registered devices.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// The camera state and basis.
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera access (host-driven orientation resets).
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// The vertical motion state carried across ticks.
    pub fn movement_state(&self) -> MovementState {
        self.integrator.state()
    }

    /// The validated tuning this controller runs with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Run one simulated frame.
    ///
    /// Pipeline: drain queued device changes, poll the movement command,
    /// rotate the camera once per registered mouse, query ground contact,
    /// integrate, and hand the displacement to the kinematic mover.
    ///
    /// Returns the movement command that drove the tick, for host-side
    /// consumers such as animation.
    pub fn tick(&mut self, dt: f32) -> MovementCommand {
        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring tick with invalid delta time {dt}");
            return MovementCommand::idle();
        }

        self.registry.drain_events();

        // Polled before the mouse deltas are consumed below, so the command
        // records the first mouse's raw delta for this tick.
        let command = poll_movement(&self.registry);

        // One camera update per registered mouse; rotation happens before
        // the movement basis is read.
        for mouse in self.registry.mice() {
            let delta = mouse.take_pointer_delta();
            self.camera.apply_pointer_delta(delta);
        }

        let grounded = self
            .detector
            .is_grounded(self.query.as_ref(), self.mover.ground_check_position());

        let displacement = self.integrator.integrate(
            dt,
            &command,
            grounded,
            self.camera.forward(),
            self.camera.right(),
        );

        self.mover.apply_move(displacement);
        command
    }
}
