//! Escape Room Engine Library
//!
//! The player movement and first-person camera core for a streamed escape
//! room. It unifies heterogeneous input devices into a per-tick movement
//! command, turns pointer motion into clamped camera yaw/pitch, and
//! integrates a kinematic character under gravity and jumping. Rendering,
//! networking, and device drivers live in the host; the host drives this
//! core once per simulated frame and implements its collaborator traits.
//!
//! # Modules
//!
//! - [`input`] - Device model, registry with deferred change queue, and the
//!   per-tick movement aggregator
//! - [`camera`] - Pointer-driven yaw/pitch with pole clamping and the
//!   sensitivity response curve
//! - [`physics`] - Ground-contact probe over the host's overlap query
//! - [`player`] - Movement tuning, the character integrator, and the
//!   per-frame [`player::FirstPersonController`]
//! - [`room`] - Room lifecycle clock and exit-door state
//!
//! # Example
//!
//! ```ignore
//! use escape_room_engine::camera::ResponseCurve;
//! use escape_room_engine::input::{DeviceId, InputDevice, MovementKey};
//! use escape_room_engine::player::{FirstPersonController, PlayerConfig};
//!
//! let mut controller = FirstPersonController::builder()
//!     .config(PlayerConfig::default())
//!     .spatial_query(Box::new(physics_world))
//!     .kinematic_mover(Box::new(character))
//!     .sensitivity_curve(Box::new(ResponseCurve::default()))
//!     .build()?;
//!
//! // Device callbacks, possibly from another thread:
//! let sender = controller.device_sender();
//! let keyboard = InputDevice::keyboard(DeviceId::new(1));
//! sender.on_device_change(keyboard.clone(), true);
//!
//! // Platform event loop:
//! keyboard.set_movement_key(MovementKey::Forward, true);
//!
//! // Host frame loop:
//! controller.tick(delta_time);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod room;

// Re-export the types most hosts touch directly.
pub use camera::{CameraController, CameraState, ResponseCurve, SensitivityCurve};
pub use input::{
    DeviceChangeSender, DeviceId, DeviceKind, DeviceRegistry, InputDevice, MovementCommand,
    MovementKey,
};
pub use physics::{GroundDetector, LayerMask, SpatialQuery};
pub use player::{
    BuildError, FirstPersonController, KinematicMover, MovementState, PlayerConfig,
};
pub use room::{DoorControl, RoomController, RoomState};
