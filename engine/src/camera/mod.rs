//! Camera Module
//!
//! First-person camera state and the pointer sensitivity response. This
//! module is window-system agnostic: it only turns pointer deltas into
//! clamped yaw/pitch angles and exposes the horizontal basis the movement
//! integrator uses.

pub mod controller;
pub mod sensitivity;

pub use controller::{CameraController, CameraState};
pub use sensitivity::{Keyframe, ResponseCurve, SensitivityCurve};
