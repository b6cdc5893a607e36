//! First-Person Camera Controller
//!
//! Converts raw pointer deltas into camera yaw and pitch. Sensitivity comes
//! from the configured [`SensitivityCurve`]; yaw accumulates freely and
//! wraps, while pitch runs through a fixed sequence of clamp bands that keep
//! the view from crossing the vertical poles.
//!
//! Angles are Euler degrees normalized to `[0, 360)` on every write, the
//! convention of the hosting engine's transforms. A level view is pitch 0;
//! looking down moves pitch toward 40, looking up wraps into the 320..360
//! arc.

use std::fmt;

use glam::{Vec2, Vec3};

use super::sensitivity::SensitivityCurve;

/// Vertical pointer input is magnitude-limited to this many degrees of
/// effect per update, before the sensitivity multiplier.
const PITCH_INPUT_LIMIT_DEG: f32 = 40.0;

/// Euler pitch where an upward look stops (40 degrees above level).
const LOOK_UP_STOP_DEG: f32 = 320.0;

/// Euler pitch where a downward look stops (40 degrees below level).
const LOOK_DOWN_STOP_DEG: f32 = 40.0;

/// Boundary between the downward arc (0..180) and the upward arc (180..360).
const HALF_TURN_DEG: f32 = 180.0;

/// Bounds of the recenter band; candidates inside it snap back to level.
const RECENTER_MIN_DEG: f32 = 45.0;
const RECENTER_MAX_DEG: f32 = 315.0;

/// Normalize an angle into `[0, 360)`.
#[inline]
fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Camera orientation snapshot, Euler degrees in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
}

/// First-person camera driven by pointer deltas.
pub struct CameraController {
    yaw_degrees: f32,
    pitch_degrees: f32,
    curve: Box<dyn SensitivityCurve>,
}

impl fmt::Debug for CameraController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraController")
            .field("yaw_degrees", &self.yaw_degrees)
            .field("pitch_degrees", &self.pitch_degrees)
            .finish_non_exhaustive()
    }
}

impl CameraController {
    /// Create a level camera looking along yaw 0, using `curve` for
    /// pointer sensitivity.
    pub fn new(curve: Box<dyn SensitivityCurve>) -> Self {
        Self {
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
            curve,
        }
    }

    /// Current yaw in degrees, `[0, 360)`.
    #[inline]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Current pitch in degrees, `[0, 360)`.
    #[inline]
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_degrees
    }

    /// Set the yaw directly (normalized into `[0, 360)`).
    pub fn set_yaw_degrees(&mut self, yaw: f32) {
        self.yaw_degrees = wrap_degrees(yaw);
    }

    /// Set the pitch directly (normalized into `[0, 360)`, not clamped;
    /// the next pointer update runs the clamp bands).
    pub fn set_pitch_degrees(&mut self, pitch: f32) {
        self.pitch_degrees = wrap_degrees(pitch);
    }

    /// Orientation snapshot for the host's camera transform.
    pub fn state(&self) -> CameraState {
        CameraState {
            yaw_degrees: self.yaw_degrees,
            pitch_degrees: self.pitch_degrees,
        }
    }

    /// Return to a level view along yaw 0.
    pub fn reset_orientation(&mut self) {
        self.yaw_degrees = 0.0;
        self.pitch_degrees = 0.0;
    }

    /// Apply one pointer delta: yaw from the horizontal component, pitch
    /// from the vertical component through the clamp bands.
    ///
    /// The candidate pitch is normalized into `[0, 360)` before the bands
    /// run, so a single large update can never leave the pitch inside the
    /// forbidden arc between the two stops.
    pub fn apply_pointer_delta(&mut self, delta: Vec2) {
        let sensitivity = self.curve.evaluate(delta.length());

        self.yaw_degrees = wrap_degrees(self.yaw_degrees + delta.x * sensitivity);

        let mut dy = delta.y;
        if dy.abs() > PITCH_INPUT_LIMIT_DEG {
            dy = PITCH_INPUT_LIMIT_DEG * dy.signum();
        }

        let mut t = wrap_degrees(self.pitch_degrees + (-dy) * sensitivity);

        // The three bands overlap and run in this exact order; each may
        // override the previous one. Clamp behavior near the poles depends
        // on the ordering, so do not rearrange them.
        if t < LOOK_UP_STOP_DEG && t > HALF_TURN_DEG {
            t = LOOK_UP_STOP_DEG;
        }
        if t > LOOK_DOWN_STOP_DEG && t < HALF_TURN_DEG {
            t = LOOK_DOWN_STOP_DEG;
        }
        if t > RECENTER_MIN_DEG && t < RECENTER_MAX_DEG {
            t = 0.0;
        }

        self.pitch_degrees = t;
    }

    /// Horizontal forward direction of the current yaw (unit, XZ plane).
    ///
    /// Yaw 0 faces +Z; yaw 90 faces +X.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Horizontal right direction of the current yaw (unit, XZ plane).
    #[inline]
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.cos(), 0.0, -yaw.sin())
    }
}
