//! Input Device Module
//!
//! The device model for every input source the core understands: keyboard,
//! mouse, gamepad, gyroscope, spatial tracker, and touchscreen. Each device
//! is a tagged variant carrying its kind-specific readable state.
//!
//! Ownership: the platform input layer creates devices and keeps mutating
//! their state through the shared [`DeviceHandle`]; the registry stores
//! clones of the same handle keyed by [`DeviceId`]. Mutable state sits
//! behind a `Mutex` so a platform thread may write while the tick thread
//! reads.

use std::sync::{Arc, Mutex, MutexGuard};

use glam::{Quat, Vec2, Vec3};

use super::keyboard::{MovementKey, MovementKeys};
use super::mouse::PointerState;

/// Stable identity of an input device across add/remove notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(u32);

impl DeviceId {
    /// Wrap a raw platform device id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw platform id.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The kind of an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Gamepad,
    Gyroscope,
    Tracker,
    Touchscreen,
}

/// Stick axes reported by a gamepad, each in `[-1, 1]` per component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadAxes {
    pub left_stick: Vec2,
    pub right_stick: Vec2,
}

/// Angular velocity reported by a gyroscope, radians per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GyroState {
    pub angular_velocity: Vec3,
}

/// World-space pose reported by a spatial tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackerPose {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Active contacts reported by a touchscreen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchContacts {
    pub active: u32,
}

/// Kind-specific device state.
#[derive(Debug)]
enum DeviceState {
    Keyboard(Mutex<MovementKeys>),
    Mouse(Mutex<PointerState>),
    Gamepad(Mutex<GamepadAxes>),
    Gyroscope(Mutex<GyroState>),
    Tracker(Mutex<TrackerPose>),
    Touchscreen(Mutex<TouchContacts>),
}

/// One input device: a stable identity plus kind-specific state.
#[derive(Debug)]
pub struct InputDevice {
    id: DeviceId,
    state: DeviceState,
}

/// Shared reference to a device, held by both the platform layer and the
/// registry.
pub type DeviceHandle = Arc<InputDevice>;

// Recover the inner state if a platform thread panicked mid-write.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl InputDevice {
    /// Create a keyboard device with all keys released.
    pub fn keyboard(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Keyboard(Mutex::new(MovementKeys::new())),
        })
    }

    /// Create a mouse device with zero accumulated delta.
    pub fn mouse(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Mouse(Mutex::new(PointerState::new())),
        })
    }

    /// Create a gamepad device with centered sticks.
    pub fn gamepad(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Gamepad(Mutex::new(GamepadAxes::default())),
        })
    }

    /// Create a gyroscope device at rest.
    pub fn gyroscope(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Gyroscope(Mutex::new(GyroState::default())),
        })
    }

    /// Create a spatial tracker device at the origin pose.
    pub fn tracker(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Tracker(Mutex::new(TrackerPose::default())),
        })
    }

    /// Create a touchscreen device with no contacts.
    pub fn touchscreen(id: DeviceId) -> DeviceHandle {
        Arc::new(Self {
            id,
            state: DeviceState::Touchscreen(Mutex::new(TouchContacts::default())),
        })
    }

    /// The device's stable identity.
    #[inline]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// The device's kind.
    pub fn kind(&self) -> DeviceKind {
        match self.state {
            DeviceState::Keyboard(_) => DeviceKind::Keyboard,
            DeviceState::Mouse(_) => DeviceKind::Mouse,
            DeviceState::Gamepad(_) => DeviceKind::Gamepad,
            DeviceState::Gyroscope(_) => DeviceKind::Gyroscope,
            DeviceState::Tracker(_) => DeviceKind::Tracker,
            DeviceState::Touchscreen(_) => DeviceKind::Touchscreen,
        }
    }

    /// Record a movement-key press or release on a keyboard device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn set_movement_key(&self, key: MovementKey, pressed: bool) -> bool {
        match &self.state {
            DeviceState::Keyboard(keys) => {
                lock(keys).handle_key(key, pressed);
                true
            }
            _ => false,
        }
    }

    /// Snapshot the currently held movement keys.
    ///
    /// Non-keyboard devices report all keys released.
    pub fn movement_keys(&self) -> MovementKeys {
        match &self.state {
            DeviceState::Keyboard(keys) => *lock(keys),
            _ => MovementKeys::default(),
        }
    }

    /// Add raw pointer motion to a mouse device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn push_pointer_delta(&self, delta: Vec2) -> bool {
        match &self.state {
            DeviceState::Mouse(pointer) => {
                lock(pointer).accumulate(delta);
                true
            }
            _ => false,
        }
    }

    /// Consume the accumulated pointer delta of a mouse device.
    ///
    /// Non-mouse devices report zero.
    pub fn take_pointer_delta(&self) -> Vec2 {
        match &self.state {
            DeviceState::Mouse(pointer) => lock(pointer).consume(),
            _ => Vec2::ZERO,
        }
    }

    /// Read the accumulated pointer delta without consuming it.
    ///
    /// Non-mouse devices report zero.
    pub fn peek_pointer_delta(&self) -> Vec2 {
        match &self.state {
            DeviceState::Mouse(pointer) => lock(pointer).peek(),
            _ => Vec2::ZERO,
        }
    }

    /// Update the stick axes of a gamepad device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn set_stick_axes(&self, axes: GamepadAxes) -> bool {
        match &self.state {
            DeviceState::Gamepad(state) => {
                *lock(state) = axes;
                true
            }
            _ => false,
        }
    }

    /// Read the stick axes of a gamepad device (centered otherwise).
    pub fn stick_axes(&self) -> GamepadAxes {
        match &self.state {
            DeviceState::Gamepad(state) => *lock(state),
            _ => GamepadAxes::default(),
        }
    }

    /// Update the angular velocity of a gyroscope device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn set_angular_velocity(&self, angular_velocity: Vec3) -> bool {
        match &self.state {
            DeviceState::Gyroscope(state) => {
                lock(state).angular_velocity = angular_velocity;
                true
            }
            _ => false,
        }
    }

    /// Update the pose of a tracker device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn set_pose(&self, pose: TrackerPose) -> bool {
        match &self.state {
            DeviceState::Tracker(state) => {
                *lock(state) = pose;
                true
            }
            _ => false,
        }
    }

    /// Update the active contact count of a touchscreen device.
    ///
    /// Returns `false` (and does nothing) when called on any other kind.
    pub fn set_touch_count(&self, active: u32) -> bool {
        match &self.state {
            DeviceState::Touchscreen(state) => {
                lock(state).active = active;
                true
            }
            _ => false,
        }
    }
}
