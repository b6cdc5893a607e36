//! Input Module
//!
//! Platform-agnostic input handling: a device model covering every input
//! source the core understands, a registry partitioned by device kind, and
//! the per-tick aggregator that folds registered devices into one
//! [`MovementCommand`]. Decoupled from any specific windowing system; the
//! platform layer owns the devices and feeds their state.
//!
//! # Example
//!
//! ```rust,ignore
//! use escape_room_engine::input::{DeviceId, DeviceRegistry, InputDevice, MovementKey};
//!
//! let mut registry = DeviceRegistry::new();
//! let keyboard = InputDevice::keyboard(DeviceId::new(1));
//! registry.add_device(keyboard.clone());
//!
//! // Platform event loop:
//! keyboard.set_movement_key(MovementKey::Forward, true);
//!
//! // Tick loop:
//! registry.drain_events();
//! let command = escape_room_engine::input::poll_movement(&registry);
//! ```

pub mod aggregator;
pub mod device;
pub mod keyboard;
pub mod mouse;
pub mod registry;

// Re-export commonly used types at module level
pub use aggregator::{MovementCommand, poll_movement};
pub use device::{
    DeviceHandle, DeviceId, DeviceKind, GamepadAxes, GyroState, InputDevice, TouchContacts,
    TrackerPose,
};
pub use keyboard::{MovementKey, MovementKeys};
pub use mouse::PointerState;
pub use registry::{DeviceChangeSender, DeviceEvent, DeviceRegistry};
