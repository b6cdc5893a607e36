//! Input Aggregator Module
//!
//! Folds the registry's devices into one normalized [`MovementCommand`] per
//! tick. Keyboards drive the horizontal direction and the jump flag; the
//! pointer delta is read from the first registered mouse. Gamepads,
//! touchscreens, gyroscopes, and trackers are enumerated by the registry but
//! contribute no movement yet.

use glam::{Vec2, Vec3};

use super::registry::DeviceRegistry;

/// The per-tick movement command produced from all registered devices.
///
/// `direction` is the summed keyboard direction: horizontal components on
/// the X/Z plane (unit length when any horizontal key is held), plus a +Y
/// component while the jump key is held. `jump_requested` mirrors that +Y
/// component. Produced fresh each tick; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementCommand {
    /// Input-space direction; +Z forward, +X right, +Y jump.
    pub direction: Vec3,
    /// Jump key held this tick.
    pub jump_requested: bool,
    /// Raw pointer delta of the first registered mouse this tick.
    pub pointer_delta: Vec2,
}

impl MovementCommand {
    /// A command with no movement, no jump, and no pointer motion.
    pub fn idle() -> Self {
        Self {
            direction: Vec3::ZERO,
            jump_requested: false,
            pointer_delta: Vec2::ZERO,
        }
    }
}

/// Poll every registered device and build this tick's [`MovementCommand`].
///
/// The direction accumulates across keyboards and is renormalized after
/// each one, before that keyboard's jump contribution is added. With more
/// than one keyboard the reassignment means the last keyboard effectively
/// decides the horizontal direction; this is kept as-is deliberately, since
/// downstream behavior depends on it.
///
/// The pointer delta is peeked, not consumed; the camera update path owns
/// consumption (one rotation per registered mouse, see the controller).
pub fn poll_movement(registry: &DeviceRegistry) -> MovementCommand {
    let mut direction = Vec3::ZERO;

    for keyboard in registry.keyboards() {
        let keys = keyboard.movement_keys();
        if keys.forward {
            direction += Vec3::Z;
        }
        if keys.back {
            direction -= Vec3::Z;
        }
        if keys.left {
            direction -= Vec3::X;
        }
        if keys.right {
            direction += Vec3::X;
        }

        direction = direction.normalize_or_zero();

        if keys.jump {
            direction += Vec3::Y;
        }
    }

    // TODO: feed the gamepad left stick into the direction once the stick
    // mapping is settled.

    let pointer_delta = registry
        .mice()
        .first()
        .map(|mouse| mouse.peek_pointer_delta())
        .unwrap_or(Vec2::ZERO);

    MovementCommand {
        direction,
        jump_requested: direction.y > 0.0,
        pointer_delta,
    }
}
