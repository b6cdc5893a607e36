//! Keyboard Input Module
//!
//! Contains per-device movement key state. Decoupled from any windowing
//! system: the platform layer translates its own scancodes into
//! [`MovementKey`] values before handing them to a keyboard device.

/// Logical movement keys, independent of physical layout.
///
/// The platform layer owns the physical-key mapping (WASD, arrows,
/// remapped bindings); this core only sees the logical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    /// Move forward (default: W)
    Forward,
    /// Move backward (default: S)
    Back,
    /// Strafe left (default: A)
    Left,
    /// Strafe right (default: D)
    Right,
    /// Jump (default: Space)
    Jump,
}

/// Tracks which movement keys are currently held on one keyboard device.
///
/// Keys are level-triggered: a key contributes every tick while held,
/// matching continuous movement when keys are kept down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Forward key held
    pub forward: bool,
    /// Backward key held
    pub back: bool,
    /// Strafe-left key held
    pub left: bool,
    /// Strafe-right key held
    pub right: bool,
    /// Jump key held
    pub jump: bool,
}

impl MovementKeys {
    /// Create a state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release of one movement key.
    pub fn handle_key(&mut self, key: MovementKey, pressed: bool) {
        match key {
            MovementKey::Forward => self.forward = pressed,
            MovementKey::Back => self.back = pressed,
            MovementKey::Left => self.left = pressed,
            MovementKey::Right => self.right = pressed,
            MovementKey::Jump => self.jump = pressed,
        }
    }

    /// Check whether any movement key is currently held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.jump
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_released() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_handle_key_press_and_release() {
        let mut keys = MovementKeys::new();
        keys.handle_key(MovementKey::Forward, true);
        assert!(keys.forward);
        assert!(keys.any_pressed());

        keys.handle_key(MovementKey::Forward, false);
        assert!(!keys.forward);
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_jump_tracked_independently() {
        let mut keys = MovementKeys::new();
        keys.handle_key(MovementKey::Jump, true);
        assert!(keys.jump);
        assert!(!keys.forward);
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.handle_key(MovementKey::Left, true);
        keys.handle_key(MovementKey::Jump, true);
        keys.reset();
        assert_eq!(keys, MovementKeys::default());
    }
}
