//! Controller Tests - Full Per-Tick Pipeline
//!
//! End-to-end scenarios through the first-person controller: devices in,
//! displacement out, with a flat test floor standing in for the host's
//! physics world.

use std::cell::RefCell;
use std::rc::Rc;

use escape_room_engine::input::{DeviceId, DeviceKind, InputDevice, MovementKey};
use escape_room_engine::physics::{LayerMask, SpatialQuery};
use escape_room_engine::player::{FirstPersonController, KinematicMover, PlayerConfig};
use glam::{Vec2, Vec3};

const EPSILON: f32 = 1e-4;

/// Character transform shared between the test and the mover collaborator.
#[derive(Clone)]
struct Body(Rc<RefCell<Vec3>>);

impl Body {
    fn at(position: Vec3) -> Self {
        Self(Rc::new(RefCell::new(position)))
    }

    fn position(&self) -> Vec3 {
        *self.0.borrow()
    }
}

struct BodyMover(Body);

impl KinematicMover for BodyMover {
    fn ground_check_position(&self) -> Vec3 {
        self.0.position()
    }

    fn apply_move(&mut self, displacement: Vec3) {
        *self.0.0.borrow_mut() += displacement;
    }
}

/// Infinite flat floor at a fixed height, on every layer.
struct Floor {
    height: f32,
}

impl SpatialQuery for Floor {
    fn overlap_sphere(&self, center: Vec3, radius: f32, _mask: LayerMask) -> bool {
        center.y - radius <= self.height
    }
}

/// Controller over a floor at y = 0 with the body starting at `start`,
/// using a constant sensitivity of 1 for readable camera arithmetic.
fn controller_over_floor(start: Vec3) -> (FirstPersonController, Body) {
    let body = Body::at(start);
    let controller = FirstPersonController::builder()
        .config(PlayerConfig::default())
        .spatial_query(Box::new(Floor { height: 0.0 }))
        .kinematic_mover(Box::new(BodyMover(body.clone())))
        .sensitivity_curve(Box::new(1.0_f32))
        .build()
        .expect("controller should build with all collaborators");
    (controller, body)
}

// ============================================================================
// Movement Scenarios
// ============================================================================

#[test]
fn test_forward_key_moves_forward_at_speed() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(1));
    keyboard.set_movement_key(MovementKey::Forward, true);
    controller.on_device_change(keyboard, true);

    controller.tick(0.1);

    // speed 12 * dt 0.1 along the facing axis.
    let position = body.position();
    let horizontal = Vec3::new(position.x, 0.0, position.z);
    assert!((horizontal.length() - 1.2).abs() < EPSILON);
    assert!((position.z - 1.2).abs() < EPSILON);
}

#[test]
fn test_movement_is_camera_relative() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(2));
    keyboard.set_movement_key(MovementKey::Forward, true);
    controller.on_device_change(keyboard, true);

    controller.camera_mut().set_yaw_degrees(90.0);
    controller.tick(0.1);

    let position = body.position();
    assert!((position.x - 1.2).abs() < EPSILON);
    assert!(position.z.abs() < EPSILON);
}

#[test]
fn test_idle_character_only_falls() {
    let (mut controller, body) = controller_over_floor(Vec3::new(0.0, 10.0, 0.0));
    controller.tick(0.1);

    let position = body.position();
    assert!(position.x.abs() < EPSILON);
    assert!(position.z.abs() < EPSILON);
    assert!(position.y < 10.0);
}

#[test]
fn test_mouse_turn_redirects_movement() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(3));
    keyboard.set_movement_key(MovementKey::Forward, true);
    let mouse = InputDevice::mouse(DeviceId::new(4));
    controller.on_device_change(keyboard, true);
    controller.on_device_change(mouse.clone(), true);

    // Quarter turn right, applied before the movement basis is read.
    mouse.push_pointer_delta(Vec2::new(90.0, 0.0));
    controller.tick(0.1);

    assert!((controller.camera().yaw_degrees() - 90.0).abs() < EPSILON);
    let position = body.position();
    assert!((position.x - 1.2).abs() < EPSILON);
    assert!(position.z.abs() < EPSILON);
}

// ============================================================================
// Jump and Gravity Scenarios
// ============================================================================

#[test]
fn test_grounded_jump_sets_impulse() {
    let (mut controller, _body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(5));
    keyboard.set_movement_key(MovementKey::Jump, true);
    controller.on_device_change(keyboard, true);

    let dt = 0.001;
    controller.tick(dt);

    // h = 3, g = -9.81: sqrt(3 * 2 * 9.81) ≈ 7.668, minus one gravity step.
    let expected = (3.0_f32 * 2.0 * 9.81).sqrt() - 9.81 * dt;
    let state = controller.movement_state();
    assert!((state.vertical_velocity - expected).abs() < 1e-3);
    assert!(state.grounded);
}

#[test]
fn test_airborne_jump_key_is_ignored() {
    let (mut controller, _body) = controller_over_floor(Vec3::new(0.0, 50.0, 0.0));
    let keyboard = InputDevice::keyboard(DeviceId::new(6));
    keyboard.set_movement_key(MovementKey::Jump, true);
    controller.on_device_change(keyboard, true);

    controller.tick(0.1);

    let state = controller.movement_state();
    assert!(!state.grounded);
    assert!(state.vertical_velocity < 0.0);
}

#[test]
fn test_landing_settles_vertical_velocity() {
    let (mut controller, body) = controller_over_floor(Vec3::new(0.0, 3.0, 0.0));
    let dt = 0.02;

    // Fall until the ground probe reports contact.
    let mut ticks = 0;
    while !controller.movement_state().grounded {
        controller.tick(dt);
        ticks += 1;
        assert!(ticks < 1000, "never landed, y = {}", body.position().y);
    }

    // One grounded tick later the settle value has replaced the fall speed.
    controller.tick(dt);
    let expected = -2.0 - 9.81 * dt;
    assert!((controller.movement_state().vertical_velocity - expected).abs() < 1e-3);
}

#[test]
fn test_jump_then_land_roundtrip() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(7));
    keyboard.set_movement_key(MovementKey::Jump, true);
    controller.on_device_change(keyboard.clone(), true);

    let dt = 0.005;
    controller.tick(dt);
    keyboard.set_movement_key(MovementKey::Jump, false);

    let mut apex = 0.0_f32;
    for _ in 0..2000 {
        controller.tick(dt);
        apex = apex.max(body.position().y);
        if controller.movement_state().grounded && body.position().y < 0.5 {
            break;
        }
    }

    // Reaches roughly the configured 3m apex, then comes back down.
    assert!(apex > 2.7, "apex was {apex}");
    assert!(controller.movement_state().grounded);
}

// ============================================================================
// Device Lifecycle Scenarios
// ============================================================================

#[test]
fn test_double_remove_is_a_noop() {
    let (mut controller, _body) = controller_over_floor(Vec3::ZERO);
    let mouse = InputDevice::mouse(DeviceId::new(8));
    controller.on_device_change(mouse.clone(), true);
    assert_eq!(controller.registry().count(DeviceKind::Mouse), 1);

    controller.on_device_change(mouse.clone(), false);
    assert_eq!(controller.registry().count(DeviceKind::Mouse), 0);

    controller.on_device_change(mouse, false);
    assert_eq!(controller.registry().count(DeviceKind::Mouse), 0);
}

#[test]
fn test_removed_keyboard_stops_moving_the_character() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let keyboard = InputDevice::keyboard(DeviceId::new(9));
    keyboard.set_movement_key(MovementKey::Forward, true);
    controller.on_device_change(keyboard.clone(), true);

    controller.tick(0.1);
    let after_first = body.position().z;
    assert!(after_first > 1.0);

    controller.on_device_change(keyboard, false);
    controller.tick(0.1);
    assert!((body.position().z - after_first).abs() < EPSILON);
}

#[test]
fn test_queued_device_changes_apply_on_next_tick() {
    let (mut controller, body) = controller_over_floor(Vec3::ZERO);
    let sender = controller.device_sender();

    let keyboard = InputDevice::keyboard(DeviceId::new(10));
    keyboard.set_movement_key(MovementKey::Forward, true);

    let worker = std::thread::spawn(move || {
        sender.on_device_change(keyboard, true);
    });
    worker.join().expect("sender thread panicked");

    assert!(controller.registry().is_empty());
    controller.tick(0.1);
    assert_eq!(controller.registry().count(DeviceKind::Keyboard), 1);
    assert!((body.position().z - 1.2).abs() < EPSILON);
}

// ============================================================================
// Multi-Mouse Scenarios
// ============================================================================

#[test]
fn test_each_mouse_rotates_independently() {
    let (mut controller, _body) = controller_over_floor(Vec3::ZERO);
    let first = InputDevice::mouse(DeviceId::new(11));
    let second = InputDevice::mouse(DeviceId::new(12));
    controller.on_device_change(first.clone(), true);
    controller.on_device_change(second.clone(), true);

    first.push_pointer_delta(Vec2::new(10.0, 0.0));
    second.push_pointer_delta(Vec2::new(20.0, 0.0));
    let command = controller.tick(0.1);

    // Both rotations applied cumulatively; the command records the first
    // mouse's raw delta.
    assert!((controller.camera().yaw_degrees() - 30.0).abs() < EPSILON);
    assert_eq!(command.pointer_delta, Vec2::new(10.0, 0.0));
}

#[test]
fn test_mouse_delta_is_consumed_by_the_tick() {
    let (mut controller, _body) = controller_over_floor(Vec3::ZERO);
    let mouse = InputDevice::mouse(DeviceId::new(13));
    controller.on_device_change(mouse.clone(), true);

    mouse.push_pointer_delta(Vec2::new(15.0, 0.0));
    controller.tick(0.1);
    assert!((controller.camera().yaw_degrees() - 15.0).abs() < EPSILON);

    // No new motion: the next tick must not rotate further.
    controller.tick(0.1);
    assert!((controller.camera().yaw_degrees() - 15.0).abs() < EPSILON);
}
