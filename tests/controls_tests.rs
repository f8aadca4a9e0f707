// Host-side tests for orbit and first-person walk controls.

use deck_core::*;
use glam::Vec3;

fn overview() -> CameraPose {
    CameraPose::new(OVERVIEW_EYE, OVERVIEW_TARGET)
}

#[test]
fn orbit_is_idle_without_input() {
    let mut orbit = OrbitControls::default();
    let mut pose = overview();
    assert!(orbit.is_settled());
    assert!(!orbit.update(&mut pose));
    assert_eq!(pose, overview());
}

#[test]
fn orbit_drag_requires_an_active_drag() {
    let mut orbit = OrbitControls::default();
    orbit.drag(100.0, 0.0, 800.0);
    assert!(orbit.is_settled());

    orbit.begin_drag();
    orbit.drag(100.0, 0.0, 800.0);
    assert!(!orbit.is_settled());
    orbit.end_drag();
    assert!(!orbit.is_dragging());
}

#[test]
fn orbit_rotation_keeps_distance_and_target() {
    let mut orbit = OrbitControls::default();
    let mut pose = overview();
    orbit.begin_drag();
    orbit.drag(200.0, 50.0, 800.0);
    for _ in 0..10 {
        orbit.update(&mut pose);
    }
    assert!((pose.position.length() - 35.0).abs() < 1e-3);
    assert_eq!(pose.target, Vec3::ZERO);
    assert!(pose.position.x.abs() > 1e-3);
}

#[test]
fn orbit_damping_eventually_settles() {
    let mut orbit = OrbitControls::default();
    let mut pose = overview();
    orbit.begin_drag();
    orbit.drag(50.0, 0.0, 800.0);
    orbit.end_drag();
    for _ in 0..2000 {
        orbit.update(&mut pose);
    }
    assert!(orbit.is_settled());
}

#[test]
fn orbit_dolly_respects_distance_limits() {
    let mut orbit = OrbitControls::default();
    let mut pose = overview();

    orbit.dolly(-1.0);
    orbit.update(&mut pose);
    assert!((pose.position.length() - 35.0 * ORBIT_ZOOM_STEP).abs() < 1e-3);

    for _ in 0..200 {
        orbit.dolly(-1.0);
        orbit.update(&mut pose);
    }
    assert!((pose.position.length() - ORBIT_MIN_DISTANCE).abs() < 1e-3);

    for _ in 0..400 {
        orbit.dolly(1.0);
        orbit.update(&mut pose);
    }
    assert!((pose.position.length() - ORBIT_MAX_DISTANCE).abs() < 1e-2);
}

#[test]
fn move_keys_map_wasd_and_arrows() {
    assert_eq!(key_code_to_move("KeyW"), Some(MoveKey::Forward));
    assert_eq!(key_code_to_move("ArrowUp"), Some(MoveKey::Forward));
    assert_eq!(key_code_to_move("KeyS"), Some(MoveKey::Backward));
    assert_eq!(key_code_to_move("ArrowDown"), Some(MoveKey::Backward));
    assert_eq!(key_code_to_move("KeyA"), Some(MoveKey::Left));
    assert_eq!(key_code_to_move("ArrowLeft"), Some(MoveKey::Left));
    assert_eq!(key_code_to_move("KeyD"), Some(MoveKey::Right));
    assert_eq!(key_code_to_move("ArrowRight"), Some(MoveKey::Right));
    assert_eq!(key_code_to_move("Space"), None);
}

#[test]
fn walk_starts_facing_down_the_corridor() {
    let start = corridor_start_pose();
    let walk = WalkControls::new(&start);
    assert!(walk.yaw().abs() < 1e-6);
    assert!(walk.pitch().abs() < 1e-6);
    assert!(walk.forward().distance(Vec3::NEG_Z) < 1e-5);
}

#[test]
fn walk_is_inert_until_locked() {
    let mut pose = corridor_start_pose();
    let mut walk = WalkControls::new(&pose);
    walk.set_key(MoveKey::Forward, true);
    walk.look(100.0, 0.0);
    walk.update(&mut pose, 1.0);
    assert_eq!(pose, corridor_start_pose());
    assert!(walk.yaw().abs() < 1e-6);
}

#[test]
fn walk_forward_moves_along_view_at_eye_height() {
    let mut pose = corridor_start_pose();
    let mut walk = WalkControls::new(&pose);
    walk.set_locked(true);
    walk.set_key(MoveKey::Forward, true);
    walk.update(&mut pose, 0.5);
    assert!((pose.position.z - (WALK_START_Z - WALK_SPEED * 0.5)).abs() < 1e-4);
    assert_eq!(pose.position.y, WALK_EYE_HEIGHT);
    assert!((pose.target - pose.position).distance(Vec3::NEG_Z) < 1e-5);
}

#[test]
fn diagonal_walk_is_not_faster() {
    let mut pose = corridor_start_pose();
    let mut walk = WalkControls::new(&pose);
    walk.set_locked(true);
    walk.set_key(MoveKey::Forward, true);
    walk.set_key(MoveKey::Right, true);
    let before = pose.position;
    walk.update(&mut pose, 1.0);
    assert!(((pose.position - before).length() - WALK_SPEED).abs() < 1e-4);
    assert!(pose.position.x > before.x);
}

#[test]
fn looking_up_does_not_lift_the_walker() {
    let mut pose = corridor_start_pose();
    let mut walk = WalkControls::new(&pose);
    walk.set_locked(true);
    walk.look(0.0, -10_000.0);
    assert!((walk.pitch() - PITCH_LIMIT).abs() < 1e-6);
    walk.set_key(MoveKey::Forward, true);
    walk.update(&mut pose, 1.0);
    assert_eq!(pose.position.y, WALK_EYE_HEIGHT);
    assert!(pose.target.y > pose.position.y);
}

#[test]
fn unlocking_releases_held_keys() {
    let pose = corridor_start_pose();
    let mut walk = WalkControls::new(&pose);
    walk.set_locked(true);
    walk.set_key(MoveKey::Left, true);
    walk.set_locked(false);
    assert!(!walk.is_held(MoveKey::Left));
    assert!(!walk.is_locked());
}

#[test]
fn sync_from_recovers_yaw() {
    let pose = CameraPose::new(Vec3::new(0.0, WALK_EYE_HEIGHT, 0.0), Vec3::new(1.0, WALK_EYE_HEIGHT, 0.0));
    let mut walk = WalkControls::new(&corridor_start_pose());
    walk.sync_from(&pose);
    assert!(walk.forward().distance(Vec3::X) < 1e-5);
}

#[test]
fn orbit_reset_drops_queued_motion() {
    let mut orbit = OrbitControls::default();
    let mut pose = overview();
    orbit.begin_drag();
    orbit.drag(300.0, 40.0, 800.0);
    orbit.dolly(1.0);
    orbit.reset();
    assert!(!orbit.is_dragging());
    assert!(orbit.is_settled());
    assert!(!orbit.update(&mut pose));
    assert_eq!(pose, overview());

    // a drag after reset needs a fresh begin_drag
    orbit.drag(300.0, 0.0, 800.0);
    assert!(orbit.is_settled());
}
