// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use deck_core::PickOrigin;
use glam::Vec2;
use input::*;

#[test]
fn mouse_position_maps_to_ndc() {
    let mut ms = MouseState::default();
    ms.set_position(0.0, 0.0, 800.0, 600.0);
    assert!((ms.ndc - Vec2::new(-1.0, 1.0)).length() < 1e-6);

    ms.set_position(800.0, 600.0, 800.0, 600.0);
    assert!((ms.ndc - Vec2::new(1.0, -1.0)).length() < 1e-6);

    ms.set_position(400.0, 300.0, 800.0, 600.0);
    assert!(ms.ndc.length() < 1e-6);
    assert_eq!((ms.x, ms.y), (400.0, 300.0));
}

#[test]
fn look_delta_is_consumed_once() {
    let mut ms = MouseState::default();
    ms.look_delta += Vec2::new(3.0, -2.0);
    ms.look_delta += Vec2::new(1.0, 1.0);
    assert_eq!(ms.take_look_delta(), Vec2::new(4.0, -1.0));
    assert_eq!(ms.take_look_delta(), Vec2::ZERO);
}

#[test]
fn pick_ndc_follows_origin() {
    let pointer = Vec2::new(0.3, -0.7);
    assert_eq!(pick_ndc(PickOrigin::Pointer, pointer), pointer);
    assert_eq!(pick_ndc(PickOrigin::ScreenCenter, pointer), Vec2::ZERO);
}

#[test]
fn return_keys() {
    assert!(is_return_key("Escape"));
    assert!(is_return_key("Backspace"));
    assert!(!is_return_key("KeyW"));
    assert!(!is_return_key("Enter"));
}

#[test]
fn wheel_direction_is_a_sign() {
    assert_eq!(wheel_direction(120.0), 1.0);
    assert_eq!(wheel_direction(-3.5), -1.0);
    assert_eq!(wheel_direction(0.0), 0.0);
}
