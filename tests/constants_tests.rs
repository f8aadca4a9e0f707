// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use deck_core::{
    CAMERA_ZNEAR, CORRIDOR_CAMERA_ZFAR, DOOR_THICKNESS, DOOR_WIDTH, LOOK_SENSITIVITY,
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ZOOM_STEP, OVERVIEW_EYE,
    PATH_WIDTH, PITCH_LIMIT, SPACE_CAMERA_ZFAR, STAR_SPREAD, TRANSITION_IN_MS,
    TRANSITION_OUT_MS, WALK_EYE_HEIGHT, WALL_HEIGHT,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_ranges_are_sane() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(SPACE_CAMERA_ZFAR > CORRIDOR_CAMERA_ZFAR);
    assert!(STAR_SPREAD > 0.0);
    assert!(OVERVIEW_EYE.length() > ORBIT_MIN_DISTANCE);
    assert!(OVERVIEW_EYE.length() < ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn control_tuning_is_in_range() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(LOOK_SENSITIVITY > 0.0);
    assert!(PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(TRANSITION_IN_MS > TRANSITION_OUT_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn corridor_geometry_fits() {
    assert!(WALK_EYE_HEIGHT < WALL_HEIGHT);
    assert!(DOOR_WIDTH < PATH_WIDTH);
    assert!(DOOR_THICKNESS < DOOR_WIDTH);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        SLIDE_CONTAINER_ID,
        BACK_BUTTON_ID,
        LABEL_LAYER_ID,
        INSTRUCTIONS_ID,
        CROSSHAIR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(!SLIDE_CONTAINER_ID.starts_with(SLIDE_ID_PREFIX));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mesh_limits_fit_u16_indices() {
    let sphere_vertices = (SPHERE_SEGMENTS + 1) * (SPHERE_SEGMENTS / 2 + 1);
    assert!(sphere_vertices < u16::MAX as u32);
    assert!(2 * (RING_SEGMENTS + 1) < u16::MAX as u32);
    // eight bodies, eight rings and every corridor prop
    assert!(MAX_MESH_INSTANCES >= 8 + 8 + 3 + 16);
}

#[test]
fn favicon_is_an_inline_svg_data_uri() {
    let svg = FAVICON_HREF
        .strip_prefix("data:image/svg+xml,")
        .unwrap_or_default();
    assert!(svg.starts_with("<svg") && svg.ends_with("</svg>"));
    // a raw '#' would end the URI at the fragment
    assert!(!svg.contains('#'));
    assert!(!svg.contains('"'));
}
