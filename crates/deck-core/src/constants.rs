use glam::Vec3;

// Shared scene and interaction tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const SPACE_CAMERA_ZFAR: f32 = 1000.0;
pub const CORRIDOR_CAMERA_ZFAR: f32 = 100.0;

// Fixed overview pose the space variant returns to after a slide
pub const OVERVIEW_EYE: Vec3 = Vec3::new(0.0, 0.0, 35.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::ZERO;

// Transitions
pub const TRANSITION_IN_MS: u64 = 2000;
pub const TRANSITION_OUT_MS: u64 = 1500;
pub const STANDOFF_FACTOR: f32 = 3.0; // camera distance = factor * object size

// Per-frame decorative spin of the bodies (radians)
pub const BODY_SPIN_X: f32 = 0.002;
pub const BODY_SPIN_Y: f32 = 0.005;

// Hover highlight (emissive 0x333333)
pub const HOVER_EMISSIVE: f32 = 0.2;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch

// First-person walking (corridor)
pub const WALK_SPEED: f32 = 3.0; // units per second
pub const WALK_EYE_HEIGHT: f32 = 1.6;
pub const WALK_START_Z: f32 = 5.0;
pub const LOOK_SENSITIVITY: f32 = 0.002; // radians per pixel
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STAR_SPREAD: f32 = 2000.0;
pub const STAR_SIZE: f32 = 0.1;

// Planet decorations
pub const RING_GAP: f32 = 0.5; // ring inner radius = size + gap
pub const RING_WIDTH: f32 = 0.1;
pub const RING_OPACITY: f32 = 0.4;
pub const LABEL_LIFT: f32 = 1.5; // label sits this far above the planet surface

// Corridor geometry
pub const PATH_LENGTH: f32 = 50.0;
pub const PATH_WIDTH: f32 = 5.0;
pub const WALL_HEIGHT: f32 = 3.0;
pub const DOOR_WIDTH: f32 = 1.5;
pub const DOOR_HEIGHT: f32 = 2.2;
pub const DOOR_THICKNESS: f32 = 0.1;
pub const FRAME_MARGIN: f32 = 0.2;
pub const HANDLE_RADIUS: f32 = 0.08;
