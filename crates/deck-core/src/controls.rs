//! Free camera controls used while the interaction machine is in the overview.
//!
//! Both controllers only ever touch a `&mut CameraPose` handed to them, which
//! the machine lends out exclusively in overview mode.

use crate::camera::CameraPose;
use crate::constants::*;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const MIN_POLAR: f32 = 1e-4;
const SETTLE_EPS: f32 = 1e-6;

/// Damped orbit around the pose target: drag to rotate, wheel to dolly.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending (azimuth, polar) rotation in radians, drained by `update`.
    pending: Vec2,
    scale: f32,
    dragging: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            pending: Vec2::ZERO,
            scale: 1.0,
            dragging: false,
        }
    }
}

impl OrbitControls {
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels. A full
    /// viewport height of travel turns the camera by `TAU * rotate_speed`.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.dragging || viewport_height <= 0.0 {
            return;
        }
        let k = TAU * self.rotate_speed / viewport_height;
        self.pending.x -= dx * k;
        self.pending.y -= dy * k;
    }

    /// Wheel dolly. Positive `delta_y` (scroll down) moves away.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        }
    }

    /// Drop the drag and any queued rotation or dolly.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.pending = Vec2::ZERO;
        self.scale = 1.0;
    }

    pub fn is_settled(&self) -> bool {
        self.pending.length_squared() < SETTLE_EPS * SETTLE_EPS && self.scale == 1.0
    }

    /// Apply one damped step to `pose`. Returns whether the pose moved.
    pub fn update(&mut self, pose: &mut CameraPose) -> bool {
        if self.is_settled() {
            self.pending = Vec2::ZERO;
            return false;
        }
        let offset = pose.position - pose.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

        azimuth += self.pending.x * self.damping;
        polar = (polar + self.pending.y * self.damping).clamp(MIN_POLAR, PI - MIN_POLAR);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.pending *= 1.0 - self.damping;
        self.scale = 1.0;

        let (sp, cp) = polar.sin_cos();
        let (sa, ca) = azimuth.sin_cos();
        let next = pose.target + Vec3::new(sp * sa, cp, sp * ca) * radius;
        let moved = next.distance_squared(pose.position) > 0.0;
        pose.position = next;
        moved
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// Map a `KeyboardEvent.code` to a walk direction.
#[inline]
pub fn key_code_to_move(code: &str) -> Option<MoveKey> {
    match code {
        "KeyW" | "ArrowUp" => Some(MoveKey::Forward),
        "KeyS" | "ArrowDown" => Some(MoveKey::Backward),
        "KeyA" | "ArrowLeft" => Some(MoveKey::Left),
        "KeyD" | "ArrowRight" => Some(MoveKey::Right),
        _ => None,
    }
}

/// First-person walking at fixed eye height with mouse look. Inert unless
/// the pointer is locked.
#[derive(Clone, Debug)]
pub struct WalkControls {
    pub speed: f32,
    pub sensitivity: f32,
    yaw: f32,
    pitch: f32,
    held: [bool; 4],
    locked: bool,
}

impl WalkControls {
    /// Start looking the way `pose` looks.
    pub fn new(pose: &CameraPose) -> Self {
        let mut controls = Self {
            speed: WALK_SPEED,
            sensitivity: LOOK_SENSITIVITY,
            yaw: 0.0,
            pitch: 0.0,
            held: [false; 4],
            locked: false,
        };
        controls.sync_from(pose);
        controls
    }

    /// Re-derive yaw/pitch from `pose`, e.g. after the machine hands the
    /// camera back from a transition.
    pub fn sync_from(&mut self, pose: &CameraPose) {
        let f = pose.forward();
        self.yaw = (-f.x).atan2(-f.z);
        self.pitch = f.y.clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Losing the lock also releases every held key.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        if !locked {
            self.held = [false; 4];
        }
    }

    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        self.held[key as usize] = pressed;
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held[key as usize]
    }

    /// Mouse-look by raw movement deltas in pixels.
    pub fn look(&mut self, dx: f32, dy: f32) {
        if !self.locked {
            return;
        }
        self.yaw = (self.yaw - dx * self.sensitivity).rem_euclid(TAU);
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Unit view direction for the current yaw/pitch.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Walk for `dt_sec` and point the camera along the look direction.
    /// Movement stays in the ground plane regardless of pitch.
    pub fn update(&mut self, pose: &mut CameraPose, dt_sec: f32) {
        if !self.locked {
            return;
        }
        let axis = |pos: MoveKey, neg: MoveKey| {
            (self.is_held(pos) as i32 - self.is_held(neg) as i32) as f32
        };
        let input = Vec2::new(
            axis(MoveKey::Right, MoveKey::Left),
            axis(MoveKey::Forward, MoveKey::Backward),
        )
        .normalize_or_zero();

        let (sy, cy) = self.yaw.sin_cos();
        let ahead = Vec3::new(-sy, 0.0, -cy);
        let right = Vec3::new(cy, 0.0, -sy);
        let step = (right * input.x + ahead * input.y) * self.speed * dt_sec.max(0.0);

        pose.position += step;
        pose.position.y = WALK_EYE_HEIGHT;
        pose.target = pose.position + self.forward();
    }
}
