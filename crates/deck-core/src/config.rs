use crate::camera::CameraPose;
use crate::constants::*;
use crate::content::{ContentTable, CORRIDOR_DECK, SPACE_DECK};
use crate::scene::{build_corridor_scene, build_space_scene, SceneLayout};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::time::Duration;

/// Where the camera goes when leaving a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReturnPolicy {
    /// Always ease back to the configured overview pose.
    Overview,
    /// Ease back to wherever the camera was when the object was clicked.
    Origin,
}

/// Timing and framing parameters for the interaction state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
    pub transition_in: Duration,
    pub transition_out: Duration,
    pub standoff_factor: f32,
    pub overview_pose: CameraPose,
    pub return_policy: ReturnPolicy,
    /// Per-frame body rotation (x, y) in radians.
    pub body_spin: Vec2,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            transition_in: Duration::from_millis(TRANSITION_IN_MS),
            transition_out: Duration::from_millis(TRANSITION_OUT_MS),
            standoff_factor: STANDOFF_FACTOR,
            overview_pose: CameraPose::new(OVERVIEW_EYE, OVERVIEW_TARGET),
            return_policy: ReturnPolicy::Overview,
            body_spin: Vec2::new(BODY_SPIN_X, BODY_SPIN_Y),
        }
    }
}

impl DeckConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Space => Self::default(),
            Variant::Corridor => Self {
                overview_pose: corridor_start_pose(),
                return_policy: ReturnPolicy::Origin,
                body_spin: Vec2::ZERO,
                ..Self::default()
            },
        }
    }
}

/// Eye-height pose at the near end of the corridor, looking down it.
pub fn corridor_start_pose() -> CameraPose {
    let eye = Vec3::new(0.0, WALK_EYE_HEIGHT, WALK_START_Z);
    CameraPose::new(eye, eye + Vec3::NEG_Z)
}

/// Where the picking ray is cast from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOrigin {
    Pointer,
    /// Screen centre (crosshair), used while the pointer is locked.
    ScreenCenter,
}

/// The two presentation flavours sharing one interaction model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Space,
    Corridor,
}

impl Variant {
    /// Parse the `deck` parameter from a URL query string such as
    /// `?deck=corridor`. Unknown or missing values fall back to the space deck.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == "deck")
            .map(|(_, v)| match v.to_ascii_lowercase().as_str() {
                "corridor" | "doors" | "path" => Variant::Corridor,
                _ => Variant::Space,
            })
            .unwrap_or_default()
    }

    pub fn content(self) -> &'static ContentTable {
        match self {
            Variant::Space => &SPACE_DECK,
            Variant::Corridor => &CORRIDOR_DECK,
        }
    }

    pub fn build_scene<R: Rng + ?Sized>(self, rng: &mut R) -> SceneLayout {
        match self {
            Variant::Space => build_space_scene(rng),
            Variant::Corridor => build_corridor_scene(),
        }
    }

    pub fn pick_origin(self) -> PickOrigin {
        match self {
            Variant::Space => PickOrigin::Pointer,
            Variant::Corridor => PickOrigin::ScreenCenter,
        }
    }

    pub fn back_label(self) -> &'static str {
        match self {
            Variant::Space => "Back to Space",
            Variant::Corridor => "Back to the Path",
        }
    }
}
