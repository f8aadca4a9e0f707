//! Scene builders for the two presentation variants.
//!
//! Each builder produces a [`SceneLayout`]: the focusable objects the
//! interaction logic works with, plus everything the renderer needs to draw
//! around them. Positions and sizes are fixed data; only decorations (ring
//! orientation, starfield, bump noise seeds) draw from the supplied RNG.

use crate::camera::CameraPose;
use crate::config::corridor_start_pose;
use crate::constants::*;
use crate::content::ContentTable;
use crate::error::DeckError;
use crate::picking::PickShape;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

pub type Rgb = [f32; 3];

/// Convert a 0xRRGGBB literal to linear-ish float RGB.
pub fn hex(rgb: u32) -> Rgb {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

/// A topic-bearing entity the user can select.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusableObject {
    pub index: usize,
    pub name: &'static str,
    pub position: Vec3,
    /// Nominal radius; scales the camera standoff distance.
    pub size: f32,
    pub shape: PickShape,
    /// Direction the camera backs away along when focusing. `None` means the
    /// outward normal from the scene origin.
    pub standoff_axis: Option<Vec3>,
}

impl FocusableObject {
    pub fn standoff_direction(&self) -> Vec3 {
        self.standoff_axis
            .and_then(|a| a.try_normalize())
            .or_else(|| self.position.try_normalize())
            .unwrap_or(Vec3::Z)
    }

    /// Camera pose that frames this object at `factor * size` distance.
    pub fn focus_pose(&self, factor: f32) -> CameraPose {
        let offset = self.standoff_direction() * (self.size * factor);
        CameraPose::new(self.position + offset, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Phong { shininess: f32 },
    /// Rough surface with procedural bump noise seeded per body.
    Bumpy {
        roughness: f32,
        metalness: f32,
        bump_scale: f32,
        seed: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyVisual {
    pub color: Rgb,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropMesh {
    Cube,
    Sphere,
}

/// Static, non-pickable scenery (walls, floor, door frames, handles).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prop {
    pub mesh: PropMesh,
    pub center: Vec3,
    /// Half extents for cubes, radii for spheres.
    pub scale: Vec3,
    pub color: Rgb,
    pub metalness: f32,
}

/// Thin translucent ring drawn around a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub center: Vec3,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub rotation: Quat,
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Starfield {
    pub points: Vec<Vec3>,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// Numbered badge floating above a planet.
    Badge,
    /// Title plate above a door.
    Plate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Vec3,
    pub style: LabelStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Light position; it shines toward the origin.
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: Rgb,
    pub ambient_intensity: f32,
    pub point: Option<PointLight>,
    pub directional: DirectionalLight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fog {
    Exp2 { color: Rgb, density: f32 },
    Linear { color: Rgb, near: f32, far: f32 },
}

#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub objects: Vec<FocusableObject>,
    /// Parallel to `objects`.
    pub visuals: Vec<BodyVisual>,
    pub props: Vec<Prop>,
    pub rings: Vec<Ring>,
    pub starfield: Starfield,
    pub labels: Vec<Label>,
    pub lighting: Lighting,
    pub fog: Fog,
    pub clear_color: Rgb,
    pub start_pose: CameraPose,
    pub zfar: f32,
}

struct PlanetSpec {
    position: Vec3,
    size: f32,
    color: u32,
    name: &'static str,
}

const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        position: Vec3::new(-15.0, 5.0, -5.0),
        size: 2.5,
        color: 0x3498db,
        name: "Background",
    },
    PlanetSpec {
        position: Vec3::new(0.0, 0.0, -12.0),
        size: 3.0,
        color: 0x2ecc71,
        name: "Motivation",
    },
    PlanetSpec {
        position: Vec3::new(12.0, -3.0, -8.0),
        size: 2.0,
        color: 0xf6dba6,
        name: "Bootcamp Experience",
    },
    PlanetSpec {
        position: Vec3::new(-8.0, -7.0, 2.0),
        size: 2.8,
        color: 0xf39c12,
        name: "Education at Hive",
    },
    PlanetSpec {
        position: Vec3::new(10.0, 8.0, 7.0),
        size: 2.2,
        color: 0x65cade,
        name: "Job Search",
    },
    PlanetSpec {
        position: Vec3::new(-5.0, 12.0, 0.0),
        size: 2.4,
        color: 0xb75516,
        name: "Engineering Practices",
    },
    PlanetSpec {
        position: Vec3::new(6.0, -9.0, -10.0),
        size: 3.2,
        color: 0xd35400,
        name: "Advice",
    },
    PlanetSpec {
        position: Vec3::new(-18.0, -4.0, 8.0),
        size: 2.6,
        color: 0x8e44ad,
        name: "Conclusions",
    },
];

/// Planets in a starfield, one per slide.
pub fn build_space_scene<R: Rng + ?Sized>(rng: &mut R) -> SceneLayout {
    let mut objects = Vec::with_capacity(PLANETS.len());
    let mut visuals = Vec::with_capacity(PLANETS.len());
    let mut rings = Vec::with_capacity(PLANETS.len());
    let mut labels = Vec::with_capacity(PLANETS.len());

    for (index, p) in PLANETS.iter().enumerate() {
        objects.push(FocusableObject {
            index,
            name: p.name,
            position: p.position,
            size: p.size,
            shape: PickShape::Sphere { radius: p.size },
            standoff_axis: None,
        });

        let material = if index % 2 == 0 {
            Material::Phong { shininess: 30.0 }
        } else {
            Material::Bumpy {
                roughness: 0.7,
                metalness: 0.3,
                bump_scale: 0.1,
                seed: rng.gen(),
            }
        };
        visuals.push(BodyVisual {
            color: hex(p.color),
            material,
        });

        let inner = p.size + RING_GAP;
        rings.push(Ring {
            center: p.position,
            inner_radius: inner,
            outer_radius: inner + RING_WIDTH,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
                0.0,
            ),
            color: hex(p.color),
            opacity: RING_OPACITY,
        });

        labels.push(Label {
            text: (index + 1).to_string(),
            anchor: p.position + Vec3::new(0.0, p.size + LABEL_LIFT, 0.0),
            style: LabelStyle::Badge,
        });
    }

    let half = STAR_SPREAD * 0.5;
    let points = (0..STAR_COUNT)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect();

    SceneLayout {
        objects,
        visuals,
        props: Vec::new(),
        rings,
        starfield: Starfield {
            points,
            size: STAR_SIZE,
        },
        labels,
        lighting: Lighting {
            ambient: hex(0x404040),
            ambient_intensity: 1.0,
            point: Some(PointLight {
                position: Vec3::ZERO,
                color: hex(0xffffff),
                intensity: 1.5,
                range: 100.0,
            }),
            directional: DirectionalLight {
                position: Vec3::new(5.0, 3.0, 5.0),
                color: hex(0xffffff),
                intensity: 0.5,
            },
        },
        fog: Fog::Exp2 {
            color: hex(0x000000),
            density: 0.00025,
        },
        clear_color: hex(0x000000),
        start_pose: CameraPose::new(OVERVIEW_EYE, OVERVIEW_TARGET),
        zfar: SPACE_CAMERA_ZFAR,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

const DOORS: [(Side, f32, &str); 8] = [
    (Side::Left, 0.0, "Introduction"),
    (Side::Right, 0.0, "Background"),
    (Side::Left, -5.0, "Problem Statement"),
    (Side::Right, -5.0, "Methodology"),
    (Side::Left, -10.0, "Results"),
    (Side::Right, -10.0, "Discussion"),
    (Side::Left, -15.0, "Conclusion"),
    (Side::Right, -15.0, "Future Work"),
];

/// First-person corridor with titled doors along both walls.
pub fn build_corridor_scene() -> SceneLayout {
    let path_center_z = -PATH_LENGTH / 2.0 + WALK_START_Z;
    let half_width = PATH_WIDTH / 2.0;
    let skin = 0.01;

    let mut props = vec![
        // floor
        Prop {
            mesh: PropMesh::Cube,
            center: Vec3::new(0.0, -skin, path_center_z),
            scale: Vec3::new(half_width, skin, PATH_LENGTH / 2.0),
            color: hex(0x808080),
            metalness: 0.0,
        },
    ];
    for sign in [-1.0_f32, 1.0] {
        props.push(Prop {
            mesh: PropMesh::Cube,
            center: Vec3::new(sign * (half_width + skin), WALL_HEIGHT / 2.0, path_center_z),
            scale: Vec3::new(skin, WALL_HEIGHT / 2.0, PATH_LENGTH / 2.0),
            color: hex(0xa9a9a9),
            metalness: 0.0,
        });
    }

    let mut objects = Vec::with_capacity(DOORS.len());
    let mut visuals = Vec::with_capacity(DOORS.len());
    let mut labels = Vec::with_capacity(DOORS.len());
    let half_t = DOOR_THICKNESS / 2.0;

    for (index, (side, z, title)) in DOORS.iter().enumerate() {
        // wall side: -1 for left, +1 for right; the door faces the opposite way
        let wall = if *side == Side::Left { -1.0 } else { 1.0 };
        let inward = Vec3::new(-wall, 0.0, 0.0);
        let frame_x = wall * (half_width + half_t);
        let door_x = wall * (half_width - half_t * 2.0);
        let y = DOOR_HEIGHT / 2.0;

        props.push(Prop {
            mesh: PropMesh::Cube,
            center: Vec3::new(frame_x, y, *z),
            scale: Vec3::new(
                FRAME_MARGIN / 2.0,
                (DOOR_HEIGHT + FRAME_MARGIN) / 2.0,
                (DOOR_WIDTH + FRAME_MARGIN) / 2.0,
            ),
            color: hex(0x8b4513),
            metalness: 0.0,
        });

        let door_center = Vec3::new(door_x, y, *z);
        let handle_z = if *side == Side::Left {
            DOOR_WIDTH / 3.0
        } else {
            -DOOR_WIDTH / 3.0
        };
        props.push(Prop {
            mesh: PropMesh::Sphere,
            center: door_center + inward * (half_t + HANDLE_RADIUS * 0.5) + Vec3::Z * handle_z,
            scale: Vec3::splat(HANDLE_RADIUS),
            color: hex(0xd4af37),
            metalness: 0.7,
        });

        objects.push(FocusableObject {
            index,
            name: *title,
            position: door_center,
            size: DOOR_WIDTH / 2.0,
            shape: PickShape::Box {
                half_extents: Vec3::new(half_t, DOOR_HEIGHT / 2.0, DOOR_WIDTH / 2.0),
            },
            standoff_axis: Some(inward),
        });
        visuals.push(BodyVisual {
            color: hex(0x8b0000),
            material: Material::Phong { shininess: 20.0 },
        });
        labels.push(Label {
            text: (*title).to_string(),
            anchor: door_center + inward * 0.1 + Vec3::Y * (DOOR_HEIGHT / 2.0 + 0.3),
            style: LabelStyle::Plate,
        });
    }

    SceneLayout {
        objects,
        visuals,
        props,
        rings: Vec::new(),
        starfield: Starfield::default(),
        labels,
        lighting: Lighting {
            ambient: hex(0xffffff),
            ambient_intensity: 0.5,
            point: None,
            directional: DirectionalLight {
                position: Vec3::new(5.0, 5.0, 5.0),
                color: hex(0xffffff),
                intensity: 0.8,
            },
        },
        fog: Fog::Linear {
            color: hex(0x87ceeb),
            near: 15.0,
            far: 50.0,
        },
        clear_color: hex(0x87ceeb),
        start_pose: corridor_start_pose(),
        zfar: CORRIDOR_CAMERA_ZFAR,
    }
}

/// Check that the scene's focusable objects line up one-to-one with the
/// content table. A mismatch would show the wrong slide or index past the end.
pub fn validate(layout: &SceneLayout, table: &ContentTable) -> Result<(), DeckError> {
    if layout.objects.is_empty() {
        return Err(DeckError::EmptyScene);
    }
    if layout.objects.len() != table.len() {
        return Err(DeckError::ContentMismatch {
            objects: layout.objects.len(),
            slides: table.len(),
        });
    }
    for (position, o) in layout.objects.iter().enumerate() {
        if o.index != position {
            return Err(DeckError::IndexMismatch {
                position,
                index: o.index,
            });
        }
    }
    Ok(())
}
