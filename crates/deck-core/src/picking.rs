use crate::scene::FocusableObject;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// `dir` is expected to be normalized so hit distances are in world units.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Pickable volume of a focusable object, centred on its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// A ray hit against one focusable object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab test against an axis-aligned box. Returns the entry distance, or the
/// exit distance when the origin is inside the box.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Distance along `ray` to `object`, if the ray hits it.
pub fn intersect(ray: &Ray, object: &FocusableObject) -> Option<f32> {
    match object.shape {
        PickShape::Sphere { radius } => ray_sphere(ray.origin, ray.dir, object.position, radius),
        PickShape::Box { half_extents } => ray_aabb(
            ray.origin,
            ray.dir,
            object.position - half_extents,
            object.position + half_extents,
        ),
    }
}

/// All hits along `ray`, nearest first.
pub fn pick_all(ray: &Ray, objects: &[FocusableObject]) -> SmallVec<[Hit; 8]> {
    let mut hits: SmallVec<[Hit; 8]> = objects
        .iter()
        .filter_map(|o| {
            intersect(ray, o).map(|distance| Hit {
                index: o.index,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// The nearest object along `ray`, if any.
#[inline]
pub fn pick_nearest(ray: &Ray, objects: &[FocusableObject]) -> Option<Hit> {
    pick_all(ray, objects).first().copied()
}
