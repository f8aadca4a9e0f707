//! CPU-side mesh generation for the instanced scene pipeline.
//!
//! Meshes are unit-sized (sphere radius 1, cube half-extent 1) and scaled per
//! instance; annuli are built with their final radii since the inner/outer
//! ratio differs per ring.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere of radius 1 centred on the origin.
pub fn uv_sphere(segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut mesh = MeshData::default();
    for r in 0..=rings {
        let polar = PI * r as f32 / rings as f32;
        let (sp, cp) = polar.sin_cos();
        for s in 0..=segments {
            let azimuth = TAU * s as f32 / segments as f32;
            let (sa, ca) = azimuth.sin_cos();
            let p = [sp * ca, cp, sp * sa];
            mesh.vertices.push(Vertex {
                position: p,
                normal: p,
            });
        }
    }
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = (r * stride + s) as u16;
            let b = ((r + 1) * stride + s) as u16;
            if r != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if r != rings - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }
    mesh
}

/// Axis-aligned cube spanning [-1, 1] on every axis, with flat face normals.
pub fn cube() -> MeshData {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let base = mesh.vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [
                n[0] + u[0] * su + v[0] * sv,
                n[1] + u[1] * su + v[1] * sv,
                n[2] + u[2] * su + v[2] * sv,
            ];
            mesh.vertices.push(Vertex {
                position,
                normal: n,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Flat ring in the XY plane facing +Z.
pub fn annulus(inner_radius: f32, outer_radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    for s in 0..=segments {
        let a = TAU * s as f32 / segments as f32;
        let (sa, ca) = a.sin_cos();
        for r in [inner_radius, outer_radius] {
            mesh.vertices.push(Vertex {
                position: [ca * r, sa * r, 0.0],
                normal: [0.0, 0.0, 1.0],
            });
        }
    }
    for s in 0..segments {
        let i = (s * 2) as u16;
        mesh.indices
            .extend_from_slice(&[i, i + 1, i + 3, i, i + 3, i + 2]);
    }
    mesh
}
