//! # Cone Generation
//!
//! A capped cone standing on the local XZ plane with its apex on +Y. The base
//! is a triangle fan around a centre vertex; the side is a ring of triangles
//! from the base circle to the apex.

use cgmath::{InnerSpace, Vector3};

use super::error::{ensure_addressable, ensure_at_least, ensure_positive, Result};
use super::mesh::{Mesh, MeshBuilder, Topology};
use super::{ring_with_seam, MIN_SLICES};
use crate::gfx::rendering::Drawable;

/// A cone with a circular base of `base_radius` and apex at `(0, height, 0)`.
#[derive(Debug, Clone)]
pub struct Cone {
    base_radius: f32,
    height: f32,
    slices: u32,
    mesh: Mesh,
}

impl Cone {
    /// Create a cone, rejecting non-positive dimensions and fewer than 3 slices.
    pub fn new(base_radius: f32, height: f32, slices: u32) -> Result<Self> {
        let base_radius = ensure_positive("base_radius", base_radius)?;
        let height = ensure_positive("height", height)?;
        let slices = ensure_at_least("slices", slices, MIN_SLICES)?;
        ensure_addressable(3 * u64::from(slices) + 4)?;

        Ok(Self {
            base_radius,
            height,
            slices,
            mesh: generate_cone(base_radius, height, slices),
        })
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl Drawable for Cone {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// Outward normal of the slanted side at angle `(cos, sin)`.
///
/// Same direction as `(r·cos, r/h, r·sin)` scaled by `h/r`, so the radius drops
/// out. In f64, `h²` stays finite for every finite `f32` height.
fn side_normal(height: f32, cos: f32, sin: f32) -> [f32; 3] {
    let h = f64::from(height);
    let n = Vector3::new(h * f64::from(cos), 1.0, h * f64::from(sin)).normalize();
    [n.x as f32, n.y as f32, n.z as f32]
}

fn generate_cone(radius: f32, height: f32, slices: u32) -> Mesh {
    let ring = (slices + 1) as usize;
    let mut builder = MeshBuilder::with_capacity(1 + 3 * ring, 6 * slices as usize);
    let down = [0.0, -1.0, 0.0];

    // Base: centre plus perimeter ring
    let center = builder.add_vertex([0.0, 0.0, 0.0], down, [0.5, 0.5]);
    let base_start = center + 1;
    for point in ring_with_seam(slices) {
        builder.add_vertex(
            [radius * point.cos, 0.0, radius * point.sin],
            down,
            [0.5 + 0.5 * point.cos, 0.5 + 0.5 * point.sin],
        );
    }
    for k in 0..slices {
        builder.add_triangle(center, base_start + k, base_start + k + 1);
    }

    // Side: a (base, apex) pair per step so each pair carries its own slanted normal
    let side_start = base_start + slices + 1;
    for point in ring_with_seam(slices) {
        let x = radius * point.cos;
        let z = radius * point.sin;
        let normal = side_normal(height, point.cos, point.sin);
        let u = point.step as f32 / slices as f32;

        builder.add_vertex([x, 0.0, z], normal, [u, 1.0]);
        builder.add_vertex([0.0, height, 0.0], normal, [u, 0.0]);
    }
    for k in 0..slices {
        let base = side_start + 2 * k;
        builder.add_triangle(base, base + 1, base + 2);
    }

    let mesh = builder.build(Topology::TriangleList);
    log::debug!(
        "Generated cone: radius {}, height {}, {} slices, {} vertices, {} triangles",
        radius,
        height,
        slices,
        mesh.vertex_count(),
        mesh.index_count() / 3
    );
    mesh
}
