//! # Pyramid Generation
//!
//! An apex over a regular polygonal base. The side faces fan from the apex to
//! a ring of base vertices; the base cap is a second, independent fan so its
//! downward normals are never shared with a side face.

use super::error::{ensure_addressable, ensure_at_least, ensure_positive, Result};
use super::mesh::{Mesh, MeshBuilder, Topology};
use super::{ring_with_seam, DEFAULT_PYRAMID_SLICES, MIN_SLICES};
use crate::gfx::rendering::Drawable;

/// A pyramid whose base polygon is inscribed in a circle of radius `base_size`.
///
/// Stacking several of these with shrinking sizes gives a conifer crown:
///
/// ```
/// use geoprim::prelude::*;
///
/// let layers = (0..3)
///     .map(|i| Pyramid::new(0.4 * (3.0 - i as f32 * 0.7), 1.5, 7))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert!(layers.iter().all(|layer| layer.mesh().triangle_count() == 14));
/// # Ok::<(), GeometryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pyramid {
    base_size: f32,
    height: f32,
    slices: u32,
    mesh: Mesh,
}

impl Pyramid {
    /// Create a pyramid with a `slices`-sided base.
    pub fn new(base_size: f32, height: f32, slices: u32) -> Result<Self> {
        let base_size = ensure_positive("base_size", base_size)?;
        let height = ensure_positive("height", height)?;
        let slices = ensure_at_least("slices", slices, MIN_SLICES)?;
        ensure_addressable(2 * u64::from(slices) + 4)?;

        Ok(Self {
            base_size,
            height,
            slices,
            mesh: generate_pyramid(base_size, height, slices),
        })
    }

    /// Create a square-based pyramid.
    pub fn with_default_slices(base_size: f32, height: f32) -> Result<Self> {
        Self::new(base_size, height, DEFAULT_PYRAMID_SLICES)
    }

    pub fn base_size(&self) -> f32 {
        self.base_size
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

impl Drawable for Pyramid {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// Push `slices + 1` base vertices (seam included) and return the first index.
fn add_base_ring(builder: &mut MeshBuilder, size: f32, slices: u32) -> u32 {
    let first = builder.next_index();
    for point in ring_with_seam(slices) {
        builder.add_vertex(
            [size * point.cos, 0.0, size * point.sin],
            [0.0, -1.0, 0.0],
            [0.5 + 0.5 * point.cos, 0.5 + 0.5 * point.sin],
        );
    }
    first
}

fn generate_pyramid(size: f32, height: f32, slices: u32) -> Mesh {
    let ring = (slices + 1) as usize;
    let mut builder = MeshBuilder::with_capacity(2 + 2 * ring, 6 * slices as usize);

    // Sides
    let apex = builder.add_vertex([0.0, height, 0.0], [0.0, 1.0, 0.0], [0.5, 0.0]);
    let side_ring = add_base_ring(&mut builder, size, slices);
    for k in 0..slices {
        builder.add_triangle(apex, side_ring + k + 1, side_ring + k);
    }

    // Base cap, wound the other way round so it faces down
    let center = builder.add_vertex([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]);
    let cap_ring = add_base_ring(&mut builder, size, slices);
    for k in 0..slices {
        builder.add_triangle(center, cap_ring + k, cap_ring + k + 1);
    }

    let mesh = builder.build(Topology::TriangleList);
    log::debug!(
        "Generated pyramid: size {}, height {}, {} slices, {} vertices, {} triangles",
        size,
        height,
        slices,
        mesh.vertex_count(),
        mesh.index_count() / 3
    );
    mesh
}
