//! # Sphere Generation
//!
//! A unit UV sphere centred at the origin. Rows run from the north pole
//! (`+Y`) to the south pole, each row a ring of `slices + 1` vertices with the
//! last one duplicating the first across the texture seam.
//!
//! Pole rows are not collapsed: each pole is `slices + 1` coincident vertices
//! with distinct texture coordinates, so the top and bottom cells are ordinary
//! quads rather than a fan.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use super::error::{ensure_addressable, ensure_at_least, Result};
use super::mesh::{Mesh, MeshBuilder, Topology};
use super::{ring_with_seam, DEFAULT_SPHERE_SLICES, DEFAULT_SPHERE_STACKS, MIN_SLICES, MIN_STACKS};
use crate::gfx::rendering::Drawable;

/// A unit sphere with `slices` meridians and `stacks` parallels.
///
/// Normals are unit length. Callers that scale the mesh non-uniformly (an
/// ellipsoid helicopter body, say) must renormalize normals themselves.
#[derive(Debug, Clone)]
pub struct Sphere {
    slices: u32,
    stacks: u32,
    mesh: Mesh,
}

impl Sphere {
    pub fn new(slices: u32, stacks: u32) -> Result<Self> {
        let slices = ensure_at_least("slices", slices, MIN_SLICES)?;
        let stacks = ensure_at_least("stacks", stacks, MIN_STACKS)?;
        ensure_addressable((u64::from(stacks) + 1) * (u64::from(slices) + 1))?;

        Ok(Self::generated(slices, stacks))
    }

    /// Build from parameters that already passed validation.
    fn generated(slices: u32, stacks: u32) -> Self {
        Self {
            slices,
            stacks,
            mesh: generate_sphere(slices, stacks),
        }
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::generated(DEFAULT_SPHERE_SLICES, DEFAULT_SPHERE_STACKS)
    }
}

impl Drawable for Sphere {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

fn generate_sphere(slices: u32, stacks: u32) -> Mesh {
    let row = slices + 1;
    let mut builder = MeshBuilder::with_capacity(
        (stacks as usize + 1) * row as usize,
        6 * stacks as usize * slices as usize,
    );

    for i in 0..=stacks {
        let alpha = i as f32 * PI / stacks as f32;
        let (sin_alpha, cos_alpha) = alpha.sin_cos();
        let v = i as f32 / stacks as f32;

        for point in ring_with_seam(slices) {
            let position = [sin_alpha * point.cos, cos_alpha, sin_alpha * point.sin];
            // Equal to the position on a unit sphere; normalized to absorb rounding
            let normal: [f32; 3] = Vector3::from(position).normalize().into();
            let u = 1.0 - point.step as f32 / slices as f32;
            builder.add_vertex(position, normal, [u, v]);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let first = i * row + j;
            let second = first + row;

            builder.add_triangle(first, second, first + 1);
            builder.add_triangle(second, second + 1, first + 1);
        }
    }

    let mesh = builder.build(Topology::TriangleList);
    log::debug!(
        "Generated sphere: {} slices x {} stacks, {} vertices, {} triangles",
        slices,
        stacks,
        mesh.vertex_count(),
        mesh.index_count() / 3
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::test_support::{assert_close, length};
    use crate::gfx::geometry::GeometryError;

    #[test]
    fn test_small_sphere() {
        let sphere = Sphere::new(4, 2).unwrap();
        let mesh = sphere.mesh();

        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.index_count(), 6 * 2 * 4);
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.positions()[0..5].iter().all(|p| *p == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_counts() {
        for slices in [3, 5, 16, 40] {
            for stacks in [1, 2, 8, 40] {
                let mesh = Sphere::new(slices, stacks).unwrap().into_mesh();
                assert_eq!(
                    mesh.vertex_count(),
                    ((stacks + 1) * (slices + 1)) as usize
                );
                assert_eq!(mesh.index_count(), (6 * stacks * slices) as usize);
                assert!(mesh.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_unit_radius_and_normals() {
        let mesh = Sphere::new(12, 7).unwrap().into_mesh();
        for (position, normal) in mesh.positions().iter().zip(mesh.normals()) {
            assert_close(length(*position), 1.0);
            assert_close(length(*normal), 1.0);
            for axis in 0..3 {
                assert_close(position[axis], normal[axis]);
            }
        }
    }

    #[test]
    fn test_poles_not_collapsed() {
        let slices = 6;
        let stacks = 3;
        let mesh = Sphere::new(slices, stacks).unwrap().into_mesh();
        let row = (slices + 1) as usize;
        let south = &mesh.positions()[stacks as usize * row..];

        assert_eq!(south.len(), row);
        for p in south {
            assert_close(p[1], -1.0);
            assert_close(p[0], 0.0);
            assert_close(p[2], 0.0);
        }

        let north_uv = &mesh.tex_coords()[..row];
        assert_eq!(north_uv[0], [1.0, 0.0]);
        assert_eq!(north_uv[row - 1], [0.0, 0.0]);
        assert_eq!(mesh.tex_coords()[mesh.vertex_count() - 1], [0.0, 1.0]);
    }

    #[test]
    fn test_seam_column() {
        let slices = 8;
        let mesh = Sphere::new(slices, 4).unwrap().into_mesh();
        let row = (slices + 1) as usize;

        for i in 0..=4 {
            let first = i * row;
            let seam = first + slices as usize;
            assert_eq!(mesh.positions()[first], mesh.positions()[seam]);
            assert_eq!(mesh.tex_coords()[first][0], 1.0);
            assert_eq!(mesh.tex_coords()[seam][0], 0.0);
        }
    }

    #[test]
    fn test_cell_indices() {
        let mesh = Sphere::new(3, 1).unwrap().into_mesh();
        // One stack: top-left, bottom-left, top-right then bottom-left, bottom-right, top-right
        assert_eq!(&mesh.indices()[..6], &[0, 4, 1, 4, 5, 1]);
        assert_eq!(&mesh.indices()[12..], &[2, 6, 3, 6, 7, 3]);
    }

    #[test]
    fn test_default_resolution() {
        let sphere = Sphere::default();
        assert_eq!(sphere.slices(), 16);
        assert_eq!(sphere.stacks(), 8);
        assert_eq!(sphere.mesh(), Sphere::new(16, 8).unwrap().mesh());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            Sphere::new(2, 8).unwrap_err(),
            GeometryError::TooFewSubdivisions {
                parameter: "slices",
                minimum: 3,
                actual: 2
            }
        );
        assert_eq!(
            Sphere::new(16, 0).unwrap_err(),
            GeometryError::TooFewSubdivisions {
                parameter: "stacks",
                minimum: 1,
                actual: 0
            }
        );
    }
}
