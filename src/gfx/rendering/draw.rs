//! # Drawing Capability
//!
//! Generated shapes never talk to the GPU. They expose their mesh and the
//! topology to draw it with, and hand both to whatever [`DrawTarget`] the
//! renderer provides.

use crate::gfx::geometry::{Mesh, Topology};

/// Something that can issue a draw call for a mesh.
///
/// Implemented by rendering collaborators, which own buffer upload, material
/// binding and the model transform.
pub trait DrawTarget {
    fn draw_mesh(&mut self, mesh: &Mesh, topology: Topology);
}

/// A shape that produces a mesh and can display itself.
pub trait Drawable {
    /// The generated geometry.
    fn mesh(&self) -> &Mesh;

    /// Topology to draw with. Defaults to the mesh's own topology.
    fn topology(&self) -> Topology {
        self.mesh().topology()
    }

    /// Issue a draw call for this shape on `target`.
    fn display(&self, target: &mut dyn DrawTarget) {
        let mesh = self.mesh();
        let topology = self.topology();
        log::trace!(
            "Drawing {} vertices, {} indices as {:?}",
            mesh.vertex_count(),
            mesh.index_count(),
            topology
        );
        target.draw_mesh(mesh, topology);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{Cone, Plane};

    #[derive(Default)]
    struct CountingTarget {
        draws: Vec<(usize, Topology)>,
    }

    impl DrawTarget for CountingTarget {
        fn draw_mesh(&mut self, mesh: &Mesh, topology: Topology) {
            self.draws.push((mesh.index_count(), topology));
        }
    }

    #[test]
    fn test_display_forwards_mesh_and_topology() {
        let cone = Cone::new(1.0, 1.0, 6).unwrap();
        let mut plane = Plane::new(1).unwrap();
        let mut target = CountingTarget::default();

        cone.display(&mut target);
        plane.display(&mut target);
        plane.set_line_mode();
        plane.display(&mut target);

        assert_eq!(
            target.draws,
            vec![
                (36, Topology::TriangleList),
                (4, Topology::TriangleStrip),
                (4, Topology::LineList),
            ]
        );
    }

    #[test]
    fn test_drawables_as_trait_objects() {
        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Plane::default()),
            Box::new(Cone::new(0.5, 1.0, 10).unwrap()),
        ];
        let mut target = CountingTarget::default();
        for shape in &shapes {
            shape.display(&mut target);
        }
        assert_eq!(target.draws.len(), 2);
    }
}
