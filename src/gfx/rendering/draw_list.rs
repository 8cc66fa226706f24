//! # Draw List
//!
//! A headless [`DrawTarget`] that records what a renderer would be asked to
//! draw. Useful for inspecting a composed scene without a GPU.

use super::draw::DrawTarget;
use crate::gfx::geometry::{Mesh, Topology};

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: Topology,
    pub vertex_count: usize,
    pub index_count: usize,
}

impl DrawCall {
    /// Number of primitives the GPU assembles from the index buffer, strip
    /// joins included.
    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.index_count / 3,
            Topology::TriangleStrip => self.index_count.saturating_sub(2),
            Topology::LineList => self.index_count / 2,
        }
    }
}

/// Records draw calls in submission order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn total_vertices(&self) -> usize {
        self.calls.iter().map(|call| call.vertex_count).sum()
    }

    pub fn total_indices(&self) -> usize {
        self.calls.iter().map(|call| call.index_count).sum()
    }

    pub fn total_primitives(&self) -> usize {
        self.calls.iter().map(DrawCall::primitive_count).sum()
    }
}

impl DrawTarget for DrawList {
    fn draw_mesh(&mut self, mesh: &Mesh, topology: Topology) {
        self.calls.push(DrawCall {
            topology,
            vertex_count: mesh.vertex_count(),
            index_count: mesh.index_count(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{Plane, Pyramid, Sphere};
    use crate::gfx::rendering::Drawable;

    #[test]
    fn test_records_calls_in_order() {
        let mut list = DrawList::new();
        assert!(list.is_empty());

        Sphere::new(4, 2).unwrap().display(&mut list);
        Plane::new(2).unwrap().display(&mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.calls()[0],
            DrawCall {
                topology: Topology::TriangleList,
                vertex_count: 15,
                index_count: 48
            }
        );
        assert_eq!(list.calls()[1].topology, Topology::TriangleStrip);
        assert_eq!(list.total_vertices(), 15 + 9);
        assert_eq!(list.total_indices(), 48 + 14);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_primitive_counts() {
        let mut list = DrawList::new();
        let mut plane = Plane::new(2).unwrap();
        plane.display(&mut list);
        plane.set_line_mode();
        plane.display(&mut list);
        Pyramid::new(1.0, 1.0, 5).unwrap().display(&mut list);

        let counts: Vec<_> = list.calls().iter().map(DrawCall::primitive_count).collect();
        // 14 strip indices: 12 windows, 4 of them row joins
        assert_eq!(counts, vec![12, 7, 10]);
        assert_eq!(list.total_primitives(), 29);
    }
}
