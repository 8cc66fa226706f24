//! # Mesh Data
//!
//! The single output type of every generator: parallel per-vertex arrays plus an
//! index buffer and the topology that says how to read it.

use super::error::{GeometryError, Result};
use crate::gfx::rendering::vertex::Vertex;

/// How an index buffer groups vertices into drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every three indices form an independent triangle.
    TriangleList,
    /// Each sliding window of three indices forms a triangle. Repeated indices
    /// produce zero-area triangles used to join rows.
    TriangleStrip,
    /// Every two indices form an independent line segment.
    LineList,
}

impl Topology {
    /// The matching wgpu primitive topology.
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Topology::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }

    /// wgpu requires the index format up front for strip topologies.
    pub fn strip_index_format(self) -> Option<wgpu::IndexFormat> {
        match self {
            Topology::TriangleStrip => Some(wgpu::IndexFormat::Uint32),
            Topology::TriangleList | Topology::LineList => None,
        }
    }
}

/// Generated geometry, immutable once built.
///
/// Vertex `i` is described by `positions()[i]`, `normals()[i]` and
/// `tex_coords()[i]`. Every entry of `indices()` is a valid vertex index.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    topology: Topology,
}

impl Mesh {
    /// Vertex positions (x, y, z) in object space
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Per-vertex normals, same order as positions
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Per-vertex texture coordinates (u, v), same order as positions
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles the index buffer describes, not counting the
    /// zero-area joins of a strip.
    pub fn triangle_count(&self) -> usize {
        self.triangles().count()
    }

    /// Iterate the triangles of the mesh as index triples.
    ///
    /// Strip triangles are reordered on odd positions so that every yielded
    /// triangle shares the strip's winding. Strip joins (a repeated index) are
    /// skipped. A line list yields nothing.
    pub fn triangles(&self) -> Triangles<'_> {
        Triangles {
            indices: &self.indices,
            topology: self.topology,
            cursor: 0,
        }
    }

    /// Check every structural invariant of the mesh.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count {
            return Err(GeometryError::InvalidMesh(format!(
                "{} normals for {} positions",
                self.normals.len(),
                vertex_count
            )));
        }
        if self.tex_coords.len() != vertex_count {
            return Err(GeometryError::InvalidMesh(format!(
                "{} texture coordinates for {} positions",
                self.tex_coords.len(),
                vertex_count
            )));
        }
        if let Some(vertex) = (0..vertex_count).find(|&i| {
            self.positions[i].iter().any(|c| !c.is_finite())
                || self.normals[i].iter().any(|c| !c.is_finite())
                || self.tex_coords[i].iter().any(|c| !c.is_finite())
        }) {
            return Err(GeometryError::InvalidMesh(format!(
                "vertex {vertex} has a non-finite attribute: position {:?}, normal {:?}, tex_coords {:?}",
                self.positions[vertex], self.normals[vertex], self.tex_coords[vertex]
            )));
        }
        if let Some((slot, index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(GeometryError::InvalidMesh(format!(
                "index {index} at slot {slot} is out of range for {vertex_count} vertices"
            )));
        }
        let group = match self.topology {
            Topology::TriangleList => 3,
            Topology::LineList => 2,
            Topology::TriangleStrip => 1,
        };
        if self.indices.len() % group != 0 {
            return Err(GeometryError::InvalidMesh(format!(
                "{} indices is not a multiple of {group} for {:?}",
                self.indices.len(),
                self.topology
            )));
        }
        if self.topology == Topology::TriangleStrip && (1..3).contains(&self.indices.len()) {
            return Err(GeometryError::InvalidMesh(format!(
                "a triangle strip needs at least 3 indices, got {}",
                self.indices.len()
            )));
        }
        Ok(())
    }

    /// Interleave the parallel arrays into GPU vertices.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&position, &normal), &tex_coords)| Vertex {
                position,
                normal,
                tex_coords,
            })
            .collect()
    }

    /// The index buffer as raw bytes (`u32`, native endian).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Iterator over the triangles of a [`Mesh`], see [`Mesh::triangles`].
#[derive(Debug, Clone)]
pub struct Triangles<'a> {
    indices: &'a [u32],
    topology: Topology,
    cursor: usize,
}

impl Iterator for Triangles<'_> {
    type Item = [u32; 3];

    fn next(&mut self) -> Option<[u32; 3]> {
        let indices = self.indices;
        match self.topology {
            Topology::TriangleList => {
                let tri = indices.get(self.cursor..self.cursor + 3)?;
                self.cursor += 3;
                Some([tri[0], tri[1], tri[2]])
            }
            Topology::TriangleStrip => loop {
                let window = indices.get(self.cursor..self.cursor + 3)?;
                let parity = self.cursor % 2;
                self.cursor += 1;

                let (a, b, c) = (window[0], window[1], window[2]);
                if a == b || b == c || a == c {
                    continue;
                }
                return Some(if parity == 0 { [a, b, c] } else { [b, a, c] });
            },
            Topology::LineList => None,
        }
    }
}

/// Accumulates vertices and indices for a generator.
#[derive(Debug, Default)]
pub(crate) struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Add a vertex, returning its index.
    ///
    /// Callers check the final vertex count with `ensure_addressable` first.
    pub fn add_vertex(&mut self, position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> u32 {
        let index = self.next_index();
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Index the next added vertex will receive.
    pub fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn build(self, topology: Topology) -> Mesh {
        let mesh = Mesh {
            positions: self.positions,
            normals: self.normals,
            tex_coords: self.tex_coords,
            indices: self.indices,
            topology,
        };
        debug_assert!(mesh.validate().is_ok(), "{:?}", mesh.validate());
        mesh
    }
}
