// src/lib.rs
//! Geoprim
//!
//! Procedural parametric meshes for planes, cones, pyramids and UV spheres,
//! ready to hand to a wgpu renderer.

pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use gfx::geometry::{GeometryError, Mesh, Topology};
