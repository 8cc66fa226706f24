//! # Procedural Geometry Generation
//!
//! This module generates the primitive shapes every scene object is assembled
//! from, eliminating the need for external model files for basic shapes.
//!
//! ## Supported Primitives
//!
//! - **Plane**: Subdivided unit square, drawn as a triangle strip
//! - **Cone**: Capped cone with slanted side normals
//! - **Pyramid**: Apex over an N-gon base with an independent base cap
//! - **Sphere**: Unit UV sphere with configurable resolution
//!
//! Every generator validates its parameters, builds its [`Mesh`] once, and
//! never changes it afterwards. Coordinates are in object space; placing,
//! rotating and scaling the result is up to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use geoprim::prelude::*;
//!
//! // Helicopter tail: long, thin cone
//! let tail = Cone::new(0.5, 5.0, 20)?;
//!
//! // Sky dome
//! let panorama = Sphere::new(40, 40)?;
//!
//! // Subdivided lake surface
//! let lake = Plane::new(30)?;
//!
//! assert_eq!(panorama.mesh().vertex_count(), 41 * 41);
//! # let _ = (tail, lake);
//! # Ok::<(), GeometryError>(())
//! ```

pub mod cone;
pub mod error;
pub mod mesh;
pub mod plane;
pub mod primitives;
pub mod pyramid;
pub mod sphere;

pub use cone::Cone;
pub use error::{GeometryError, Result};
pub use mesh::{Mesh, Topology, Triangles};
pub use plane::{Plane, PlaneMode, TextureWindow};
pub use primitives::Primitive;
pub use pyramid::Pyramid;
pub use sphere::Sphere;

use std::f32::consts::TAU;

/// Default number of cells along each side of a [`Plane`]
pub const DEFAULT_PLANE_DIVISIONS: u32 = 1;
/// Default number of base sides of a [`Pyramid`] (a square base)
pub const DEFAULT_PYRAMID_SLICES: u32 = 4;
/// Default number of meridians of a [`Sphere`]
pub const DEFAULT_SPHERE_SLICES: u32 = 16;
/// Default number of parallels of a [`Sphere`]
pub const DEFAULT_SPHERE_STACKS: u32 = 8;

/// Fewest cells along a plane side
pub const MIN_DIVISIONS: u32 = 1;
/// Fewest angular steps around a cone, pyramid or sphere
pub const MIN_SLICES: u32 = 3;
/// Fewest sphere parallels
pub const MIN_STACKS: u32 = 1;

/// A sample on the unit circle in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RingPoint {
    /// Angular step, `0..=slices`
    pub step: u32,
    pub cos: f32,
    pub sin: f32,
}

/// Unit circle samples at `k·2π/slices` for `k` in `0..slices`, followed by
/// the seam duplicate.
///
/// The seam duplicate is an exact copy of the first sample with
/// `step == slices`. It is intentional: texture coordinates derived from
/// `step` can then reach 1 instead of wrapping back to 0 on the last face.
pub(crate) fn ring_with_seam(slices: u32) -> impl Iterator<Item = RingPoint> {
    let angle_step = TAU / slices as f32;
    let ring = (0..slices).map(move |step| {
        let (sin, cos) = (step as f32 * angle_step).sin_cos();
        RingPoint { step, cos, sin }
    });
    let seam = RingPoint {
        step: slices,
        cos: 1.0,
        sin: 0.0,
    };
    ring.chain(std::iter::once(seam))
}
