//! # Geoprim Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use geoprim::prelude::*;
//!
//! fn crown(layers: u32) -> Result<Vec<Pyramid>, GeometryError> {
//!     (0..layers)
//!         .map(|i| Pyramid::new(1.2 - i as f32 * 0.3, 1.0, 7))
//!         .collect()
//! }
//!
//! let mut frame = DrawList::new();
//! for layer in crown(3)? {
//!     layer.display(&mut frame);
//! }
//! assert_eq!(frame.len(), 3);
//! # Ok::<(), GeometryError>(())
//! ```

// Re-export geometry generators and data
pub use crate::gfx::geometry::{
    Cone, GeometryError, Mesh, Plane, PlaneMode, Primitive, Pyramid, Sphere, TextureWindow,
    Topology,
};

// Re-export the rendering interface
pub use crate::gfx::rendering::{DrawCall, DrawList, DrawTarget, Drawable, Vertex};
