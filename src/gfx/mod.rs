//! # Graphics Module
//!
//! Procedural geometry and the interface through which renderers consume it.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Plane, cone, pyramid and sphere generators
//!   producing immutable [`Mesh`] values
//! - **Rendering Interface** ([`rendering`]) - The [`Drawable`] / [`DrawTarget`]
//!   traits, the interleaved GPU vertex layout and a headless [`DrawList`]
//!
//! Nothing here uploads buffers, binds materials or keeps transform state.
//! A renderer implements [`DrawTarget`] and applies its own model transforms.
//!
//! ## Usage
//!
//! ```
//! use geoprim::gfx::geometry::Sphere;
//! use geoprim::gfx::rendering::{DrawList, Drawable};
//!
//! let body = Sphere::new(20, 20)?;
//! let mut frame = DrawList::new();
//! body.display(&mut frame);
//! assert_eq!(frame.total_indices(), 6 * 20 * 20);
//! # Ok::<(), geoprim::gfx::geometry::GeometryError>(())
//! ```
//!
//! [`Mesh`]: geometry::Mesh
//! [`Drawable`]: rendering::Drawable
//! [`DrawTarget`]: rendering::DrawTarget
//! [`DrawList`]: rendering::DrawList

pub mod geometry;
pub mod rendering;

// Re-export commonly used types
pub use geometry::{Mesh, Topology};
pub use rendering::{DrawTarget, Drawable};
