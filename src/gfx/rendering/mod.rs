//! Rendering interface
//!
//! The seam between generated geometry and whatever renderer consumes it:
//! the drawing traits, the interleaved vertex layout and a headless draw list.

pub mod draw;
pub mod draw_list;
pub mod vertex;

// Re-export main types
pub use draw::{DrawTarget, Drawable};
pub use draw_list::{DrawCall, DrawList};
pub use vertex::Vertex;
