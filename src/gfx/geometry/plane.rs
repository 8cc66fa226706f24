//! # Plane Generation
//!
//! A subdivided unit square in the local XY plane, facing +Z, drawn as a single
//! triangle strip.

use super::error::{ensure_addressable, ensure_at_least, ensure_finite, Result};
use super::mesh::{Mesh, MeshBuilder, Topology};
use super::{DEFAULT_PLANE_DIVISIONS, MIN_DIVISIONS};
use crate::gfx::rendering::Drawable;

/// Texture coordinate window spread across a plane.
///
/// `min_s..max_s` runs across the columns, `min_t..max_t` down the rows.
/// A reversed range flips the texture along that axis; a range longer than 1
/// repeats it when the sampler wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureWindow {
    pub min_s: f32,
    pub max_s: f32,
    pub min_t: f32,
    pub max_t: f32,
}

impl TextureWindow {
    pub fn new(min_s: f32, max_s: f32, min_t: f32, max_t: f32) -> Self {
        Self {
            min_s,
            max_s,
            min_t,
            max_t,
        }
    }

    /// Repeat the texture `repeat_s` times across and `repeat_t` times down.
    pub fn tiled(repeat_s: f32, repeat_t: f32) -> Self {
        Self::new(0.0, repeat_s, 0.0, repeat_t)
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("min_s", self.min_s)?;
        ensure_finite("max_s", self.max_s)?;
        ensure_finite("min_t", self.min_t)?;
        ensure_finite("max_t", self.max_t)?;
        Ok(())
    }
}

impl Default for TextureWindow {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// How the plane's strip indices are handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneMode {
    /// Filled triangle strip
    #[default]
    Fill,
    /// The same indices read as independent line segments
    Line,
}

/// A flat, subdivided unit square centred at the origin.
///
/// # Examples
///
/// ```
/// use geoprim::prelude::*;
///
/// // Ground field with the grass texture repeated 24 times in each direction
/// let field = Plane::with_texture_window(1, TextureWindow::tiled(24.0, 24.0))?;
/// assert_eq!(field.mesh().vertex_count(), 4);
/// # Ok::<(), GeometryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Plane {
    divisions: u32,
    texture_window: TextureWindow,
    mode: PlaneMode,
    mesh: Mesh,
}

impl Plane {
    /// Create a plane with `divisions` cells along each side and the unit texture window.
    pub fn new(divisions: u32) -> Result<Self> {
        Self::with_texture_window(divisions, TextureWindow::default())
    }

    /// Create a plane with `divisions` cells along each side and a custom texture window.
    pub fn with_texture_window(divisions: u32, texture_window: TextureWindow) -> Result<Self> {
        ensure_at_least("divisions", divisions, MIN_DIVISIONS)?;
        texture_window.validate()?;
        let side = u64::from(divisions) + 1;
        ensure_addressable(side * side)?;

        Ok(Self::generated(divisions, texture_window))
    }

    /// Build from parameters that already passed validation.
    fn generated(divisions: u32, texture_window: TextureWindow) -> Self {
        Self {
            divisions,
            texture_window,
            mode: PlaneMode::Fill,
            mesh: generate_plane(divisions, &texture_window),
        }
    }

    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    pub fn texture_window(&self) -> TextureWindow {
        self.texture_window
    }

    pub fn mode(&self) -> PlaneMode {
        self.mode
    }

    /// Draw as a filled triangle strip. Geometry is left untouched.
    pub fn set_fill_mode(&mut self) {
        self.mode = PlaneMode::Fill;
    }

    /// Draw the strip indices as line segments. Geometry is left untouched.
    pub fn set_line_mode(&mut self) {
        self.mode = PlaneMode::Line;
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::generated(DEFAULT_PLANE_DIVISIONS, TextureWindow::default())
    }
}

impl Drawable for Plane {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn topology(&self) -> Topology {
        match self.mode {
            PlaneMode::Fill => self.mesh.topology(),
            PlaneMode::Line => Topology::LineList,
        }
    }
}

fn generate_plane(divisions: u32, window: &TextureWindow) -> Mesh {
    let side = divisions + 1;
    let cells = divisions as f32;
    // f64 span: `max - min` of two finite f32 values can overflow f32
    let lerp = |min: f32, max: f32, k: u32| {
        let (min, max) = (f64::from(min), f64::from(max));
        (min + (max - min) * f64::from(k) / f64::from(divisions)) as f32
    };

    let vertex_count = side as usize * side as usize;
    let index_count = divisions as usize * 2 * side as usize + 2 * (divisions as usize - 1);
    let mut builder = MeshBuilder::with_capacity(vertex_count, index_count);

    // Rows run top to bottom, columns left to right
    for row in 0..side {
        let y = 0.5 - row as f32 / cells;
        let t = lerp(window.min_t, window.max_t, row);
        for col in 0..side {
            let x = -0.5 + col as f32 / cells;
            let s = lerp(window.min_s, window.max_s, col);
            builder.add_vertex([x, y, 0.0], [0.0, 0.0, 1.0], [s, t]);
        }
    }

    let mut ind = 0;
    for row in 0..divisions {
        for _ in 0..side {
            builder.add_index(ind);
            builder.add_index(ind + side);
            ind += 1;
        }
        // Degenerate join: repeat the last vertex of the next row, then its first
        if row + 1 < divisions {
            builder.add_index(ind + divisions);
            builder.add_index(ind);
        }
    }

    let mesh = builder.build(Topology::TriangleStrip);
    log::debug!(
        "Generated plane: {} divisions, {} vertices, {} indices",
        divisions,
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh
}
