//! # Primitive Shapes
//!
//! The closed set of shapes the generators produce, as a single value that
//! composition code can store in one collection.

use super::{Cone, Mesh, Plane, Pyramid, Sphere, Topology};
use crate::gfx::rendering::Drawable;

/// Any generated primitive.
#[derive(Debug, Clone)]
pub enum Primitive {
    Plane(Plane),
    Cone(Cone),
    Pyramid(Pyramid),
    Sphere(Sphere),
}

impl Primitive {
    /// Short lowercase shape name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Plane(_) => "plane",
            Primitive::Cone(_) => "cone",
            Primitive::Pyramid(_) => "pyramid",
            Primitive::Sphere(_) => "sphere",
        }
    }
}

impl Drawable for Primitive {
    fn mesh(&self) -> &Mesh {
        match self {
            Primitive::Plane(plane) => plane.mesh(),
            Primitive::Cone(cone) => cone.mesh(),
            Primitive::Pyramid(pyramid) => pyramid.mesh(),
            Primitive::Sphere(sphere) => sphere.mesh(),
        }
    }

    fn topology(&self) -> Topology {
        match self {
            Primitive::Plane(plane) => plane.topology(),
            Primitive::Cone(cone) => cone.topology(),
            Primitive::Pyramid(pyramid) => pyramid.topology(),
            Primitive::Sphere(sphere) => sphere.topology(),
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Cone> for Primitive {
    fn from(cone: Cone) -> Self {
        Primitive::Cone(cone)
    }
}

impl From<Pyramid> for Primitive {
    fn from(pyramid: Pyramid) -> Self {
        Primitive::Pyramid(pyramid)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}
