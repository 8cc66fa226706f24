//! # Geometry Errors
//!
//! Every generator validates its parameters before a single vertex is written.
//! Invalid parameters are reported, never clamped.

use thiserror::Error;

/// Errors raised while constructing or validating procedural geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A radius, height or size was zero or negative.
    #[error("{parameter} must be greater than zero (got {value})")]
    NonPositive { parameter: &'static str, value: f32 },

    /// A floating point parameter was NaN or infinite.
    #[error("{parameter} must be finite (got {value})")]
    NonFinite { parameter: &'static str, value: f32 },

    /// A subdivision count is below the minimum for a non-degenerate shape.
    #[error("{parameter} must be at least {minimum} (got {actual})")]
    TooFewSubdivisions {
        parameter: &'static str,
        minimum: u32,
        actual: u32,
    },

    /// The requested subdivisions would produce more vertices than a `u32` index can address.
    #[error("shape would need {requested} vertices, more than a u32 index buffer can address")]
    TooManyVertices { requested: u64 },

    /// A mesh broke one of its structural invariants.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

/// Result alias used throughout the geometry module.
pub type Result<T> = std::result::Result<T, GeometryError>;

pub(crate) fn ensure_positive(parameter: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { parameter, value });
    }
    Ok(value)
}

pub(crate) fn ensure_finite(parameter: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value })
    }
}

pub(crate) fn ensure_at_least(parameter: &'static str, actual: u32, minimum: u32) -> Result<u32> {
    if actual < minimum {
        return Err(GeometryError::TooFewSubdivisions {
            parameter,
            minimum,
            actual,
        });
    }
    Ok(actual)
}

/// Fails when `requested` vertices cannot all be referenced by a `u32` index.
pub(crate) fn ensure_addressable(requested: u64) -> Result<()> {
    if requested > u64::from(u32::MAX) {
        return Err(GeometryError::TooManyVertices { requested });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert_eq!(ensure_positive("radius", 2.5), Ok(2.5));
        assert_eq!(
            ensure_positive("radius", 0.0),
            Err(GeometryError::NonPositive {
                parameter: "radius",
                value: 0.0
            })
        );
        assert!(matches!(
            ensure_positive("height", f32::NAN),
            Err(GeometryError::NonFinite { parameter: "height", .. })
        ));
        assert!(matches!(
            ensure_positive("height", f32::INFINITY),
            Err(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_subdivision_checks() {
        assert_eq!(ensure_at_least("slices", 3, 3), Ok(3));
        assert_eq!(
            ensure_at_least("slices", 2, 3),
            Err(GeometryError::TooFewSubdivisions {
                parameter: "slices",
                minimum: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_addressable_limit() {
        assert!(ensure_addressable(u64::from(u32::MAX)).is_ok());
        assert!(ensure_addressable(u64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = GeometryError::TooFewSubdivisions {
            parameter: "stacks",
            minimum: 1,
            actual: 0,
        };
        assert_eq!(err.to_string(), "stacks must be at least 1 (got 0)");

        let err = GeometryError::NonPositive {
            parameter: "base_radius",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "base_radius must be greater than zero (got -1)");
    }
}
