#![warn(missing_docs)]
//! Paraxial ray vectors and the linear operators acting on them.
use std::fmt::Display;

use nalgebra::{Matrix2, Vector2};

/// A 2x2 ray-transfer (ABCD) matrix acting on a [`RayVector`].
///
/// Matrices are row-major and act on the column vector `(angle, height)`.
pub type RefractionOperator = Matrix2<f64>;

/// A paraxial ray given by its `angle` with respect to the optical axis and its transverse `height`
/// at a reference plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayVector(Vector2<f64>);

impl RayVector {
    /// Create a new ray vector from the given angle (in radians) and height.
    #[must_use]
    pub fn new(angle: f64, height: f64) -> Self {
        Self(Vector2::new(angle, height))
    }
    /// A ray parallel to the optical axis at unit height.
    ///
    /// Feeding this ray through an optical system and reading the output angle yields the focal
    /// length of the system (see [`focal_length_from_ray`](crate::imaging::focal_length_from_ray)).
    #[must_use]
    pub fn collimated_unit() -> Self {
        Self::new(0.0, 1.0)
    }
    /// Returns the angle of this [`RayVector`].
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.0.x
    }
    /// Returns the height of this [`RayVector`].
    #[must_use]
    pub fn height(&self) -> f64 {
        self.0.y
    }
    /// Apply the given operator to this ray and return the transformed ray.
    #[must_use]
    pub fn transformed(&self, operator: &RefractionOperator) -> Self {
        Self(operator * self.0)
    }
}
impl From<(f64, f64)> for RayVector {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}
impl Display for RayVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(angle: {}, height: {})", self.angle(), self.height())
    }
}
