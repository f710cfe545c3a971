#![warn(missing_docs)]
//! A single spherical (or flat) refracting surface.
//!
//! A [`Surface`] separates the lens material from the ambient medium. In the paraxial approximation the
//! refraction on such a surface is described by the [`RefractionOperator`]
//!
//! ```text
//! | 1  D |
//! | 0  1 |     with D = -(n_lens - n_ambient) / R
//! ```
//!
//! acting on the ray vector `(angle, height)`. The sign of `D` flips if the surface is traversed from the
//! lens material back into the ambient medium. A flat surface is modelled with an infinite radius which
//! yields the identity operator.
use strum::{Display, EnumIter};

use crate::ray_vector::{RayVector, RefractionOperator};

/// Refractive index of the ambient medium (air) if not given otherwise.
pub const REFRACTIVE_INDEX_AMBIENT: f64 = 1.0;

/// Traversal direction of a ray crossing a [`Surface`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Direction {
    /// from the ambient medium into the lens material
    #[default]
    #[strum(serialize = "into lens")]
    IntoLens,
    /// from the lens material into the ambient medium
    #[strum(serialize = "out of lens")]
    OutOfLens,
}

/// A refracting surface with a given radius of curvature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    radius: f64,
    refractive_index_lens: f64,
    refractive_index_ambient: f64,
}
impl Surface {
    /// Create a new [`Surface`] in air (refractive index 1.0).
    ///
    /// Use `f64::INFINITY` (or `f64::NEG_INFINITY`) as `radius` for a flat surface. A zero radius is not
    /// checked here. It results in a non-finite operator.
    #[must_use]
    pub const fn new(radius: f64, refractive_index_lens: f64) -> Self {
        Self::new_with_ambient(radius, refractive_index_lens, REFRACTIVE_INDEX_AMBIENT)
    }
    /// Create a new [`Surface`] embedded in a medium with the given refractive index.
    #[must_use]
    pub const fn new_with_ambient(
        radius: f64,
        refractive_index_lens: f64,
        refractive_index_ambient: f64,
    ) -> Self {
        Self {
            radius,
            refractive_index_lens,
            refractive_index_ambient,
        }
    }
    /// Returns the radius of curvature of this [`Surface`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
    /// Returns the refractive index of the lens material.
    #[must_use]
    pub const fn refractive_index_lens(&self) -> f64 {
        self.refractive_index_lens
    }
    /// Returns the refractive index of the ambient medium.
    #[must_use]
    pub const fn refractive_index_ambient(&self) -> f64 {
        self.refractive_index_ambient
    }
    /// Returns the refractive power term `D` of this [`Surface`] for the given traversal [`Direction`].
    #[must_use]
    pub fn refractive_power(&self, direction: Direction) -> f64 {
        let power = -(self.refractive_index_lens - self.refractive_index_ambient) / self.radius;
        match direction {
            Direction::IntoLens => power,
            Direction::OutOfLens => -power,
        }
    }
    /// Returns the [`RefractionOperator`] of this [`Surface`] for the given traversal [`Direction`].
    #[must_use]
    pub fn get_operator(&self, direction: Direction) -> RefractionOperator {
        RefractionOperator::new(1.0, self.refractive_power(direction), 0.0, 1.0)
    }
    /// Refract the given [`RayVector`] on this [`Surface`].
    #[must_use]
    pub fn propagate(&self, vector: &RayVector, direction: Direction) -> RayVector {
        vector.transformed(&self.get_operator(direction))
    }
}
