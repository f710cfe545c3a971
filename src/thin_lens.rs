#![warn(missing_docs)]
//! A thin lens made of two aligned refracting surfaces.
use log::warn;
use strum::{Display, EnumIter};

use crate::{
    error::{LensError, LensResult},
    ray_vector::{RayVector, RefractionOperator},
    surface::{Direction, Surface, REFRACTIVE_INDEX_AMBIENT},
};

/// The side from which light enters a [`ThinLens`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum EntrySide {
    /// light enters through the left surface and leaves through the right one
    #[default]
    #[strum(serialize = "left")]
    Left,
    /// light enters through the right surface and leaves through the left one
    #[strum(serialize = "right")]
    Right,
}

/// An idealized lens of negligible thickness.
///
/// The lens consists of a `left` and a `right` [`Surface`] located at the same axial position. Both surfaces share the
/// refractive indices of the lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinLens {
    refractive_index_lens: f64,
    refractive_index_ambient: f64,
    left: Surface,
    right: Surface,
}
impl ThinLens {
    /// Create a new [`ThinLens`] in air with the given radii of curvature of the left and right surface.
    #[must_use]
    pub const fn new(radius_left: f64, radius_right: f64, refractive_index_lens: f64) -> Self {
        Self::new_with_ambient(
            radius_left,
            radius_right,
            refractive_index_lens,
            REFRACTIVE_INDEX_AMBIENT,
        )
    }
    /// Create a new [`ThinLens`] embedded in a medium with the given refractive index.
    #[must_use]
    pub const fn new_with_ambient(
        radius_left: f64,
        radius_right: f64,
        refractive_index_lens: f64,
        refractive_index_ambient: f64,
    ) -> Self {
        Self {
            refractive_index_lens,
            refractive_index_ambient,
            left: Surface::new_with_ambient(
                radius_left,
                refractive_index_lens,
                refractive_index_ambient,
            ),
            right: Surface::new_with_ambient(
                radius_right,
                refractive_index_lens,
                refractive_index_ambient,
            ),
        }
    }
    /// Returns a reference to the left [`Surface`] of this [`ThinLens`].
    #[must_use]
    pub const fn left(&self) -> &Surface {
        &self.left
    }
    /// Returns a reference to the right [`Surface`] of this [`ThinLens`].
    #[must_use]
    pub const fn right(&self) -> &Surface {
        &self.right
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
    /// Returns the optical power (inverse focal length) of this [`ThinLens`] given by the lensmaker's equation.
    ///
    /// An afocal lens has an optical power of zero.
    #[must_use]
    pub fn optical_power(&self) -> f64 {
        (self.refractive_index_lens - self.refractive_index_ambient)
            * (1.0 / self.left.radius() - 1.0 / self.right.radius())
    }
    /// Returns the focal length of this [`ThinLens`].
    ///
    /// # Errors
    ///
    /// This function returns [`LensError::NumericDivergence`] if the lens has no finite focal length. This is the case if
    ///   - both surfaces have the same radius of curvature (afocal lens)
    ///   - the lens material has the same refractive index as the ambient medium
    ///   - one of the radii is zero
    pub fn focal_length(&self) -> LensResult<f64> {
        let power = self.optical_power();
        if power == 0.0 || self.left.radius() == 0.0 || self.right.radius() == 0.0 {
            warn!(
                "Division by zero. Check the radii of the lens surfaces (left: {}, right: {}).",
                self.left.radius(),
                self.right.radius()
            );
            return Err(LensError::NumericDivergence(
                "lens has no finite focal length".into(),
            ));
        }
        Ok(1.0 / power)
    }
    /// Returns the ray-transfer operator of the whole lens for light entering from the given [`EntrySide`].
    ///
    /// The operator is the product `M_out * M_in` of the entrance surface operator `M_in` and the exit surface
    /// operator `M_out`.
    #[must_use]
    pub fn system_operator(&self, entry_side: EntrySide) -> RefractionOperator {
        let (entrance, exit) = match entry_side {
            EntrySide::Left => (&self.left, &self.right),
            EntrySide::Right => (&self.right, &self.left),
        };
        exit.get_operator(Direction::OutOfLens) * entrance.get_operator(Direction::IntoLens)
    }
    /// Propagate the given [`RayVector`] through this [`ThinLens`].
    ///
    /// The ray is transformed by the [`system_operator`](Self::system_operator) of the lens for the given
    /// [`EntrySide`].
    #[must_use]
    pub fn propagate(&self, vector: &RayVector, entry_side: EntrySide) -> RayVector {
        vector.transformed(&self.system_operator(entry_side))
    }
}
