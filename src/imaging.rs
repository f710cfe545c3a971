#![warn(missing_docs)]
//! Derived imaging quantities.
//!
//! Functions in this module derive physical quantities from traced rays or from a known focal length. They are
//! independent of a specific lens and can be applied to the output of a single [`ThinLens`](crate::thin_lens::ThinLens)
//! as well as to a chain of lenses.
use log::warn;

use crate::{
    error::{LensError, LensResult},
    ray_vector::RayVector,
};

/// Infer the focal length of an optical system from a traced ray.
///
/// The given `ray` must be the output of a ray entering the system parallel to the optical axis at unit height
/// (see [`RayVector::collimated_unit`]). Such a ray crosses the axis at the focal length `f = -1 / angle`.
///
/// # Errors
///
/// This function returns [`LensError::NumericDivergence`] if the output angle is zero (afocal system).
pub fn focal_length_from_ray(ray: &RayVector) -> LensResult<f64> {
    if ray.angle() == 0.0 {
        warn!("Output ray is parallel to the optical axis. System is afocal.");
        return Err(LensError::NumericDivergence(
            "system has no finite focal length".into(),
        ));
    }
    Ok(-1.0 / ray.angle())
}

/// Calculate the image distance of an object at `object_distance` using the thin lens equation
/// `1/s' = 1/f - 1/s0`.
///
/// # Errors
///
/// This function returns [`LensError::NumericDivergence`] if the object is located in the focal plane
/// (`object_distance == focal_length`), where the image is formed at infinity.
pub fn image_distance(focal_length: f64, object_distance: f64) -> LensResult<f64> {
    let inverse_image_distance = focal_length.recip() - object_distance.recip();
    if inverse_image_distance == 0.0 {
        warn!("Object distance {object_distance} equals focal length. Image is located at infinity.");
        return Err(LensError::NumericDivergence(
            "image distance diverges".into(),
        ));
    }
    Ok(inverse_image_distance.recip())
}
