//! Paraxial ray-transfer (ABCD) matrix optics for thin lenses.
//!
//! A [`Surface`](surface::Surface) describes a single refracting interface and produces the 2x2 operator acting on a
//! [`RayVector`](ray_vector::RayVector) `(angle, height)`. Two surfaces form a [`ThinLens`](thin_lens::ThinLens) whose
//! focal length can either be calculated in closed form or inferred by tracing a collimated ray through it. Several
//! lenses can be chained by feeding the output ray of one lens into the next one
//! (see [`trace_chain`](demo::trace_chain)).
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod demo;
pub mod error;
pub mod imaging;
pub mod ray_vector;
pub mod surface;
pub mod thin_lens;
pub mod utils;

/// Return the version information of the currently built executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
