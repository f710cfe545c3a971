//! Handling the command line interface of the demonstration
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use clap::{builder::Str, Parser};

use crate::{
    demo::DEFAULT_OBJECT_DISTANCE,
    error::{LensError, LensResult},
    get_version,
};

/// Validated command line arguments of the demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// distance of the object in front of the lens systems
    pub object_distance: f64,
}

/// Raw command line arguments as parsed by `clap`.
#[derive(Parser, Debug)]
#[command(version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// distance of the object in front of the lens systems (same length unit as the lens radii)
    #[arg(short, long, default_value_t = DEFAULT_OBJECT_DISTANCE, allow_negative_numbers = true)]
    object_distance: f64,
}

/// Evaluates if the passed object distance is valid.
///
/// The distance must be finite and non-zero.
fn eval_object_distance(object_distance: f64) -> Option<f64> {
    if object_distance.is_finite() && object_distance != 0.0 {
        Some(object_distance)
    } else {
        None
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = LensError;

    fn try_from(part_args: PartialArgs) -> LensResult<Self> {
        let object_distance = eval_object_distance(part_args.object_distance).ok_or_else(|| {
            LensError::Console(format!(
                "invalid object distance {}: must be finite and != 0.0",
                part_args.object_distance
            ))
        })?;
        Ok(Self { object_distance })
    }
}
