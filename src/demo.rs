#![warn(missing_docs)]
//! The demonstration run.
//!
//! Four lens systems are built from literal radii, a collimated unit ray is traced through each of them and the
//! focal lengths as well as the image distances of an object at a given distance are reported.
use std::fmt::Display;

use log::info;

use crate::{
    error::LensResult,
    imaging::{focal_length_from_ray, image_distance},
    ray_vector::RayVector,
    thin_lens::{EntrySide, ThinLens},
};

/// Object distance used by the demonstration if not given otherwise.
pub const DEFAULT_OBJECT_DISTANCE: f64 = 500.0;

/// Propagate a [`RayVector`] sequentially through a chain of lenses.
///
/// The output of each lens is used as input of the next one. All lenses are located at the same axial position
/// and are entered from the same `entry_side`. An empty chain returns the input ray unchanged.
#[must_use]
pub fn trace_chain(lenses: &[ThinLens], ray: &RayVector, entry_side: EntrySide) -> RayVector {
    lenses
        .iter()
        .fold(*ray, |ray, lens| lens.propagate(&ray, entry_side))
}

/// The lens systems traced by the demonstration.
///
/// System 3 and system 4 consist of the same two lenses traversed in opposite order.
#[must_use]
pub fn demo_systems() -> Vec<Vec<ThinLens>> {
    let biconvex = ThinLens::new(200.0, -100.0, 1.5);
    let plano_concave = ThinLens::new(-100.0, f64::INFINITY, 1.5);
    vec![
        vec![biconvex],
        vec![ThinLens::new(100.0, -200.0, 1.5)],
        vec![biconvex, plano_concave],
        vec![plano_concave, biconvex],
    ]
}

/// Results of the demonstration run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    object_distance: f64,
    focal_lengths: Vec<f64>,
    image_distances: Vec<f64>,
}
impl DemoReport {
    /// Returns the object distance used for calculating the image distances.
    #[must_use]
    pub const fn object_distance(&self) -> f64 {
        self.object_distance
    }
    /// Returns the focal lengths of the traced systems.
    #[must_use]
    pub fn focal_lengths(&self) -> &[f64] {
        &self.focal_lengths
    }
    /// Returns the image distances of the traced systems.
    #[must_use]
    pub fn image_distances(&self) -> &[f64] {
        &self.image_distances
    }
}
impl Display for DemoReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "part 1")?;
        for (i, focal_length) in self.focal_lengths.iter().enumerate() {
            writeln!(f, "f{} = {focal_length:?}", i + 1)?;
        }
        writeln!(f, "part 2")?;
        for (i, image_distance) in self.image_distances.iter().enumerate() {
            writeln!(f, "s_{} = {image_distance:?}mm", i + 1)?;
        }
        Ok(())
    }
}

/// Perform the demonstration run for an object located at `object_distance`.
///
/// # Errors
///
/// This function returns an error if one of the systems is afocal or if the object is located in the focal plane of
/// one of the systems.
pub fn run(object_distance: f64) -> LensResult<DemoReport> {
    let mut focal_lengths = Vec::new();
    let mut image_distances = Vec::new();
    for (i, system) in demo_systems().iter().enumerate() {
        let ray = trace_chain(system, &RayVector::collimated_unit(), EntrySide::Left);
        info!("system {}: output ray {ray}", i + 1);
        let focal_length = focal_length_from_ray(&ray)?;
        focal_lengths.push(focal_length);
        image_distances.push(image_distance(focal_length, object_distance)?);
    }
    Ok(DemoReport {
        object_distance,
        focal_lengths,
        image_distances,
    })
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_no_warnings;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    #[test]
    fn trace_chain_empty() {
        let ray = RayVector::new(0.01, 2.0);
        assert_eq!(trace_chain(&[], &ray, EntrySide::Left), ray);
    }
    #[test]
    fn trace_chain_single() {
        let lens = ThinLens::new(200.0, -100.0, 1.5);
        let ray = RayVector::collimated_unit();
        assert_eq!(
            trace_chain(&[lens], &ray, EntrySide::Right),
            lens.propagate(&ray, EntrySide::Right)
        );
    }
    #[test]
    fn trace_chain_two_lenses() {
        let first = ThinLens::new(200.0, -100.0, 1.5);
        let second = ThinLens::new(-100.0, f64::INFINITY, 1.5);
        let ray = RayVector::collimated_unit();
        let out = trace_chain(&[first, second], &ray, EntrySide::Left);
        let expected = second.propagate(&first.propagate(&ray, EntrySide::Left), EntrySide::Left);
        assert_eq!(out, expected);
        assert_abs_diff_eq!(out.angle(), -0.0025, epsilon = 1e-15);
        assert_eq!(out.height(), 1.0);
    }
    #[test]
    fn demo_systems() {
        let systems = super::demo_systems();
        assert_eq!(systems.len(), 4);
        assert_eq!(systems[0].len(), 1);
        assert_eq!(systems[1].len(), 1);
        assert_eq!(systems[2].len(), 2);
        assert_eq!(systems[2][0], systems[3][1]);
        assert_eq!(systems[2][1], systems[3][0]);
    }
    #[test]
    fn run_focal_lengths() {
        let report = run(DEFAULT_OBJECT_DISTANCE).unwrap();
        assert_eq!(report.object_distance(), 500.0);
        let f = report.focal_lengths();
        assert_eq!(f.len(), 4);
        assert_relative_eq!(f[0], 400.0 / 3.0, max_relative = 1e-9);
        assert_relative_eq!(f[1], 400.0 / 3.0, max_relative = 1e-9);
        assert_relative_eq!(f[2], 400.0, max_relative = 1e-9);
        assert_relative_eq!(f[3], 400.0, max_relative = 1e-9);
    }
    #[test]
    fn run_focal_length_matches_closed_form() {
        let report = run(DEFAULT_OBJECT_DISTANCE).unwrap();
        let lens = ThinLens::new(200.0, -100.0, 1.5);
        assert_relative_eq!(
            report.focal_lengths()[0],
            lens.focal_length().unwrap(),
            max_relative = 1e-9
        );
    }
    #[test]
    fn run_chain_order() {
        // thin lens operators at the same axial position commute
        let report = run(DEFAULT_OBJECT_DISTANCE).unwrap();
        let f = report.focal_lengths();
        assert_eq!(f[2], f[3]);
    }
    #[test]
    fn run_image_distances() {
        testing_logger::setup();
        let report = run(DEFAULT_OBJECT_DISTANCE).unwrap();
        let s = report.image_distances();
        assert_eq!(s.len(), 4);
        assert_abs_diff_eq!(s[0], 2000.0 / 11.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s[1], 2000.0 / 11.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s[2], 2000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s[3], 2000.0, epsilon = 1e-6);
        check_no_warnings();
    }
    #[test]
    fn display() {
        let report = DemoReport {
            object_distance: 500.0,
            focal_lengths: vec![100.0, 200.5],
            image_distances: vec![125.0, -3.25],
        };
        assert_eq!(
            format!("{report}"),
            "part 1\nf1 = 100.0\nf2 = 200.5\npart 2\ns_1 = 125.0mm\ns_2 = -3.25mm\n"
        );
    }
    #[test]
    fn display_run() {
        assert_eq!(
            format!("{}", run(DEFAULT_OBJECT_DISTANCE).unwrap()),
            "part 1\n\
             f1 = 133.33333333333334\n\
             f2 = 133.33333333333334\n\
             f3 = 400.00000000000006\n\
             f4 = 400.00000000000006\n\
             part 2\n\
             s_1 = 181.81818181818184mm\n\
             s_2 = 181.81818181818184mm\n\
             s_3 = 2000.0000000000016mm\n\
             s_4 = 2000.0000000000016mm\n"
        );
    }
}
