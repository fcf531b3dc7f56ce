//! Velocity-set classification: which populations a boundary must rebuild.
//!
//! A population is *unknown* at a boundary when it streams in from
//! outside the domain, i.e. its velocity has a component against the
//! outward normal on at least one bounded axis. Everything else is
//! *known*. Flat walls additionally single out the unknown population
//! travelling straight along the inward normal.

use smallvec::SmallVec;

use eddy_core::VelocitySet;

use crate::error::ClassificationError;
use crate::geometry::BoundaryGeometry;

/// Known/unknown partition of a velocity set at one boundary geometry.
///
/// Both index lists are ascending and together cover `0..Q` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    geometry: BoundaryGeometry,
    unknown: SmallVec<[usize; 8]>,
    known: SmallVec<[usize; 19]>,
    normal: Option<usize>,
}

impl Classification {
    /// The geometry this partition was computed for.
    pub fn geometry(&self) -> BoundaryGeometry {
        self.geometry
    }

    /// Populations streaming in from outside the domain.
    pub fn unknown(&self) -> &[usize] {
        &self.unknown
    }

    /// Populations whose values are trusted after streaming.
    pub fn known(&self) -> &[usize] {
        &self.known
    }

    /// The unknown population aligned with the wall normal. `Some` for
    /// flat walls only.
    pub fn normal(&self) -> Option<usize> {
        self.normal
    }

    /// Whether population `i` is unknown.
    pub fn is_unknown(&self, i: usize) -> bool {
        self.unknown.binary_search(&i).is_ok()
    }
}

fn check_sign(value: i32) -> Result<(), ClassificationError> {
    if value == 1 || value == -1 {
        Ok(())
    } else {
        Err(ClassificationError::InvalidOrientation { value })
    }
}

fn check_parameters(geometry: &BoundaryGeometry, d: usize) -> Result<(), ClassificationError> {
    if !(2..=3).contains(&d) {
        return Err(ClassificationError::UnsupportedDimension { d });
    }
    if let Some(expected) = geometry.required_dimension() {
        if expected != d {
            return Err(ClassificationError::DimensionMismatch { expected, found: d });
        }
    }
    match *geometry {
        BoundaryGeometry::FlatWall { axis, orientation } => {
            if axis >= d {
                return Err(ClassificationError::AxisOutOfRange { axis, d });
            }
            check_sign(orientation)
        }
        BoundaryGeometry::Corner2D { x_normal, y_normal } => {
            check_sign(x_normal)?;
            check_sign(y_normal)
        }
        BoundaryGeometry::Corner3D {
            x_normal,
            y_normal,
            z_normal,
        } => {
            check_sign(x_normal)?;
            check_sign(y_normal)?;
            check_sign(z_normal)
        }
        BoundaryGeometry::Edge3D {
            plane,
            normal1,
            normal2,
        } => {
            if plane >= d {
                return Err(ClassificationError::AxisOutOfRange { axis: plane, d });
            }
            check_sign(normal1)?;
            check_sign(normal2)
        }
    }
}

/// Partition `lattice` into known and unknown populations at `geometry`.
///
/// Table consistency of custom sets is not rechecked here; run
/// [`VelocitySet::validate()`] first.
///
/// # Errors
///
/// - [`UnsupportedDimension`](ClassificationError::UnsupportedDimension)
///   if the velocity set is neither 2D nor 3D.
/// - [`AxisOutOfRange`](ClassificationError::AxisOutOfRange),
///   [`InvalidOrientation`](ClassificationError::InvalidOrientation) or
///   [`DimensionMismatch`](ClassificationError::DimensionMismatch) if the
///   geometry does not fit the lattice.
/// - [`NoNormalDirection`](ClassificationError::NoNormalDirection) or
///   [`AmbiguousNormal`](ClassificationError::AmbiguousNormal) if a flat
///   wall has no single normal population.
/// - [`OppositeUnknown`](ClassificationError::OppositeUnknown) if some
///   unknown population has no known opposite, e.g. a D2Q9 corner.
pub fn classify(
    geometry: BoundaryGeometry,
    lattice: &VelocitySet,
) -> Result<Classification, ClassificationError> {
    let d = lattice.d();
    check_parameters(&geometry, d)?;

    let n = geometry.outward_normal();
    let mut unknown = SmallVec::new();
    let mut known = SmallVec::new();
    for i in 0..lattice.q() {
        let c = lattice.c(i);
        if (0..d).any(|a| c[a] * n[a] < 0) {
            unknown.push(i);
        } else {
            known.push(i);
        }
    }

    let normal = if geometry.is_flat_wall() {
        let candidates: Vec<usize> = unknown
            .iter()
            .copied()
            .filter(|&i| lattice.nonzero_components(i) == 1)
            .collect();
        if candidates.len() > 1 {
            return Err(ClassificationError::AmbiguousNormal { candidates });
        }
        match candidates.first() {
            Some(&normal) => Some(normal),
            None => return Err(ClassificationError::NoNormalDirection),
        }
    } else {
        None
    };

    let classification = Classification {
        geometry,
        unknown,
        known,
        normal,
    };
    for &i in classification.unknown() {
        let opposite = lattice.opposite(i);
        if classification.is_unknown(opposite) {
            return Err(ClassificationError::OppositeUnknown { index: i, opposite });
        }
    }
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::{D2Q5, D2Q9, D3Q7};
    use proptest::prelude::*;

    fn wall(axis: usize, orientation: i32) -> BoundaryGeometry {
        BoundaryGeometry::FlatWall { axis, orientation }
    }

    #[test]
    fn d2q5_walls_have_a_single_unknown() {
        // (axis, orientation) -> normal index in D2Q5 ordering.
        let cases = [((0, 1), 1), ((0, -1), 3), ((1, 1), 2), ((1, -1), 4)];
        for ((axis, orientation), normal) in cases {
            let cls = classify(wall(axis, orientation), &D2Q5).unwrap();
            assert_eq!(cls.unknown(), &[normal]);
            assert_eq!(cls.normal(), Some(normal));
            assert_eq!(cls.known().len(), 4);
        }
    }

    #[test]
    fn d2q9_wall_has_three_unknowns_and_one_normal() {
        let cls = classify(wall(0, 1), &D2Q9).unwrap();
        assert_eq!(cls.unknown(), &[1, 2, 3]);
        assert_eq!(cls.known(), &[0, 4, 5, 6, 7, 8]);
        assert_eq!(cls.normal(), Some(2));
    }

    #[test]
    fn d2q9_corner_is_rejected() {
        let corner = BoundaryGeometry::Corner2D {
            x_normal: 1,
            y_normal: 1,
        };
        let err = classify(corner, &D2Q9).unwrap_err();
        assert_eq!(
            err,
            ClassificationError::OppositeUnknown {
                index: 1,
                opposite: 5
            }
        );
    }

    #[test]
    fn d2q5_corner_has_two_unknowns() {
        let corner = BoundaryGeometry::Corner2D {
            x_normal: -1,
            y_normal: 1,
        };
        let cls = classify(corner, &D2Q5).unwrap();
        // c_x > 0 (index 3) and c_y < 0 (index 2).
        assert_eq!(cls.unknown(), &[2, 3]);
        assert_eq!(cls.normal(), None);
    }

    #[test]
    fn d3q7_edge_uses_transverse_axes() {
        let edge = BoundaryGeometry::Edge3D {
            plane: 0,
            normal1: 1,
            normal2: -1,
        };
        let cls = classify(edge, &D3Q7).unwrap();
        // y outward +1 -> c_y < 0 (index 2); z outward -1 -> c_z > 0 (index 6).
        assert_eq!(cls.unknown(), &[2, 6]);
    }

    #[test]
    fn d3q7_corner_has_three_unknowns() {
        let corner = BoundaryGeometry::Corner3D {
            x_normal: 1,
            y_normal: 1,
            z_normal: 1,
        };
        let cls = classify(corner, &D3Q7).unwrap();
        assert_eq!(cls.unknown(), &[1, 2, 3]);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            classify(wall(2, 1), &D2Q5).unwrap_err(),
            ClassificationError::AxisOutOfRange { axis: 2, d: 2 }
        );
        assert_eq!(
            classify(wall(0, 0), &D2Q5).unwrap_err(),
            ClassificationError::InvalidOrientation { value: 0 }
        );
        let corner3 = BoundaryGeometry::Corner3D {
            x_normal: 1,
            y_normal: 1,
            z_normal: 1,
        };
        assert_eq!(
            classify(corner3, &D2Q5).unwrap_err(),
            ClassificationError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        let corner2 = BoundaryGeometry::Corner2D {
            x_normal: 1,
            y_normal: 2,
        };
        assert_eq!(
            classify(corner2, &D2Q5).unwrap_err(),
            ClassificationError::InvalidOrientation { value: 2 }
        );
    }

    #[test]
    fn rejects_lattices_outside_two_and_three_dimensions() {
        static FOUR_D: VelocitySet = VelocitySet::new(
            "D4Q1",
            4,
            &[[0, 0, 0]],
            &[1.0],
            &[0],
            3.0,
        );
        assert_eq!(
            classify(wall(0, 1), &FOUR_D).unwrap_err(),
            ClassificationError::UnsupportedDimension { d: 4 }
        );
    }

    #[test]
    fn wall_without_axis_aligned_velocity_has_no_normal() {
        static DIAGONAL: VelocitySet = VelocitySet::new(
            "D2Q5-diagonal",
            2,
            &[[0, 0, 0], [-1, -1, 0], [1, -1, 0], [1, 1, 0], [-1, 1, 0]],
            &[0.2, 0.2, 0.2, 0.2, 0.2],
            &[0, 3, 4, 1, 2],
            3.0,
        );
        assert_eq!(
            classify(wall(0, 1), &DIAGONAL).unwrap_err(),
            ClassificationError::NoNormalDirection
        );
    }

    #[test]
    fn two_axis_aligned_unknowns_are_ambiguous() {
        static DOUBLE_X: VelocitySet = VelocitySet::new(
            "D2Q7-double-x",
            2,
            &[
                [0, 0, 0],
                [-1, 0, 0],
                [-2, 0, 0],
                [0, -1, 0],
                [1, 0, 0],
                [2, 0, 0],
                [0, 1, 0],
            ],
            &[0.25, 0.125, 0.125, 0.125, 0.125, 0.125, 0.125],
            &[0, 4, 5, 6, 1, 2, 3],
            3.0,
        );
        assert_eq!(
            classify(wall(0, 1), &DOUBLE_X).unwrap_err(),
            ClassificationError::AmbiguousNormal {
                candidates: vec![1, 2]
            }
        );
    }

    proptest! {
        #[test]
        fn partition_is_exhaustive_and_deterministic(idx in 0usize..26) {
            let geometry = BoundaryGeometry::all(3)[idx];
            let a = classify(geometry, &D3Q7).unwrap();
            let b = classify(geometry, &D3Q7).unwrap();
            prop_assert_eq!(&a, &b);

            let mut all: Vec<usize> = a.unknown().iter().chain(a.known()).copied().collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..D3Q7.q()).collect::<Vec<_>>());
            for &i in a.unknown() {
                prop_assert!(!a.is_unknown(D3Q7.opposite(i)));
            }
            if let Some(n) = a.normal() {
                prop_assert!(a.is_unknown(n));
                prop_assert_eq!(D3Q7.nonzero_components(n), 1);
            }
        }
    }
}
