//! Error types for boundary classification and capsule construction.

use std::error::Error;
use std::fmt;

use crate::geometry::{BoundaryGeometry, ClosureKind};

/// Errors from [`classify()`](crate::classify::classify).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// A flat-wall axis or edge plane is not below the lattice dimension.
    AxisOutOfRange {
        /// The offending axis or plane.
        axis: usize,
        /// Lattice dimension.
        d: usize,
    },
    /// An orientation or normal component is not −1 or +1.
    InvalidOrientation {
        /// The offending value.
        value: i32,
    },
    /// The velocity set's dimension is not 2 or 3.
    UnsupportedDimension {
        /// Dimension of the velocity set.
        d: usize,
    },
    /// The geometry belongs to a different lattice dimension.
    DimensionMismatch {
        /// Dimension the geometry requires.
        expected: usize,
        /// Dimension of the velocity set.
        found: usize,
    },
    /// No unknown population of a flat wall has a single non-zero component.
    NoNormalDirection,
    /// More than one unknown population qualifies as the wall normal.
    AmbiguousNormal {
        /// Every qualifying population index.
        candidates: Vec<usize>,
    },
    /// An unknown population's opposite is also unknown, so no
    /// anti-bounce-back source exists for it.
    OppositeUnknown {
        /// The unknown population.
        index: usize,
        /// Its opposite.
        opposite: usize,
    },
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisOutOfRange { axis, d } => {
                write!(f, "axis {axis} out of range for a {d}D lattice")
            }
            Self::InvalidOrientation { value } => {
                write!(f, "orientation must be -1 or +1, got {value}")
            }
            Self::UnsupportedDimension { d } => {
                write!(f, "velocity sets must be 2D or 3D, got {d}D")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "geometry needs a {expected}D lattice, got {found}D")
            }
            Self::NoNormalDirection => {
                write!(f, "no unknown population is aligned with the wall normal")
            }
            Self::AmbiguousNormal { candidates } => {
                write!(f, "several unknown populations align with the wall normal: {candidates:?}")
            }
            Self::OppositeUnknown { index, opposite } => {
                write!(f, "population {index} and its opposite {opposite} are both unknown")
            }
        }
    }
}

impl Error for ClassificationError {}

/// Errors from building a [`BoundaryDynamics`](crate::BoundaryDynamics).
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryError {
    /// The builder was not given a geometry.
    MissingGeometry,
    /// The builder was not given a closure kind.
    MissingClosure,
    /// The closure cannot be applied at this geometry.
    UnsupportedClosure {
        /// Requested closure.
        closure: ClosureKind,
        /// Requested geometry.
        geometry: BoundaryGeometry,
    },
    /// The prescribed density is not finite.
    InvalidDensity {
        /// The offending value.
        value: f64,
    },
    /// The geometry could not be classified on the base model's lattice.
    Classification(ClassificationError),
    /// The base model's velocity set failed validation.
    InvalidLattice {
        /// Name of the velocity set.
        name: &'static str,
        /// What went wrong.
        reason: String,
    },
    /// A name was looked up that the registry does not hold.
    Unregistered {
        /// The missing name.
        name: String,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry => write!(f, "boundary geometry not set"),
            Self::MissingClosure => write!(f, "boundary closure not set"),
            Self::UnsupportedClosure { closure, geometry } => {
                write!(f, "{closure} closure is not available at {geometry}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "prescribed density must be finite, got {value}")
            }
            Self::Classification(e) => write!(f, "classification failed: {e}"),
            Self::InvalidLattice { name, reason } => {
                write!(f, "invalid velocity set {name}: {reason}")
            }
            Self::Unregistered { name } => write!(f, "dynamics '{name}' is not registered"),
        }
    }
}

impl Error for BoundaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Classification(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClassificationError> for BoundaryError {
    fn from(e: ClassificationError) -> Self {
        Self::Classification(e)
    }
}
