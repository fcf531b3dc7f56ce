//! Error types shared across the Eddy workspace.
//!
//! Velocity-set validation failures and persistence codec failures.
//! Subsystem-specific errors (classification, boundary configuration,
//! base-model parameters) live in their own crates.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from [`VelocitySet::validate()`](crate::VelocitySet::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Dimension must be 2 or 3.
    UnsupportedDimension {
        /// The declared dimension.
        d: usize,
    },
    /// Velocity, weight, and opposite tables disagree on Q.
    TableLengthMismatch {
        /// Length of the velocity table.
        velocities: usize,
        /// Length of the weight table.
        weights: usize,
        /// Length of the opposite table.
        opposites: usize,
    },
    /// A velocity has a non-zero component beyond the declared dimension.
    ComponentBeyondDimension {
        /// Population index.
        index: usize,
    },
    /// `opposite[i]` is out of range or `c[i] != -c[opposite[i]]`.
    BrokenOpposite {
        /// Population index.
        index: usize,
        /// The recorded opposite.
        opposite: usize,
    },
    /// Weights do not sum to one.
    WeightSum {
        /// The actual sum, formatted for display.
        sum: String,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension { d } => {
                write!(f, "unsupported lattice dimension {d} (expected 2 or 3)")
            }
            Self::TableLengthMismatch {
                velocities,
                weights,
                opposites,
            } => write!(
                f,
                "table lengths disagree: {velocities} velocities, \
                 {weights} weights, {opposites} opposites"
            ),
            Self::ComponentBeyondDimension { index } => {
                write!(f, "velocity {index} has a component beyond the lattice dimension")
            }
            Self::BrokenOpposite { index, opposite } => {
                write!(f, "opposite({index}) = {opposite} does not negate c[{index}]")
            }
            Self::WeightSum { sum } => write!(f, "weights sum to {sum}, expected 1"),
        }
    }
}

impl Error for LatticeError {}

/// Errors from the persistence codec.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A boolean flag byte was neither 0 nor 1.
    InvalidBool {
        /// The byte found in the stream.
        byte: u8,
    },
    /// A decoded parameter is outside its valid range.
    InvalidParameter {
        /// Description of the offending value.
        detail: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidBool { byte } => write!(f, "invalid bool byte {byte:#04x}"),
            Self::InvalidParameter { detail } => write!(f, "invalid parameter: {detail}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
