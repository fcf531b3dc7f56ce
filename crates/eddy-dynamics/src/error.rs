//! Error types for base-model construction.

use std::fmt;

/// Errors arising from collision-model construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The relaxation frequency is outside the stable range `(0, 2)`.
    InvalidOmega {
        /// The offending value.
        omega: f64,
    },
    /// The velocity set failed validation.
    InvalidLattice {
        /// Name of the velocity set.
        name: &'static str,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOmega { omega } => {
                write!(f, "omega must be finite and in (0, 2), got {omega}")
            }
            Self::InvalidLattice { name, reason } => {
                write!(f, "invalid velocity set {name}: {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Validate a relaxation frequency.
pub(crate) fn check_omega(omega: f64) -> Result<f64, ModelError> {
    if omega.is_finite() && omega > 0.0 && omega < 2.0 {
        Ok(omega)
    } else {
        Err(ModelError::InvalidOmega { omega })
    }
}
