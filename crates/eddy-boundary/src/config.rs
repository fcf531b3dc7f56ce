//! Boundary capsule configuration and validation.
//!
//! [`BoundaryConfig`] is the builder-input for a
//! [`BoundaryDynamics`](crate::BoundaryDynamics).
//! [`validate()`](BoundaryConfig::validate) checks every structural
//! invariant against a velocity set and returns the classification the
//! capsule keeps for its lifetime.

use eddy_core::VelocitySet;

use crate::classify::{classify, Classification};
use crate::error::BoundaryError;
use crate::geometry::{BoundaryGeometry, BoundaryKind, ClosureKind};

/// Default prescribed density (`rho_bar = 0`).
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Complete configuration for one boundary capsule.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryConfig {
    /// Where the boundary sits.
    pub geometry: BoundaryGeometry,
    /// Reconstruction applied after collision.
    pub closure: ClosureKind,
    /// Preparation flag carried for the engine. Default: `true`.
    pub automatic_prepare_collision: bool,
    /// Prescribed density seen by the closures. Default: 1.0.
    pub density: f64,
}

impl BoundaryConfig {
    /// A configuration with default flag and density.
    pub fn new(geometry: BoundaryGeometry, closure: ClosureKind) -> Self {
        Self {
            geometry,
            closure,
            automatic_prepare_collision: true,
            density: DEFAULT_DENSITY,
        }
    }

    /// Static type identity of the capsule this configuration builds.
    pub fn kind(&self) -> BoundaryKind {
        BoundaryKind::new(self.geometry, self.closure)
    }

    /// Validate against `lattice` and classify the geometry.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, in the order checked below.
    pub fn validate(&self, lattice: &VelocitySet) -> Result<Classification, BoundaryError> {
        // 1. The velocity set itself must be well formed.
        lattice
            .validate()
            .map_err(|e| BoundaryError::InvalidLattice {
                name: lattice.name(),
                reason: e.to_string(),
            })?;
        // 2. Closure must fit the geometry.
        if !self.closure.supports(&self.geometry) {
            return Err(BoundaryError::UnsupportedClosure {
                closure: self.closure,
                geometry: self.geometry,
            });
        }
        // 3. Density must be finite.
        if !self.density.is_finite() {
            return Err(BoundaryError::InvalidDensity {
                value: self.density,
            });
        }
        // 4. Geometry must classify on this lattice.
        Ok(classify(self.geometry, lattice)?)
    }
}
