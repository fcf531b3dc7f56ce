//! First-order BGK advection-diffusion model.

use std::io::{Read, Write};

use eddy_core::codec::{read_f64_le, write_f64_le};
use eddy_core::{Cell, CodecError, CollisionModel, Flux, PiNeq, VelocitySet};

use crate::error::{check_omega, ModelError};
use crate::templates::{ma1_equilibrium, ma1_regularize, rho_bar_j};

/// Single-relaxation-time model for a passive scalar advected by the
/// cell's external velocity.
///
/// Each collision computes:
/// ```text
/// j_eq  = full_rho(rho_bar) * u
/// f[i] -= omega * (f[i] - f_eq[i](rho_bar, j_eq))
/// ```
///
/// # Examples
///
/// ```
/// use eddy_core::{Cell, CollisionModel, D2Q5};
/// use eddy_dynamics::AdvectionDiffusionBgk;
///
/// let bgk = AdvectionDiffusionBgk::new(&D2Q5, 1.2).unwrap();
/// let mut cell = Cell::from_populations(&D2Q5, &[0.2, 0.1, 0.0, 0.05, 0.0]);
/// let before = bgk.compute_rho_bar(&cell);
/// bgk.collide(&mut cell);
/// assert!((bgk.compute_rho_bar(&cell) - before).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct AdvectionDiffusionBgk {
    lattice: &'static VelocitySet,
    omega: f64,
}

impl AdvectionDiffusionBgk {
    /// Registered type name.
    pub const NAME: &'static str = "AdvectionDiffusionBGK";

    /// Create a model on `lattice` with relaxation frequency `omega`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOmega`] unless `0 < omega < 2`, and
    /// [`ModelError::InvalidLattice`] if the velocity set fails validation.
    pub fn new(lattice: &'static VelocitySet, omega: f64) -> Result<Self, ModelError> {
        lattice
            .validate()
            .map_err(|e| ModelError::InvalidLattice {
                name: lattice.name(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            lattice,
            omega: check_omega(omega)?,
        })
    }

    /// Relaxation frequency.
    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl CollisionModel for AdvectionDiffusionBgk {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn lattice(&self) -> &'static VelocitySet {
        self.lattice
    }

    fn collide(&self, cell: &mut Cell) {
        let lattice = self.lattice;
        let rho_bar = self.compute_rho_bar(cell);
        let j_eq = lattice.equilibrium_flux(rho_bar, &cell.velocity());
        for i in 0..lattice.q() {
            let feq = ma1_equilibrium(lattice, i, rho_bar, &j_eq);
            cell[i] -= self.omega * (cell[i] - feq);
        }
    }

    fn compute_rho_bar(&self, cell: &Cell) -> f64 {
        cell.populations().iter().sum()
    }

    fn compute_rho_bar_j(&self, cell: &Cell) -> (f64, Flux) {
        rho_bar_j(self.lattice, cell)
    }

    fn equilibrium(&self, i: usize, rho_bar: f64, j: &Flux, _j_sqr: f64) -> f64 {
        ma1_equilibrium(self.lattice, i, rho_bar, j)
    }

    fn regularize(
        &self,
        cell: &mut Cell,
        rho_bar: f64,
        j: &Flux,
        _theta_bar: f64,
        _pi_neq: &PiNeq,
    ) {
        ma1_regularize(self.lattice, cell, rho_bar, j);
    }

    fn box_clone(&self) -> Box<dyn CollisionModel> {
        Box::new(self.clone())
    }

    fn serialize(&self, w: &mut dyn Write) -> Result<(), CodecError> {
        write_f64_le(w, self.omega)
    }

    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), CodecError> {
        let omega = read_f64_le(r)?;
        self.omega = check_omega(omega).map_err(|e| CodecError::InvalidParameter {
            detail: e.to_string(),
        })?;
        Ok(())
    }
}
