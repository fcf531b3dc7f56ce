//! Regularized BGK advection-diffusion model.

use std::io::{Read, Write};

use eddy_core::codec::{read_f64_le, write_f64_le};
use eddy_core::{Cell, CodecError, CollisionModel, Flux, PiNeq, VelocitySet};

use crate::error::{check_omega, ModelError};
use crate::templates::{ma1_equilibrium, ma1_regularize, rho_bar_j};

/// Regularized single-relaxation-time model.
///
/// Discards every non-equilibrium contribution except the first-order
/// flux before relaxing:
/// ```text
/// j_neq = j - j_eq
/// f[i]  = f_eq[i](rho_bar, j_eq) + (1 - omega) * t[i] * inv_cs2 * c[i] · j_neq
/// ```
#[derive(Clone, Debug)]
pub struct AdvectionDiffusionRlb {
    lattice: &'static VelocitySet,
    omega: f64,
}

impl AdvectionDiffusionRlb {
    /// Registered type name.
    pub const NAME: &'static str = "AdvectionDiffusionRLB";

    /// Create a model on `lattice` with relaxation frequency `omega`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AdvectionDiffusionBgk::new`](crate::AdvectionDiffusionBgk::new).
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

impl CollisionModel for AdvectionDiffusionRlb {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn lattice(&self) -> &'static VelocitySet {
        self.lattice
    }

    fn collide(&self, cell: &mut Cell) {
        let lattice = self.lattice;
        let (rho_bar, j) = rho_bar_j(lattice, cell);
        let j_eq = lattice.equilibrium_flux(rho_bar, &cell.velocity());
        let mut j_neq = [0.0; 3];
        for a in 0..lattice.d() {
            j_neq[a] = j[a] - j_eq[a];
        }
        let relax = 1.0 - self.omega;
        for i in 0..lattice.q() {
            cell[i] = ma1_equilibrium(lattice, i, rho_bar, &j_eq)
                + relax * lattice.t(i) * lattice.inv_cs2() * lattice.dot(i, &j_neq);
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

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::D2Q5;

    #[test]
    fn collide_relaxes_flux_toward_equilibrium() {
        let rlb = AdvectionDiffusionRlb::new(&D2Q5, 0.5).unwrap();
        let mut cell = Cell::from_populations(&D2Q5, &[0.1, 0.0, 0.0, 0.2, 0.0]);
        let (rho_bar, j_before) = rlb.compute_rho_bar_j(&cell);
        rlb.collide(&mut cell);
        let (rho_after, j_after) = rlb.compute_rho_bar_j(&cell);

        // u = 0 so j_eq = 0 and the flux halves with omega = 0.5.
        assert!((rho_after - rho_bar).abs() < 1e-14);
        assert!((j_after[0] - 0.5 * j_before[0]).abs() < 1e-14);
        assert!(j_after[1].abs() < 1e-14);
    }

    #[test]
    fn omega_one_lands_on_equilibrium() {
        let rlb = AdvectionDiffusionRlb::new(&D2Q5, 1.0).unwrap();
        let mut cell = Cell::from_populations(&D2Q5, &[0.3, 0.1, -0.2, 0.0, 0.4]);
        cell.set_velocity([0.02, 0.01, 0.0]);
        let rho_bar = rlb.compute_rho_bar(&cell);
        rlb.collide(&mut cell);
        let j_eq = D2Q5.equilibrium_flux(rho_bar, &[0.02, 0.01, 0.0]);
        for i in 0..D2Q5.q() {
            let feq = rlb.equilibrium(i, rho_bar, &j_eq, 0.0);
            assert!((cell[i] - feq).abs() < 1e-14, "population {i}");
        }
    }
}
