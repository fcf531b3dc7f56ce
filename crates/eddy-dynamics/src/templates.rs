//! First-order (Mach 1) equilibrium and moment helpers shared by the
//! reference models.
//!
//! ```text
//! f_eq[i] = t[i] * (rho_bar + inv_cs2 * c[i] · j)
//! ```

use eddy_core::{Cell, Flux, VelocitySet};

/// First-order equilibrium of population `i`.
#[inline]
pub fn ma1_equilibrium(lattice: &VelocitySet, i: usize, rho_bar: f64, j: &Flux) -> f64 {
    lattice.t(i) * (rho_bar + lattice.inv_cs2() * lattice.dot(i, j))
}

/// Zeroth and first moments of the stored populations.
pub fn rho_bar_j(lattice: &VelocitySet, cell: &Cell) -> (f64, Flux) {
    let mut rho_bar = 0.0;
    let mut j = [0.0; 3];
    for (i, &fi) in cell.populations().iter().enumerate() {
        rho_bar += fi;
        let ci = lattice.c(i);
        for a in 0..lattice.d() {
            j[a] += ci[a] as f64 * fi;
        }
    }
    (rho_bar, j)
}

/// Overwrite every population with the first-order equilibrium of
/// `(rho_bar, j)`.
///
/// The resulting populations have exactly `rho_bar` as zeroth moment
/// and `j` as first moment on isotropic sets.
pub fn ma1_regularize(lattice: &VelocitySet, cell: &mut Cell, rho_bar: f64, j: &Flux) {
    for i in 0..lattice.q() {
        cell[i] = ma1_equilibrium(lattice, i, rho_bar, j);
    }
}
