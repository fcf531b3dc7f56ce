//! Reusable cell fixtures.
//!
//! - [`equilibrium_cell`]: every population at its first-order equilibrium.
//! - [`patterned_cell`]: distinct, non-equilibrium values per population.

use eddy_core::{Cell, Flux, VelocitySet};

/// `t[i] * (rho_bar + inv_cs2 * c[i] · j)`.
pub fn first_order_equilibrium(lattice: &VelocitySet, i: usize, rho_bar: f64, j: &Flux) -> f64 {
    lattice.t(i) * (rho_bar + lattice.inv_cs2() * lattice.dot(i, j))
}

/// A cell at equilibrium for `(rho_bar, u)`, with `u` stored as its
/// external velocity.
pub fn equilibrium_cell(lattice: &VelocitySet, rho_bar: f64, u: Flux) -> Cell {
    let rho = lattice.full_rho(rho_bar);
    let j = [rho * u[0], rho * u[1], rho * u[2]];
    let mut cell = Cell::new(lattice);
    cell.set_velocity(u);
    for i in 0..lattice.q() {
        cell[i] = first_order_equilibrium(lattice, i, rho_bar, &j);
    }
    cell
}

/// A cell whose population `i` holds `base + step * i`.
///
/// Every value is distinct, which makes accidental writes to the wrong
/// index visible.
pub fn patterned_cell(lattice: &VelocitySet, base: f64, step: f64) -> Cell {
    let mut cell = Cell::new(lattice);
    for i in 0..lattice.q() {
        cell[i] = base + step * i as f64;
    }
    cell
}
