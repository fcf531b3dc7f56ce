//! Moment helpers shared by the boundary closures.

use eddy_core::{Cell, CollisionModel, Flux};

use crate::classify::Classification;

/// Non-equilibrium flux estimated at a boundary cell.
///
/// Known populations contribute their own non-equilibrium part. Each
/// unknown population contributes the non-equilibrium part of its
/// opposite, carried along the opposite's velocity:
/// ```text
/// j_neq = Σ_known c[i] (f[i] - f_eq[i]) + Σ_unknown c[opp(i)] (f[opp(i)] - f_eq[opp(i)])
/// ```
/// Unknown populations themselves are never read.
pub fn compute_j_neq<M: CollisionModel + ?Sized>(
    model: &M,
    cell: &Cell,
    classification: &Classification,
    rho_bar: f64,
    j_eq: &Flux,
    j_sqr: f64,
) -> Flux {
    let lattice = model.lattice();
    let mut j_neq = [0.0; 3];
    let mut accumulate = |i: usize| {
        let f_neq = cell[i] - model.equilibrium(i, rho_bar, j_eq, j_sqr);
        let c = lattice.c(i);
        for a in 0..lattice.d() {
            j_neq[a] += c[a] as f64 * f_neq;
        }
    };
    for &i in classification.known() {
        accumulate(i);
    }
    for &i in classification.unknown() {
        accumulate(lattice.opposite(i));
    }
    j_neq
}
