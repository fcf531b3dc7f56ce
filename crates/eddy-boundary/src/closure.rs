//! Closure algorithms: rebuild unknown populations after streaming.
//!
//! Every closure reads its moments through a [`CollisionModel`], so the
//! same code serves a bare base model and a boundary capsule that
//! overrides the density. Closures are `O(Q)`, allocation-free, and do
//! no validation; the classification they receive is trusted.
//!
//! | Closure | Rewrites | Geometry |
//! |---------|----------|----------|
//! | [`density_closure`] | normal unknown | flat wall |
//! | [`regularized_closure`] | normal unknown | flat wall |
//! | [`full_regularized_closure`] | all populations | flat wall |
//! | [`complete_regularized_closure`] | all populations | flat wall |
//! | [`corner_closure`] | every unknown | corner, edge |

use eddy_core::id::norm_sqr;
use eddy_core::{Cell, CollisionModel, Flux};

use crate::classify::Classification;
use crate::templates::compute_j_neq;

/// Set the normal unknown so the populations sum to the model's density.
///
/// ```text
/// f[normal] = rho_bar(model.compute_density(cell)) - Σ_known f[i]
/// ```
///
/// The sum is exact only when `normal` is the single unknown, as on
/// D2Q5 and D3Q7 walls.
pub fn density_closure<M: CollisionModel + ?Sized>(
    cell: &mut Cell,
    model: &M,
    known: &[usize],
    normal: usize,
) {
    let rho_bar = model.lattice().rho_bar(model.compute_density(cell));
    let sum_known: f64 = known.iter().map(|&i| cell[i]).sum();
    cell[normal] = rho_bar - sum_known;
}

/// First-order anti-bounce-back of the normal unknown.
///
/// ```text
/// j_eq      = full_rho(rho_bar) * u
/// f[normal] = f_eq[normal] - (f[opp] - f_eq[opp])
/// ```
pub fn regularized_closure<M: CollisionModel + ?Sized>(cell: &mut Cell, model: &M, normal: usize) {
    anti_bounce_back(cell, model, std::slice::from_ref(&normal));
}

/// Anti-bounce-back of every unknown population, for corners and edges.
///
/// Each unknown depends only on its opposite, which is known, so the
/// order of `unknown` does not matter.
pub fn corner_closure<M: CollisionModel + ?Sized>(cell: &mut Cell, model: &M, unknown: &[usize]) {
    anti_bounce_back(cell, model, unknown);
}

fn anti_bounce_back<M: CollisionModel + ?Sized>(cell: &mut Cell, model: &M, unknown: &[usize]) {
    let lattice = model.lattice();
    let rho_bar = model.compute_rho_bar(cell);
    let j_eq = model.lattice().equilibrium_flux(rho_bar, &cell.velocity());
    let j_sqr = norm_sqr(&j_eq);
    for &i in unknown {
        let opp = lattice.opposite(i);
        let f_eq = model.equilibrium(i, rho_bar, &j_eq, j_sqr);
        let f_eq_opp = model.equilibrium(opp, rho_bar, &j_eq, j_sqr);
        cell[i] = f_eq - (cell[opp] - f_eq_opp);
    }
}

/// Rebuild every population from the model's scalar moment and a
/// reconstructed flux.
///
/// ```text
/// phi_bar = model.compute_rho_bar(cell)
/// j_eq    = full_rho(phi_bar) * u
/// j_neq   = compute_j_neq(...)
/// model.regularize(cell, phi_bar, j_eq + j_neq, 0, 0)
/// ```
pub fn full_regularized_closure<M: CollisionModel + ?Sized>(
    cell: &mut Cell,
    model: &M,
    classification: &Classification,
) {
    let phi_bar = model.compute_rho_bar(cell);
    regularize_from_moment(cell, model, classification, phi_bar, phi_bar);
}

/// [`full_regularized_closure`] with the moment coupled to the carrier
/// flow's density, read from the cell's `RhoBar` field.
///
/// ```text
/// rho_phi_bar = rho_bar(full_rho(rho_bar_ext) * full_rho(phi_bar))
/// ```
///
/// The equilibrium flux still uses `phi_bar` alone.
pub fn complete_regularized_closure<M: CollisionModel + ?Sized>(
    cell: &mut Cell,
    model: &M,
    classification: &Classification,
) {
    let lattice = model.lattice();
    let phi_bar = model.compute_rho_bar(cell);
    let rho_bar = cell.external_rho_bar();
    let rho_phi_bar = lattice.rho_bar(lattice.full_rho(rho_bar) * lattice.full_rho(phi_bar));
    regularize_from_moment(cell, model, classification, phi_bar, rho_phi_bar);
}

fn regularize_from_moment<M: CollisionModel + ?Sized>(
    cell: &mut Cell,
    model: &M,
    classification: &Classification,
    phi_bar: f64,
    moment: f64,
) {
    let j_eq = model.lattice().equilibrium_flux(phi_bar, &cell.velocity());
    let j_sqr = norm_sqr(&j_eq);
    let j_neq = compute_j_neq(model, cell, classification, moment, &j_eq, j_sqr);
    let mut j: Flux = [0.0; 3];
    for a in 0..3 {
        j[a] = j_eq[a] + j_neq[a];
    }
    model.regularize(cell, moment, &j, 0.0, &[0.0; 6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::geometry::BoundaryGeometry;
    use eddy_core::{D2Q5, D3Q7};
    use eddy_test_utils::{
        equilibrium_cell, first_order_equilibrium, patterned_cell, MockCollisionModel,
    };

    fn wall(axis: usize, orientation: i32) -> BoundaryGeometry {
        BoundaryGeometry::FlatWall { axis, orientation }
    }

    #[test]
    fn density_closure_is_identity_when_model_agrees() {
        // The mock's density is the cell's own total, so the closure
        // recovers whatever the normal already held.
        let model = MockCollisionModel::new(&D2Q5);
        let cls = classify(wall(0, 1), &D2Q5).unwrap();
        let mut cell = patterned_cell(&D2Q5, 0.1, 0.05);
        let before = cell.clone();
        density_closure(&mut cell, &model, cls.known(), 1);
        assert!((cell[1] - before[1]).abs() < 1e-15);
    }

    #[test]
    fn equilibrium_cell_is_a_fixed_point_of_every_flat_closure() {
        let model = MockCollisionModel::new(&D2Q5);
        let u = [0.02, 0.01, 0.0];
        for (axis, orientation) in [(0, 1), (0, -1), (1, 1), (1, -1)] {
            let cls = classify(wall(axis, orientation), &D2Q5).unwrap();
            let normal = cls.normal().unwrap();
            let reference = equilibrium_cell(&D2Q5, 1.0, u);

            let mut cell = reference.clone();
            regularized_closure(&mut cell, &model, normal);
            assert!((cell[normal] - reference[normal]).abs() < 1e-14);

            let mut cell = reference.clone();
            full_regularized_closure(&mut cell, &model, &cls);
            for i in 0..D2Q5.q() {
                assert!((cell[i] - reference[i]).abs() < 1e-14, "population {i}");
            }
        }
    }

    #[test]
    fn regularized_closure_mirrors_opposite_non_equilibrium() {
        let model = MockCollisionModel::new(&D2Q5);
        let mut cell = patterned_cell(&D2Q5, 0.05, 0.02);
        cell.set_velocity([0.04, 0.0, 0.0]);
        let normal = 2;
        let opp = D2Q5.opposite(normal);
        let before = cell.clone();
        regularized_closure(&mut cell, &model, normal);

        // Moments are taken before the write to f[normal].
        let rho_bar = before.populations().iter().sum::<f64>();
        let rho = D2Q5.full_rho(rho_bar);
        let j_eq = [rho * 0.04, 0.0, 0.0];
        let expected = first_order_equilibrium(&D2Q5, normal, rho_bar, &j_eq)
            + first_order_equilibrium(&D2Q5, opp, rho_bar, &j_eq);
        assert!((cell[normal] + cell[opp] - expected).abs() < 1e-14);
    }

    #[test]
    fn corner_closure_leaves_known_populations_untouched() {
        let model = MockCollisionModel::new(&D3Q7);
        let corner = BoundaryGeometry::Corner3D {
            x_normal: -1,
            y_normal: 1,
            z_normal: -1,
        };
        let cls = classify(corner, &D3Q7).unwrap();
        let mut cell = patterned_cell(&D3Q7, -0.02, 0.013);
        cell.set_velocity([0.01, 0.02, -0.03]);
        let before = cell.clone();
        corner_closure(&mut cell, &model, cls.unknown());
        for &i in cls.known() {
            assert_eq!(cell[i].to_bits(), before[i].to_bits(), "population {i}");
        }
        for &i in cls.unknown() {
            assert_ne!(cell[i], before[i], "population {i}");
        }
    }

    #[test]
    fn full_regularized_reproduces_reconstructed_moments() {
        let model = MockCollisionModel::new(&D3Q7);
        let cls = classify(wall(2, -1), &D3Q7).unwrap();
        let mut cell = patterned_cell(&D3Q7, 0.01, 0.007);
        let u = [0.01, -0.02, 0.015];
        cell.set_velocity(u);

        let phi_bar = model.compute_rho_bar(&cell);
        let j_eq = model.lattice().equilibrium_flux(phi_bar, &u);
        let j_neq = compute_j_neq(&model, &cell, &cls, phi_bar, &j_eq, norm_sqr(&j_eq));

        full_regularized_closure(&mut cell, &model, &cls);
        let (rho_bar, j) = model.compute_rho_bar_j(&cell);
        assert!((rho_bar - phi_bar).abs() < 1e-14);
        for a in 0..3 {
            assert!((j[a] - (j_eq[a] + j_neq[a])).abs() < 1e-14, "axis {a}");
        }
        assert_eq!(model.counters().regularizes(), 1);
    }

    #[test]
    fn complete_regularized_couples_moment_to_carrier_density() {
        let model = MockCollisionModel::new(&D2Q5);
        let cls = classify(wall(1, 1), &D2Q5).unwrap();
        let mut cell = patterned_cell(&D2Q5, 0.02, 0.01);
        cell.set_external_rho_bar(0.5);
        let phi_bar = model.compute_rho_bar(&cell);

        complete_regularized_closure(&mut cell, &model, &cls);
        let expected = (1.5 * (1.0 + phi_bar)) - 1.0;
        assert!((model.compute_rho_bar(&cell) - expected).abs() < 1e-14);
    }

    #[test]
    fn complete_regularized_with_unit_carrier_matches_plain() {
        let model = MockCollisionModel::new(&D2Q5);
        let cls = classify(wall(0, -1), &D2Q5).unwrap();
        let mut plain = patterned_cell(&D2Q5, 0.03, -0.01);
        plain.set_velocity([0.01, 0.03, 0.0]);
        let mut coupled = plain.clone();
        coupled.set_external_rho_bar(0.0);

        full_regularized_closure(&mut plain, &model, &cls);
        complete_regularized_closure(&mut coupled, &model, &cls);
        for i in 0..D2Q5.q() {
            assert!((plain[i] - coupled[i]).abs() < 1e-15, "population {i}");
        }
    }
}
