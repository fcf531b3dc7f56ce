//! Benchmark profiles and utilities for the Eddy boundary-closure framework.
//!
//! Provides pre-built capsules and cell batches for benchmarking:
//!
//! - [`wall_profile`]: one flat-wall capsule of a given closure kind
//! - [`corner_profile`]: a 3D corner capsule on D3Q7
//! - [`boundary_cells`]: a deterministic batch of non-equilibrium cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_boundary::{BoundaryDynamics, BoundaryGeometry, ClosureKind};
use eddy_core::{Cell, VelocitySet};
use eddy_dynamics::AdvectionDiffusionBgk;

/// Any failure while assembling a profile.
pub type ProfileError = Box<dyn std::error::Error + Send + Sync>;

/// Relaxation frequency used by every profile.
pub const OMEGA: f64 = 1.2;

/// Build a capsule for the `+x` wall of `lattice` with the given closure
/// over a BGK base model.
pub fn wall_profile(
    lattice: &'static VelocitySet,
    closure: ClosureKind,
) -> Result<BoundaryDynamics, ProfileError> {
    let base = AdvectionDiffusionBgk::new(lattice, OMEGA)?;
    BoundaryDynamics::builder()
        .geometry(BoundaryGeometry::FlatWall {
            axis: 0,
            orientation: 1,
        })
        .closure(closure)
        .density(1.1)
        .build(Box::new(base))
        .map_err(Into::into)
}

/// Build a `(+1, +1, +1)` corner capsule on `lattice`.
pub fn corner_profile(lattice: &'static VelocitySet) -> Result<BoundaryDynamics, ProfileError> {
    let base = AdvectionDiffusionBgk::new(lattice, OMEGA)?;
    BoundaryDynamics::builder()
        .geometry(BoundaryGeometry::Corner3D {
            x_normal: 1,
            y_normal: 1,
            z_normal: 1,
        })
        .closure(ClosureKind::Corner)
        .build(Box::new(base))
        .map_err(Into::into)
}

/// Generate `n` cells with distinct, deterministic populations and
/// velocities derived from `seed`.
///
/// Uses a simple xorshift stream; values stay within ±0.05 of the
/// rest state.
pub fn boundary_cells(lattice: &VelocitySet, n: usize, seed: u64) -> Vec<Cell> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
    };
    (0..n)
        .map(|_| {
            let mut cell = Cell::new(lattice);
            for i in 0..lattice.q() {
                cell[i] = 0.1 * next();
            }
            cell.set_velocity([0.1 * next(), 0.1 * next(), 0.1 * next()]);
            cell
        })
        .collect()
}
