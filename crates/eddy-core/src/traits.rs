//! The collision-model capability trait.

use std::io::{Read, Write};

use crate::cell::Cell;
use crate::error::CodecError;
use crate::id::{Flux, PiNeq};
use crate::lattice::VelocitySet;

/// Local dynamics attached to a cell: bulk collision plus the moment and
/// equilibrium queries that boundary closures are built on.
///
/// # Contract
///
/// - `collide()` and every query MUST be deterministic.
/// - `&self` everywhere except `deserialize()`: one instance may be shared
///   across many cells and threads; per-cell state lives in the [`Cell`].
/// - `serialize()` followed by `deserialize()` on a freshly constructed
///   instance of the same type restores every parameter.
///
/// # Object safety
///
/// This trait is object-safe; boundary capsules own their wrapped model
/// as `Box<dyn CollisionModel>`.
pub trait CollisionModel: Send + Sync + 'static {
    /// Registered type name, used for persistence and diagnostics.
    fn name(&self) -> &str;

    /// The velocity set this model operates on.
    fn lattice(&self) -> &'static VelocitySet;

    /// Execute one bulk collision on `cell` in place.
    fn collide(&self, cell: &mut Cell);

    /// Reduced density of `cell` (zeroth moment of the stored populations).
    fn compute_rho_bar(&self, cell: &Cell) -> f64;

    /// Physical density of `cell`.
    fn compute_density(&self, cell: &Cell) -> f64 {
        self.lattice().full_rho(self.compute_rho_bar(cell))
    }

    /// Reduced density and first moment of `cell`.
    fn compute_rho_bar_j(&self, cell: &Cell) -> (f64, Flux);

    /// Equilibrium value of population `i` for the given moments.
    fn equilibrium(&self, i: usize, rho_bar: f64, j: &Flux, j_sqr: f64) -> f64;

    /// Overwrite every population of `cell` from the given moments.
    ///
    /// `theta_bar` and `pi_neq` are the higher-moment inputs; scalar
    /// transport models may ignore them.
    fn regularize(&self, cell: &mut Cell, rho_bar: f64, j: &Flux, theta_bar: f64, pi_neq: &PiNeq);

    /// Clone into a new boxed instance.
    fn box_clone(&self) -> Box<dyn CollisionModel>;

    /// Write this model's parameters to `w`.
    fn serialize(&self, w: &mut dyn Write) -> Result<(), CodecError>;

    /// Restore this model's parameters from `r`.
    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), CodecError>;
}

impl Clone for Box<dyn CollisionModel> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
