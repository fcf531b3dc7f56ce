//! Strongly-typed identifiers and small fixed-size moment types.

use std::fmt;

/// Identifies a dynamics type for polymorphic persistence and dispatch.
///
/// Assigned densely by the dynamics registry in registration order.
/// `DynamicsId(n)` corresponds to the n-th registered type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DynamicsId(pub u32);

impl fmt::Display for DynamicsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DynamicsId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A first-order moment (flux) vector.
///
/// Always three components; 2D lattices leave the last one at zero.
pub type Flux = [f64; 3];

/// Placeholder for the symmetric second-order non-equilibrium tensor.
///
/// Six components cover the 3D case; 2D uses the first three
/// (`xx`, `xy`, `yy`).
pub type PiNeq = [f64; 6];

/// Squared Euclidean norm of a flux vector.
#[inline]
pub fn norm_sqr(v: &Flux) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}
