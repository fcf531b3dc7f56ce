//! The per-cell population container.

use std::ops::{Index, IndexMut};

use smallvec::{smallvec, SmallVec};

use crate::id::Flux;
use crate::lattice::VelocitySet;

/// Named external fields carried by a cell alongside its populations.
///
/// Layout inside the external buffer: `Velocity` occupies the first `d`
/// slots, `RhoBar` the slot after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExternalField {
    /// Advecting velocity, `d` components.
    Velocity,
    /// Reduced density of the carrier flow, one component.
    RhoBar,
}

/// One lattice cell: `Q` populations plus its external fields.
///
/// Indexing a population out of range panics; the grid that owns the
/// cell is responsible for sizing it against the velocity set in use.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    f: SmallVec<[f64; 19]>,
    external: SmallVec<[f64; 4]>,
    d: usize,
}

impl Cell {
    /// A cell sized for `lattice`, with all populations and fields zero.
    ///
    /// Because populations are stored offset by their weight, an all-zero
    /// cell is at rest with `rho = 1`.
    pub fn new(lattice: &VelocitySet) -> Self {
        Self {
            f: smallvec![0.0; lattice.q()],
            external: smallvec![0.0; lattice.d() + 1],
            d: lattice.d(),
        }
    }

    /// Build a cell from explicit population values.
    ///
    /// # Panics
    ///
    /// Panics if `populations.len() != lattice.q()`.
    pub fn from_populations(lattice: &VelocitySet, populations: &[f64]) -> Self {
        assert_eq!(
            populations.len(),
            lattice.q(),
            "population count does not match {}",
            lattice.name()
        );
        let mut cell = Self::new(lattice);
        cell.f.copy_from_slice(populations);
        cell
    }

    /// Number of populations.
    pub fn q(&self) -> usize {
        self.f.len()
    }

    /// All populations, in lattice order.
    pub fn populations(&self) -> &[f64] {
        &self.f
    }

    /// Mutable view of all populations.
    pub fn populations_mut(&mut self) -> &mut [f64] {
        &mut self.f
    }

    /// Read a named external field.
    pub fn external(&self, field: ExternalField) -> &[f64] {
        match field {
            ExternalField::Velocity => &self.external[..self.d],
            ExternalField::RhoBar => &self.external[self.d..=self.d],
        }
    }

    /// Overwrite a named external field.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have exactly the field's width.
    pub fn set_external(&mut self, field: ExternalField, values: &[f64]) {
        let d = self.d;
        match field {
            ExternalField::Velocity => self.external[..d].copy_from_slice(values),
            ExternalField::RhoBar => self.external[d..=d].copy_from_slice(values),
        }
    }

    /// The external velocity as a three-component flux-shaped vector.
    pub fn velocity(&self) -> Flux {
        let mut u = [0.0; 3];
        u[..self.d].copy_from_slice(&self.external[..self.d]);
        u
    }

    /// Convenience setter for the external velocity; extra components
    /// beyond the cell dimension are ignored.
    pub fn set_velocity(&mut self, u: Flux) {
        let d = self.d;
        self.external[..d].copy_from_slice(&u[..d]);
    }

    /// The carrier-flow reduced density.
    pub fn external_rho_bar(&self) -> f64 {
        self.external[self.d]
    }

    /// Convenience setter for the carrier-flow reduced density.
    pub fn set_external_rho_bar(&mut self, rho_bar: f64) {
        let d = self.d;
        self.external[d] = rho_bar;
    }
}

impl Index<usize> for Cell {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.f[i]
    }
}

impl IndexMut<usize> for Cell {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.f[i]
    }
}
