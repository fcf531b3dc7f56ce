//! Test utilities and mock types for Eddy development.
//!
//! Provides a counting mock implementation of [`CollisionModel`] and
//! cell fixtures in [`fixtures`] for constructing closure scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eddy_core::codec::{read_f64_le, write_f64_le};
use eddy_core::{Cell, CodecError, CollisionModel, Flux, PiNeq, VelocitySet};

pub use fixtures::{equilibrium_cell, first_order_equilibrium, patterned_cell};

/// Shared call counters for a [`MockCollisionModel`] and all its clones.
#[derive(Debug, Default)]
pub struct MockCounters {
    collide: AtomicUsize,
    regularize: AtomicUsize,
}

impl MockCounters {
    /// How many times `collide()` has been called.
    pub fn collides(&self) -> usize {
        self.collide.load(Ordering::Relaxed)
    }

    /// How many times `regularize()` has been called.
    pub fn regularizes(&self) -> usize {
        self.regularize.load(Ordering::Relaxed)
    }
}

/// Mock implementation of [`CollisionModel`].
///
/// Equilibrium and regularization are first order, like the reference
/// models. `collide()` scales every population by `collide_scale`
/// (default 1.0) so tests can tell whether a closure ran before or
/// after collision. Counters survive `box_clone()`.
#[derive(Clone, Debug)]
pub struct MockCollisionModel {
    lattice: &'static VelocitySet,
    collide_scale: f64,
    counters: Arc<MockCounters>,
}

impl MockCollisionModel {
    pub const NAME: &'static str = "MockCollisionModel";

    pub fn new(lattice: &'static VelocitySet) -> Self {
        Self {
            lattice,
            collide_scale: 1.0,
            counters: Arc::new(MockCounters::default()),
        }
    }

    /// Set the factor `collide()` multiplies every population by.
    pub fn with_collide_scale(mut self, scale: f64) -> Self {
        self.collide_scale = scale;
        self
    }

    pub fn collide_scale(&self) -> f64 {
        self.collide_scale
    }

    /// Handle on the call counters, shared with every clone.
    pub fn counters(&self) -> Arc<MockCounters> {
        Arc::clone(&self.counters)
    }
}

impl CollisionModel for MockCollisionModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn lattice(&self) -> &'static VelocitySet {
        self.lattice
    }

    fn collide(&self, cell: &mut Cell) {
        self.counters.collide.fetch_add(1, Ordering::Relaxed);
        for v in cell.populations_mut() {
            *v *= self.collide_scale;
        }
    }

    fn compute_rho_bar(&self, cell: &Cell) -> f64 {
        cell.populations().iter().sum()
    }

    fn compute_rho_bar_j(&self, cell: &Cell) -> (f64, Flux) {
        let mut j = [0.0; 3];
        for (i, &fi) in cell.populations().iter().enumerate() {
            let ci = self.lattice.c(i);
            for (a, ja) in j.iter_mut().enumerate() {
                *ja += ci[a] as f64 * fi;
            }
        }
        (self.compute_rho_bar(cell), j)
    }

    fn equilibrium(&self, i: usize, rho_bar: f64, j: &Flux, _j_sqr: f64) -> f64 {
        first_order_equilibrium(self.lattice, i, rho_bar, j)
    }

    fn regularize(
        &self,
        cell: &mut Cell,
        rho_bar: f64,
        j: &Flux,
        _theta_bar: f64,
        _pi_neq: &PiNeq,
    ) {
        self.counters.regularize.fetch_add(1, Ordering::Relaxed);
        for i in 0..self.lattice.q() {
            cell[i] = first_order_equilibrium(self.lattice, i, rho_bar, j);
        }
    }

    fn box_clone(&self) -> Box<dyn CollisionModel> {
        Box::new(self.clone())
    }

    fn serialize(&self, w: &mut dyn Write) -> Result<(), CodecError> {
        write_f64_le(w, self.collide_scale)
    }

    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), CodecError> {
        self.collide_scale = read_f64_le(r)?;
        Ok(())
    }
}
