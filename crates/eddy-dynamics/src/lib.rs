//! Reference advection-diffusion collision models for Eddy.
//!
//! Provides the base models that boundary capsules wrap in practice:
//! a first-order BGK model and its regularized (RLB) counterpart, both
//! driven by the external velocity stored on each cell.
//!
//! # Models
//!
//! - [`AdvectionDiffusionBgk`]: relaxes every population toward the
//!   first-order equilibrium.
//! - [`AdvectionDiffusionRlb`]: rebuilds populations from the
//!   equilibrium plus the relaxed first-order non-equilibrium flux.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bgk;
pub mod error;
pub mod rlb;
pub mod templates;

pub use bgk::AdvectionDiffusionBgk;
pub use error::ModelError;
pub use rlb::AdvectionDiffusionRlb;
