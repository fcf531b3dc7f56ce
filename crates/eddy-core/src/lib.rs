//! Core types and traits for the Eddy boundary-closure framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Eddy workspace:
//! velocity sets, the per-cell population container, dynamics IDs,
//! the [`CollisionModel`] capability trait, error types, and the
//! little-endian persistence codec.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod codec;
pub mod error;
pub mod id;
pub mod lattice;
pub mod traits;

pub use cell::{Cell, ExternalField};
pub use error::{CodecError, LatticeError};
pub use id::{DynamicsId, Flux, PiNeq};
pub use lattice::{VelocitySet, D2Q5, D2Q9, D3Q7};
pub use traits::CollisionModel;
