//! Boundary closures and boundary dynamics for Eddy.
//!
//! After streaming, a boundary cell holds populations that came from
//! outside the domain and carry no information. This crate decides
//! which ones they are ([`classify()`]), rebuilds them ([`closure`]),
//! and packages a closure with a base collision model as a
//! [`BoundaryDynamics`] that the engine treats like any other dynamics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod closure;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod templates;

pub use classify::{classify, Classification};
pub use config::BoundaryConfig;
pub use dynamics::{BoundaryDynamics, BoundaryDynamicsBuilder};
pub use error::{BoundaryError, ClassificationError};
pub use geometry::{BoundaryGeometry, BoundaryKind, ClosureKind};
pub use registry::{registry, DynamicsRegistry};
pub use templates::compute_j_neq;
