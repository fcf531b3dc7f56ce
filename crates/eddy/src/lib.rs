//! Eddy: boundary closures for advection-diffusion lattice Boltzmann models.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Eddy sub-crates. For most users, adding `eddy` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! // A regularized outflow wall on +y over a BGK scalar transport model.
//! let base = AdvectionDiffusionBgk::new(&D2Q5, 1.0).unwrap();
//! let wall = BoundaryDynamics::builder()
//!     .geometry(BoundaryGeometry::FlatWall { axis: 1, orientation: 1 })
//!     .closure(ClosureKind::Regularized)
//!     .density(1.2)
//!     .build(Box::new(base))
//!     .unwrap();
//!
//! let mut cell = Cell::new(&D2Q5);
//! cell.set_velocity([0.01, 0.0, 0.0]);
//! wall.collide(&mut cell);
//!
//! let normal = wall.classification().normal().unwrap();
//! assert_eq!(normal, 2);
//! assert_eq!(
//!     eddy::boundary::registry().name_of(wall.dynamics_id()),
//!     Some("Boundary_RegularizedAdvectionDiffusion1_1"),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | Velocity sets, cells, ids, the collision-model trait, codec |
//! | [`boundary`] | `eddy-boundary` | Classifier, closures, boundary capsules, registry |
//! | [`dynamics`] | `eddy-dynamics` | Reference BGK and regularized models |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`eddy-core`).
///
/// Contains the built-in velocity sets ([`types::D2Q5`], [`types::D3Q7`],
/// [`types::D2Q9`]), the [`types::Cell`] container, and the
/// [`types::CollisionModel`] trait.
pub use eddy_core as types;

/// Boundary classification, closures, and capsules (`eddy-boundary`).
///
/// [`boundary::BoundaryDynamics`] is the main entry point; the free
/// functions in [`boundary::closure`] can be applied to any model.
pub use eddy_boundary as boundary;

/// Reference collision models (`eddy-dynamics`).
///
/// [`dynamics::AdvectionDiffusionBgk`] and
/// [`dynamics::AdvectionDiffusionRlb`].
pub use eddy_dynamics as dynamics;

/// Common imports for typical Eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use eddy_core::{Cell, CollisionModel, ExternalField, VelocitySet, D2Q5, D2Q9, D3Q7};

    // Errors
    pub use eddy_boundary::{BoundaryError, ClassificationError};
    pub use eddy_core::CodecError;
    pub use eddy_dynamics::ModelError;

    // Boundary
    pub use eddy_boundary::{
        classify, BoundaryConfig, BoundaryDynamics, BoundaryGeometry, BoundaryKind,
        Classification, ClosureKind,
    };

    // Models
    pub use eddy_dynamics::{AdvectionDiffusionBgk, AdvectionDiffusionRlb};
}
