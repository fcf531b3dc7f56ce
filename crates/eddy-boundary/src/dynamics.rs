//! Boundary dynamics capsules.
//!
//! A [`BoundaryDynamics`] decorates a base [`CollisionModel`]: each
//! `collide()` runs the base collision unchanged, then the closure that
//! matches the capsule's [`BoundaryKind`]. The closure sees the capsule
//! itself as its model, so density queries return the prescribed
//! density while equilibrium and regularization come from the base.

use std::fmt;
use std::io::{Read, Write};

use eddy_core::codec::{read_bool, read_f64_le, write_bool, write_f64_le};
use eddy_core::{Cell, CodecError, CollisionModel, DynamicsId, Flux, PiNeq, VelocitySet};

use crate::classify::Classification;
use crate::closure::{
    complete_regularized_closure, corner_closure, density_closure, full_regularized_closure,
    regularized_closure,
};
use crate::config::{BoundaryConfig, DEFAULT_DENSITY};
use crate::error::{BoundaryError, ClassificationError};
use crate::geometry::{BoundaryGeometry, BoundaryKind, ClosureKind};
use crate::registry::registry;

/// Closure dispatch resolved at construction. Flat-wall closures carry
/// their normal population index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClosurePlan {
    Density { normal: usize },
    Regularized { normal: usize },
    FullRegularized,
    CompleteRegularized,
    Corner,
}

impl ClosurePlan {
    fn resolve(
        closure: ClosureKind,
        classification: &Classification,
    ) -> Result<Self, BoundaryError> {
        let normal = || {
            classification
                .normal()
                .ok_or(BoundaryError::Classification(
                    ClassificationError::NoNormalDirection,
                ))
        };
        Ok(match closure {
            ClosureKind::Density => Self::Density { normal: normal()? },
            ClosureKind::Regularized => Self::Regularized { normal: normal()? },
            ClosureKind::FullRegularized => Self::FullRegularized,
            ClosureKind::CompleteRegularized => Self::CompleteRegularized,
            ClosureKind::Corner => Self::Corner,
        })
    }
}

/// A base collision model plus the closure for one boundary kind.
///
/// The classification is computed once at construction and never
/// changes. Serialization covers the base model, the preparation flag
/// and the prescribed density; the kind is static type information.
///
/// # Examples
///
/// ```
/// use eddy_boundary::{BoundaryDynamics, BoundaryGeometry, ClosureKind};
/// use eddy_core::{Cell, CollisionModel, D2Q5};
/// use eddy_dynamics::AdvectionDiffusionBgk;
///
/// let wall = BoundaryDynamics::builder()
///     .geometry(BoundaryGeometry::FlatWall { axis: 0, orientation: 1 })
///     .closure(ClosureKind::Density)
///     .density(1.5)
///     .build(Box::new(AdvectionDiffusionBgk::new(&D2Q5, 1.0).unwrap()))
///     .unwrap();
///
/// let mut cell = Cell::new(&D2Q5);
/// wall.collide(&mut cell);
/// let total: f64 = cell.populations().iter().sum();
/// assert!((total - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct BoundaryDynamics {
    base: Box<dyn CollisionModel>,
    kind: BoundaryKind,
    type_name: String,
    id: DynamicsId,
    classification: Classification,
    plan: ClosurePlan,
    automatic_prepare_collision: bool,
    density: f64,
}

impl BoundaryDynamics {
    /// Start building a capsule.
    pub fn builder() -> BoundaryDynamicsBuilder {
        BoundaryDynamicsBuilder::new()
    }

    /// Build a capsule from a complete configuration.
    ///
    /// # Errors
    ///
    /// Any error from [`BoundaryConfig::validate()`] for the base
    /// model's velocity set.
    pub fn new(
        config: BoundaryConfig,
        base: Box<dyn CollisionModel>,
    ) -> Result<Self, BoundaryError> {
        let kind = config.kind();
        let classification = match config.validate(base.lattice()) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    %kind,
                    lattice = base.lattice().name(),
                    error = %e,
                    "rejected boundary configuration"
                );
                return Err(e);
            }
        };
        let plan = ClosurePlan::resolve(config.closure, &classification)?;
        let type_name = kind.type_name();
        let id = registry().lookup(&type_name)?;
        tracing::debug!(
            %kind,
            lattice = base.lattice().name(),
            unknown = ?classification.unknown(),
            known = ?classification.known(),
            normal = ?classification.normal(),
            "classified boundary"
        );
        Ok(Self {
            base,
            kind,
            type_name,
            id,
            classification,
            plan,
            automatic_prepare_collision: config.automatic_prepare_collision,
            density: config.density,
        })
    }

    /// Static type identity.
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Boundary geometry.
    pub fn geometry(&self) -> BoundaryGeometry {
        self.kind.geometry
    }

    /// Registry id of this capsule's kind.
    pub fn dynamics_id(&self) -> DynamicsId {
        self.id
    }

    /// The classification computed at construction.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The wrapped base model.
    pub fn base(&self) -> &dyn CollisionModel {
        self.base.as_ref()
    }

    /// Whether the engine should prepare collision automatically.
    pub fn automatic_prepare_collision(&self) -> bool {
        self.automatic_prepare_collision
    }

    /// Set the preparation flag.
    pub fn set_automatic_prepare_collision(&mut self, value: bool) {
        self.automatic_prepare_collision = value;
    }

    /// Prescribed density.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Replace the prescribed density. Not validated.
    pub fn define_density(&mut self, rho: f64) {
        self.density = rho;
    }

    /// The configuration that would rebuild this capsule.
    pub fn config(&self) -> BoundaryConfig {
        BoundaryConfig {
            geometry: self.kind.geometry,
            closure: self.kind.closure,
            automatic_prepare_collision: self.automatic_prepare_collision,
            density: self.density,
        }
    }

    /// Run the closure alone, without collision.
    pub fn complete_populations(&self, cell: &mut Cell) {
        let cls = &self.classification;
        match self.plan {
            ClosurePlan::Density { normal } => density_closure(cell, self, cls.known(), normal),
            ClosurePlan::Regularized { normal } => regularized_closure(cell, self, normal),
            ClosurePlan::FullRegularized => full_regularized_closure(cell, self, cls),
            ClosurePlan::CompleteRegularized => complete_regularized_closure(cell, self, cls),
            ClosurePlan::Corner => corner_closure(cell, self, cls.unknown()),
        }
    }
}

impl fmt::Debug for BoundaryDynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryDynamics")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("base", &self.base.name())
            .field("automatic_prepare_collision", &self.automatic_prepare_collision)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}

impl CollisionModel for BoundaryDynamics {
    fn name(&self) -> &str {
        &self.type_name
    }

    fn lattice(&self) -> &'static VelocitySet {
        self.base.lattice()
    }

    fn collide(&self, cell: &mut Cell) {
        self.base.collide(cell);
        self.complete_populations(cell);
    }

    /// Reduced prescribed density; the populations are not read.
    fn compute_rho_bar(&self, _cell: &Cell) -> f64 {
        self.lattice().rho_bar(self.density)
    }

    fn compute_density(&self, _cell: &Cell) -> f64 {
        self.density
    }

    /// Moments of the stored populations as the base model computes
    /// them. Unlike [`compute_rho_bar`](Self::compute_rho_bar), the
    /// prescribed density does not enter here.
    fn compute_rho_bar_j(&self, cell: &Cell) -> (f64, Flux) {
        self.base.compute_rho_bar_j(cell)
    }

    fn equilibrium(&self, i: usize, rho_bar: f64, j: &Flux, j_sqr: f64) -> f64 {
        self.base.equilibrium(i, rho_bar, j, j_sqr)
    }

    fn regularize(&self, cell: &mut Cell, rho_bar: f64, j: &Flux, theta_bar: f64, pi_neq: &PiNeq) {
        self.base.regularize(cell, rho_bar, j, theta_bar, pi_neq);
    }

    fn box_clone(&self) -> Box<dyn CollisionModel> {
        Box::new(self.clone())
    }

    fn serialize(&self, w: &mut dyn Write) -> Result<(), CodecError> {
        self.base.serialize(w)?;
        write_bool(w, self.automatic_prepare_collision)?;
        write_f64_le(w, self.density)
    }

    fn deserialize(&mut self, r: &mut dyn Read) -> Result<(), CodecError> {
        // Decode into a copy so a failed read leaves `self` untouched.
        let mut base = self.base.box_clone();
        base.deserialize(r)?;
        let flag = read_bool(r)?;
        let density = read_f64_le(r)?;
        if !density.is_finite() {
            return Err(CodecError::InvalidParameter {
                detail: format!("prescribed density {density}"),
            });
        }
        self.base = base;
        self.automatic_prepare_collision = flag;
        self.density = density;
        Ok(())
    }
}

/// Builder for [`BoundaryDynamics`].
#[derive(Clone, Debug)]
pub struct BoundaryDynamicsBuilder {
    geometry: Option<BoundaryGeometry>,
    closure: Option<ClosureKind>,
    automatic_prepare_collision: bool,
    density: f64,
}

impl BoundaryDynamicsBuilder {
    /// A builder with no geometry or closure, the flag set, and unit density.
    pub fn new() -> Self {
        Self {
            geometry: None,
            closure: None,
            automatic_prepare_collision: true,
            density: DEFAULT_DENSITY,
        }
    }

    /// Boundary geometry. Required.
    pub fn geometry(mut self, geometry: BoundaryGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Closure kind. Required.
    pub fn closure(mut self, closure: ClosureKind) -> Self {
        self.closure = Some(closure);
        self
    }

    /// Preparation flag. Default: `true`.
    pub fn automatic_prepare_collision(mut self, value: bool) -> Self {
        self.automatic_prepare_collision = value;
        self
    }

    /// Prescribed density. Default: 1.0.
    pub fn density(mut self, rho: f64) -> Self {
        self.density = rho;
        self
    }

    /// Wrap `base` in a validated capsule.
    ///
    /// # Errors
    ///
    /// [`BoundaryError::MissingGeometry`] or
    /// [`BoundaryError::MissingClosure`] if a required field is unset,
    /// otherwise any error from [`BoundaryDynamics::new`].
    pub fn build(self, base: Box<dyn CollisionModel>) -> Result<BoundaryDynamics, BoundaryError> {
        let geometry = self.geometry.ok_or(BoundaryError::MissingGeometry)?;
        let closure = self.closure.ok_or(BoundaryError::MissingClosure)?;
        let config = BoundaryConfig {
            geometry,
            closure,
            automatic_prepare_collision: self.automatic_prepare_collision,
            density: self.density,
        };
        BoundaryDynamics::new(config, base)
    }
}

impl Default for BoundaryDynamicsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
