//! Boundary geometry tags, closure kinds, and the kind naming scheme.
//!
//! A [`BoundaryKind`] is the static type identity of a boundary capsule:
//! its geometry plus the closure it applies. Every valid kind has a
//! unique type name used by the dynamics registry.

use std::fmt;

/// Where a boundary cell sits relative to the domain.
///
/// Normals point out of the domain and take values in {−1, +1}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryGeometry {
    /// A flat wall perpendicular to `axis`.
    FlatWall {
        /// Axis index, `0..d`.
        axis: usize,
        /// Sign of the outward normal along `axis`.
        orientation: i32,
    },
    /// A 2D corner.
    Corner2D {
        /// Outward normal along x.
        x_normal: i32,
        /// Outward normal along y.
        y_normal: i32,
    },
    /// A 3D corner.
    Corner3D {
        /// Outward normal along x.
        x_normal: i32,
        /// Outward normal along y.
        y_normal: i32,
        /// Outward normal along z.
        z_normal: i32,
    },
    /// A 3D edge running along `plane`.
    ///
    /// `normal1` applies to axis `(plane + 1) % 3`, `normal2` to
    /// axis `(plane + 2) % 3`.
    Edge3D {
        /// Axis the edge runs along, `0..3`.
        plane: usize,
        /// Outward normal along the first transverse axis.
        normal1: i32,
        /// Outward normal along the second transverse axis.
        normal2: i32,
    },
}

const SIGNS: [i32; 2] = [-1, 1];

impl BoundaryGeometry {
    /// Lattice dimension this geometry requires, or `None` for flat
    /// walls, which exist in any dimension above their axis.
    pub fn required_dimension(&self) -> Option<usize> {
        match self {
            Self::FlatWall { .. } => None,
            Self::Corner2D { .. } => Some(2),
            Self::Corner3D { .. } | Self::Edge3D { .. } => Some(3),
        }
    }

    /// Whether this is a flat wall.
    pub fn is_flat_wall(&self) -> bool {
        matches!(self, Self::FlatWall { .. })
    }

    /// Outward normal per axis, zero along open axes.
    ///
    /// Only meaningful once the parameters have been range-checked; an
    /// out-of-range axis or plane yields an all-zero normal.
    pub fn outward_normal(&self) -> [i32; 3] {
        let mut n = [0; 3];
        match *self {
            Self::FlatWall { axis, orientation } => {
                if axis < 3 {
                    n[axis] = orientation;
                }
            }
            Self::Corner2D { x_normal, y_normal } => {
                n[0] = x_normal;
                n[1] = y_normal;
            }
            Self::Corner3D {
                x_normal,
                y_normal,
                z_normal,
            } => n = [x_normal, y_normal, z_normal],
            Self::Edge3D {
                plane,
                normal1,
                normal2,
            } => {
                if plane < 3 {
                    n[(plane + 1) % 3] = normal1;
                    n[(plane + 2) % 3] = normal2;
                }
            }
        }
        n
    }

    /// Every geometry available on a `d`-dimensional lattice, in a fixed
    /// order: flat walls, then corners, then edges.
    pub fn all(d: usize) -> Vec<Self> {
        let mut out = Vec::new();
        for axis in 0..d {
            for &orientation in &SIGNS {
                out.push(Self::FlatWall { axis, orientation });
            }
        }
        match d {
            2 => {
                for &x_normal in &SIGNS {
                    for &y_normal in &SIGNS {
                        out.push(Self::Corner2D { x_normal, y_normal });
                    }
                }
            }
            3 => {
                for &x_normal in &SIGNS {
                    for &y_normal in &SIGNS {
                        for &z_normal in &SIGNS {
                            out.push(Self::Corner3D {
                                x_normal,
                                y_normal,
                                z_normal,
                            });
                        }
                    }
                }
                for plane in 0..3 {
                    for &normal1 in &SIGNS {
                        for &normal2 in &SIGNS {
                            out.push(Self::Edge3D {
                                plane,
                                normal1,
                                normal2,
                            });
                        }
                    }
                }
            }
            _ => {}
        }
        out
    }
}

impl fmt::Display for BoundaryGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlatWall { axis, orientation } => {
                write!(f, "flat wall (axis {axis}, orientation {orientation:+})")
            }
            Self::Corner2D { x_normal, y_normal } => {
                write!(f, "2D corner ({x_normal:+}, {y_normal:+})")
            }
            Self::Corner3D {
                x_normal,
                y_normal,
                z_normal,
            } => write!(f, "3D corner ({x_normal:+}, {y_normal:+}, {z_normal:+})"),
            Self::Edge3D {
                plane,
                normal1,
                normal2,
            } => write!(f, "3D edge (plane {plane}, normals {normal1:+}, {normal2:+})"),
        }
    }
}

/// Which reconstruction a boundary capsule applies after collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClosureKind {
    /// Fix the normal unknown so the populations sum to the prescribed density.
    Density,
    /// First-order anti-bounce-back of the normal unknown's non-equilibrium part.
    Regularized,
    /// Rebuild every population from the prescribed moment and a
    /// reconstructed flux, through the base model's regularization.
    FullRegularized,
    /// [`FullRegularized`](Self::FullRegularized) with the moment coupled
    /// to the carrier-flow density.
    CompleteRegularized,
    /// Anti-bounce-back of every unknown, for corners and edges.
    Corner,
}

impl ClosureKind {
    /// All closure kinds, in registry order.
    pub const ALL: [ClosureKind; 5] = [
        Self::Density,
        Self::Regularized,
        Self::FullRegularized,
        Self::CompleteRegularized,
        Self::Corner,
    ];

    /// Whether this closure can be applied at `geometry`.
    ///
    /// Flat-wall closures need a singled-out normal direction; the corner
    /// closure is reserved for corners and edges.
    pub fn supports(&self, geometry: &BoundaryGeometry) -> bool {
        match self {
            Self::Corner => !geometry.is_flat_wall(),
            _ => geometry.is_flat_wall(),
        }
    }
}

impl fmt::Display for ClosureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Density => "density",
            Self::Regularized => "regularized",
            Self::FullRegularized => "full regularized",
            Self::CompleteRegularized => "complete regularized",
            Self::Corner => "corner",
        };
        f.write_str(s)
    }
}

/// Static type identity of a boundary capsule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryKind {
    /// Boundary geometry.
    pub geometry: BoundaryGeometry,
    /// Closure applied after collision.
    pub closure: ClosureKind,
}

impl BoundaryKind {
    /// Pair a geometry with a closure. No validation; see
    /// [`is_supported()`](Self::is_supported).
    pub fn new(geometry: BoundaryGeometry, closure: ClosureKind) -> Self {
        Self { geometry, closure }
    }

    /// Whether the closure may be applied at this geometry.
    pub fn is_supported(&self) -> bool {
        self.closure.supports(&self.geometry)
    }

    /// Registry name of this kind.
    pub fn type_name(&self) -> String {
        let stem = match self.closure {
            ClosureKind::Density | ClosureKind::Corner => "AdvectionDiffusion",
            ClosureKind::Regularized => "RegularizedAdvectionDiffusion",
            ClosureKind::FullRegularized => "FullRegularizedAdvectionDiffusion",
            ClosureKind::CompleteRegularized => "CompleteRegularizedAdvectionDiffusion",
        };
        match self.geometry {
            BoundaryGeometry::FlatWall { axis, orientation } => {
                format!("Boundary_{stem}{axis}_{orientation}")
            }
            BoundaryGeometry::Corner2D { x_normal, y_normal } => {
                format!("Boundary_{stem}Corner{x_normal}_{y_normal}")
            }
            BoundaryGeometry::Corner3D {
                x_normal,
                y_normal,
                z_normal,
            } => format!("Boundary_{stem}Corner{x_normal}_{y_normal}_{z_normal}"),
            BoundaryGeometry::Edge3D {
                plane,
                normal1,
                normal2,
            } => format!("Boundary_{stem}Edge{plane}_{normal1}_{normal2}"),
        }
    }

    /// Every supported kind on a `d`-dimensional lattice, geometry-major.
    pub fn all(d: usize) -> Vec<Self> {
        BoundaryGeometry::all(d)
            .into_iter()
            .flat_map(|geometry| {
                ClosureKind::ALL
                    .into_iter()
                    .map(move |closure| Self::new(geometry, closure))
            })
            .filter(Self::is_supported)
            .collect()
    }

    /// Recover a kind from its registry name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        [2, 3]
            .into_iter()
            .flat_map(Self::all)
            .find(|kind| kind.type_name() == name)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} boundary at {}", self.closure, self.geometry)
    }
}
