//! Name-to-id table for dynamics types.
//!
//! Ids are dense and follow registration order, so a registry built by
//! the same sequence of calls always hands out the same ids. The
//! process-wide instance from [`registry()`] holds every boundary kind
//! for 2D and 3D lattices and is built on first access.

use std::sync::OnceLock;

use indexmap::IndexSet;

use eddy_core::DynamicsId;

use crate::error::BoundaryError;
use crate::geometry::BoundaryKind;

/// Insertion-ordered set of dynamics type names.
#[derive(Clone, Debug, Default)]
pub struct DynamicsRegistry {
    names: IndexSet<String>,
}

impl DynamicsRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every supported boundary kind, 2D kinds first.
    ///
    /// Flat walls on axes shared by both dimensions are registered once.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for d in [2, 3] {
            for kind in BoundaryKind::all(d) {
                registry.register(kind.type_name());
            }
        }
        registry
    }

    /// Register `name`, returning its id. Registering an existing name
    /// returns the id it already has.
    pub fn register(&mut self, name: impl Into<String>) -> DynamicsId {
        let (index, _) = self.names.insert_full(name.into());
        DynamicsId(index as u32)
    }

    /// Id assigned to `name`, if registered.
    pub fn id_of(&self, name: &str) -> Option<DynamicsId> {
        self.names.get_index_of(name).map(|i| DynamicsId(i as u32))
    }

    /// Id assigned to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Unregistered`] if `name` is unknown.
    pub fn lookup(&self, name: &str) -> Result<DynamicsId, BoundaryError> {
        self.id_of(name).ok_or_else(|| BoundaryError::Unregistered {
            name: name.to_string(),
        })
    }

    /// Name registered under `id`, if any.
    pub fn name_of(&self, id: DynamicsId) -> Option<&str> {
        self.names.get_index(id.0 as usize).map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// The process-wide registry of boundary kinds.
pub fn registry() -> &'static DynamicsRegistry {
    static REGISTRY: OnceLock<DynamicsRegistry> = OnceLock::new();
    REGISTRY.get_or_init(DynamicsRegistry::standard)
}
