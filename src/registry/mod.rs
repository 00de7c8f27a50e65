//! Registered record types: which post types may be duplicated, which
//! collection owns them, and which capability creating one requires.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::store::Collection;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Record type '{0}' is registered twice")]
    DuplicateType(String),

    #[error("Collection for '{collection}' cannot own type '{name}'")]
    CollectionMismatch { name: String, collection: String },
}

/// A post type for which duplication is enabled.
#[derive(Clone)]
pub struct RegisteredType {
    name: String,
    create_capability: Option<String>,
    collection: Arc<dyn Collection>,
}

impl std::fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredType")
            .field("name", &self.name)
            .field("create_capability", &self.create_capability)
            .finish_non_exhaustive()
    }
}

impl RegisteredType {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when the host has no type definition to read it from.
    #[must_use]
    pub fn create_capability(&self) -> Option<&str> {
        self.create_capability.as_deref()
    }

    #[must_use]
    pub fn collection(&self) -> &Arc<dyn Collection> {
        &self.collection
    }
}

/// Immutable type → collection mapping, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>,
}

impl TypeRegistry {
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredType> {
        self.types.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Arc<dyn Collection>> {
        self.types.get(name).map(RegisteredType::collection)
    }

    /// Registered type names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    types: HashMap<String, RegisteredType>,
}

impl TypeRegistryBuilder {
    /// Register `name`, owned by `collection`.
    pub fn register(
        mut self,
        name: &str,
        create_capability: Option<&str>,
        collection: Arc<dyn Collection>,
    ) -> Result<Self, RegistryError> {
        if self.types.contains_key(name) {
            return Err(RegistryError::DuplicateType(name.to_string()));
        }
        if collection.post_type() != name {
            return Err(RegistryError::CollectionMismatch {
                name: name.to_string(),
                collection: collection.post_type().to_string(),
            });
        }
        self.types.insert(
            name.to_string(),
            RegisteredType {
                name: name.to_string(),
                create_capability: create_capability.map(String::from),
                collection,
            },
        );
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> TypeRegistry {
        let registry = TypeRegistry { types: self.types };
        info!(count = registry.len(), types = ?registry.names(), "Type registry built");
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
