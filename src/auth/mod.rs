//! Actors and the capability checks made on their behalf.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identity of whoever is making the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Actor {
    #[must_use]
    pub fn new(id: &str, roles: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    /// Unauthenticated actor: no roles, hence no capabilities.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            id: String::new(),
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }
}

/// Host authorization primitive.
pub trait CapabilityChecker: Send + Sync {
    fn actor_can(&self, actor: &Actor, capability: &str) -> bool;
}

impl<F> CapabilityChecker for F
where
    F: Fn(&Actor, &str) -> bool + Send + Sync,
{
    fn actor_can(&self, actor: &Actor, capability: &str) -> bool {
        self(actor, capability)
    }
}

/// Role → capabilities table. An actor holds a capability when any of its
/// roles grants it.
#[derive(Debug, Clone, Default)]
pub struct RoleCapabilities {
    roles: HashMap<String, HashSet<String>>,
}

impl RoleCapabilities {
    #[must_use]
    pub fn new(roles: &HashMap<String, Vec<String>>) -> Self {
        Self {
            roles: roles
                .iter()
                .map(|(role, caps)| (role.clone(), caps.iter().cloned().collect()))
                .collect(),
        }
    }

    #[must_use]
    pub fn grant(mut self, role: &str, capability: &str) -> Self {
        self.roles
            .entry(role.to_string())
            .or_default()
            .insert(capability.to_string());
        self
    }
}

impl CapabilityChecker for RoleCapabilities {
    fn actor_can(&self, actor: &Actor, capability: &str) -> bool {
        actor.roles.iter().any(|role| {
            self.roles
                .get(role)
                .is_some_and(|caps| caps.contains(capability))
        })
    }
}

/// Known actors, keyed by id. Unknown ids resolve to [`Actor::anonymous`].
#[derive(Debug, Clone, Default)]
pub struct ActorDirectory {
    actors: HashMap<String, Actor>,
}

impl ActorDirectory {
    #[must_use]
    pub fn new(actors: impl IntoIterator<Item = Actor>) -> Self {
        Self {
            actors: actors.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> Actor {
        id.and_then(|id| self.actors.get(id))
            .cloned()
            .unwrap_or_else(Actor::anonymous)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
