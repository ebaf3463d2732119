//! # Entity Identifiers
//!
//! Typed references to any addressable entity a message can be about.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of an addressable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Tenant,
    Customer,
    User,
    Dashboard,
    Asset,
    Device,
    Alarm,
    RuleChain,
    RuleNode,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityType::Tenant => "Tenant",
            EntityType::Customer => "Customer",
            EntityType::User => "User",
            EntityType::Dashboard => "Dashboard",
            EntityType::Asset => "Asset",
            EntityType::Device => "Device",
            EntityType::Alarm => "Alarm",
            EntityType::RuleChain => "RuleChain",
            EntityType::RuleNode => "RuleNode",
        };
        f.write_str(name)
    }
}

/// Opaque, typed entity reference. Two ids are equal when both kind and id match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    pub entity_type: EntityType,
    pub id: Uuid,
}

impl EntityId {
    #[must_use]
    pub fn new(entity_type: EntityType, id: Uuid) -> Self {
        Self { entity_type, id }
    }

    /// Fresh random id of the given kind
    #[must_use]
    pub fn random(entity_type: EntityType) -> Self {
        Self::new(entity_type, Uuid::new_v4())
    }

    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.entity_type, self.id)
    }
}
