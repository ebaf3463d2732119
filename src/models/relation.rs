//! # Entity Relations
//!
//! Typed, directed edges between entities as returned by the external relation store.

use super::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of a relation the query starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntitySearchDirection {
    /// Follow relations whose `from` end is the queried entity
    From,
    /// Follow relations whose `to` end is the queried entity
    To,
}

impl fmt::Display for EntitySearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntitySearchDirection::From => f.write_str("FROM"),
            EntitySearchDirection::To => f.write_str("TO"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationTypeGroup {
    #[default]
    Common,
    Alarm,
    Dashboard,
    RuleChain,
    RuleNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRelation {
    pub from: EntityId,
    pub to: EntityId,
    pub relation_type: String,
    #[serde(default)]
    pub type_group: RelationTypeGroup,
}

impl EntityRelation {
    pub const CONTAINS_TYPE: &'static str = "Contains";
    pub const MANAGES_TYPE: &'static str = "Manages";

    pub fn new(from: EntityId, to: EntityId, relation_type: impl Into<String>) -> Self {
        Self {
            from,
            to,
            relation_type: relation_type.into(),
            type_group: RelationTypeGroup::Common,
        }
    }

    /// The entity at the far end of this relation when searching in `direction`
    #[must_use]
    pub fn target(&self, direction: EntitySearchDirection) -> EntityId {
        match direction {
            EntitySearchDirection::From => self.to,
            EntitySearchDirection::To => self.from,
        }
    }
}
