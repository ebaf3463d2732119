//! Error types for rule nodes and the resolvers they call into.
//!

use crate::models::{EntityId, EntitySearchDirection};
use thiserror::Error;

pub type RuleNodeResult<T> = std::result::Result<T, RuleNodeError>;
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Failures surfaced by a rule node, either while it is being initialized or
/// while it processes a single message.
#[derive(Debug, Error)]
pub enum RuleNodeError {
    #[error("Unsupported originator source [{0}]")]
    UnsupportedSource(String),
    #[error(
        "Related originator source requires direction and relation type, got direction={direction:?} relation_type={relation_type:?}"
    )]
    IncompleteRelatedConfig {
        direction: Option<EntitySearchDirection>,
        relation_type: Option<String>,
    },
    #[error("Invalid node configuration: {0}")]
    InvalidConfiguration(String),
    /// A source value reached message processing without passing init validation
    #[error("Unexpected originator source {0}")]
    UnexpectedSource(String),
    #[error(transparent)]
    Resolution(#[from] ResolveError),
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
}

impl RuleNodeError {
    /// True for errors that prevent a node from being created
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RuleNodeError::UnsupportedSource(_)
                | RuleNodeError::IncompleteRelatedConfig { .. }
                | RuleNodeError::InvalidConfiguration(_)
                | RuleNodeError::UnknownNodeType(_)
        )
    }
}

impl From<serde_json::Error> for RuleNodeError {
    fn from(error: serde_json::Error) -> Self {
        RuleNodeError::InvalidConfiguration(error.to_string())
    }
}

impl From<config::ConfigError> for RuleNodeError {
    fn from(error: config::ConfigError) -> Self {
        RuleNodeError::Settings(error.to_string())
    }
}

/// Failures reported by entity resolvers
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{target} not found for {entity}")]
    NotFound { entity: EntityId, target: String },
    #[error("Unexpected originator EntityType {0}")]
    UnsupportedEntityType(EntityId),
    #[error("Relation traversal failed: {0}")]
    Traversal(String),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl ResolveError {
    pub fn not_found(entity: EntityId, target: impl Into<String>) -> Self {
        ResolveError::NotFound {
            entity,
            target: target.into(),
        }
    }
}
