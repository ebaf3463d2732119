pub mod entity;
pub mod message;
pub mod relation;

// Re-export core models for easy access
pub use entity::{EntityId, EntityType};
pub use message::{MessageMetadata, RuleMessage};
pub use relation::{EntityRelation, EntitySearchDirection, RelationTypeGroup};
