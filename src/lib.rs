#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Rule Node Core
//!
//! Asynchronous transformation nodes for rule-chain message processing.
//!
//! ## Overview
//!
//! A host runtime feeds messages through chains of rule nodes. Each node here is a
//! configurable single-step transform: it validates its configuration once when it
//! is created, then turns every inbound [`RuleMessage`] into exactly one new message
//! or a failure for that message alone.
//!
//! The crate ships the **change originator** node, which rewrites the entity a
//! message is about to the owning customer, the owning tenant, or an entity reached
//! through a typed relation. Entity storage and relation traversal stay with the
//! host and are reached through the resolver traits in [`resolvers`].
//!
//! ## Module Organization
//!
//! - [`models`] - Messages, entity ids and relations
//! - [`node`] - The [`TransformNode`] contract, node context and the change originator node
//! - [`resolvers`] - Resolver capabilities and reference adapters over storage lookups
//! - [`registry`] - Building nodes from declared definitions
//! - [`config`] - Settings loading
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rule_node_core::node::{ChangeOriginatorNode, NodeConfiguration, RuleNodeContext, TransformNode};
//! use rule_node_core::models::RuleMessage;
//! use serde_json::json;
//!
//! # async fn example(ctx: RuleNodeContext, msg: RuleMessage) -> Result<(), Box<dyn std::error::Error>> {
//! let node = ChangeOriginatorNode::init(&NodeConfiguration::new(json!({
//!     "originator_source": "TENANT"
//! })))?;
//!
//! let outcome = node.on_msg(&ctx, msg).await;
//! println!("routed along {:?}", outcome.relation());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod node;
pub mod registry;
pub mod resolvers;

pub use crate::config::{LoggingSettings, NodeDefinition, RuleEngineSettings};
pub use error::{ResolveError, ResolveResult, RuleNodeError, RuleNodeResult};
pub use models::{
    EntityId, EntityRelation, EntitySearchDirection, EntityType, MessageMetadata,
    RelationTypeGroup, RuleMessage,
};
pub use node::{
    ChangeOriginatorNode, ChangeOriginatorNodeConfiguration, ComponentType, NodeConfiguration,
    NodeDescriptor, NodeOutcome, OriginatorSource, RuleNodeContext, TransformNode,
};
pub use registry::NodeRegistry;
pub use resolvers::{CustomerResolver, RelationResolver, TenantResolver};
