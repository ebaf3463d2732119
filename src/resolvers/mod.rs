//! # Entity Resolvers
//!
//! Asynchronous capabilities a node uses to find the entity that should become a
//! message's new originator. The node only depends on the three traits below; the
//! entity and relation storage behind them belongs to the host.
//!
//! Two reference adapters are provided on top of narrower storage lookups:
//!
//! - [`OwnerCustomerResolver`] / [`OwnerTenantResolver`]: walk from an entity to the
//!   customer or tenant that owns it, dispatching on the entity kind
//! - [`RelatedEntityResolver`]: follow one typed relation and keep the first match

use crate::error::ResolveResult;
use crate::models::{EntityId, EntitySearchDirection};
use crate::node::RuleNodeContext;
use async_trait::async_trait;

pub mod owner;
pub mod related;

pub use owner::{EntityOwnerLookup, EntityOwnership, OwnerCustomerResolver, OwnerTenantResolver};
pub use related::{RelatedEntityResolver, RelationLookup};

/// Finds the customer that owns an entity
#[async_trait]
pub trait CustomerResolver: Send + Sync {
    async fn find_customer_id(
        &self,
        ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId>;
}

/// Finds the tenant that owns an entity
#[async_trait]
pub trait TenantResolver: Send + Sync {
    async fn find_tenant_id(
        &self,
        ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId>;
}

/// Finds the entity reached from `original` by one relation of `relation_type`.
///
/// Implementations return the first match in their own traversal order and fail
/// when nothing matches.
#[async_trait]
pub trait RelationResolver: Send + Sync {
    async fn find_related_entity(
        &self,
        ctx: &RuleNodeContext,
        original: &EntityId,
        direction: EntitySearchDirection,
        relation_type: &str,
    ) -> ResolveResult<EntityId>;
}
