//! # Ownership Resolvers
//!
//! Resolve the customer or tenant owning an entity. Customers and tenants resolve
//! to themselves; owned entity kinds are looked up through an [`EntityOwnerLookup`];
//! every other kind is rejected without touching storage.

use super::{CustomerResolver, TenantResolver};
use crate::error::{ResolveError, ResolveResult};
use crate::models::{EntityId, EntityType};
use crate::node::RuleNodeContext;
use async_trait::async_trait;
use tracing::debug;

/// Owners recorded for a stored entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityOwnership {
    pub tenant_id: EntityId,
    /// `None` when the entity is not assigned to any customer
    pub customer_id: Option<EntityId>,
}

/// Storage lookup returning the owners of an entity, `None` when it does not exist
#[async_trait]
pub trait EntityOwnerLookup: Send + Sync {
    async fn find_ownership(&self, entity: &EntityId) -> ResolveResult<Option<EntityOwnership>>;
}

#[derive(Debug, Clone)]
pub struct OwnerCustomerResolver<L> {
    lookup: L,
}

impl<L: EntityOwnerLookup> OwnerCustomerResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<L: EntityOwnerLookup> CustomerResolver for OwnerCustomerResolver<L> {
    async fn find_customer_id(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId> {
        match original.entity_type {
            EntityType::Customer => Ok(*original),
            EntityType::User | EntityType::Asset | EntityType::Device => {
                let ownership = self.lookup.find_ownership(original).await?;
                debug!(entity = %original, ?ownership, "Loaded ownership for customer lookup");
                ownership
                    .and_then(|o| o.customer_id)
                    .ok_or_else(|| ResolveError::not_found(*original, "Customer"))
            }
            _ => Err(ResolveError::UnsupportedEntityType(*original)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OwnerTenantResolver<L> {
    lookup: L,
}

impl<L: EntityOwnerLookup> OwnerTenantResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<L: EntityOwnerLookup> TenantResolver for OwnerTenantResolver<L> {
    async fn find_tenant_id(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId> {
        match original.entity_type {
            EntityType::Tenant => Ok(*original),
            EntityType::Customer
            | EntityType::User
            | EntityType::Asset
            | EntityType::Device
            | EntityType::Alarm
            | EntityType::RuleChain => {
                let ownership = self.lookup.find_ownership(original).await?;
                debug!(entity = %original, ?ownership, "Loaded ownership for tenant lookup");
                ownership
                    .map(|o| o.tenant_id)
                    .ok_or_else(|| ResolveError::not_found(*original, "Tenant"))
            }
            _ => Err(ResolveError::UnsupportedEntityType(*original)),
        }
    }
}
