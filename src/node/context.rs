//! # Rule Node Context
//!
//! Everything a node may reach while processing a message: the tenant it runs
//! for, the resolver capabilities supplied by the host, and a tracing span that
//! scopes the node's log output.

use crate::models::EntityId;
use crate::resolvers::{CustomerResolver, RelationResolver, TenantResolver};
use std::fmt;
use std::sync::Arc;
use tracing::{info_span, Span};
use uuid::Uuid;

#[derive(Clone)]
pub struct RuleNodeContext {
    tenant_id: EntityId,
    node_id: Uuid,
    customer_resolver: Arc<dyn CustomerResolver>,
    tenant_resolver: Arc<dyn TenantResolver>,
    relation_resolver: Arc<dyn RelationResolver>,
    span: Span,
}

// Manual Debug implementation because the resolver trait objects don't implement Debug
impl fmt::Debug for RuleNodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleNodeContext")
            .field("tenant_id", &self.tenant_id)
            .field("node_id", &self.node_id)
            .finish_non_exhaustive()
    }
}

impl RuleNodeContext {
    pub fn new(
        tenant_id: EntityId,
        customer_resolver: Arc<dyn CustomerResolver>,
        tenant_resolver: Arc<dyn TenantResolver>,
        relation_resolver: Arc<dyn RelationResolver>,
    ) -> Self {
        let node_id = Uuid::new_v4();
        Self {
            tenant_id,
            node_id,
            customer_resolver,
            tenant_resolver,
            relation_resolver,
            span: Self::node_span(&tenant_id, node_id),
        }
    }

    /// Same context bound to a specific node id
    #[must_use]
    pub fn with_node_id(mut self, node_id: Uuid) -> Self {
        self.node_id = node_id;
        self.span = Self::node_span(&self.tenant_id, node_id);
        self
    }

    fn node_span(tenant_id: &EntityId, node_id: Uuid) -> Span {
        info_span!("rule_node", tenant = %tenant_id, node_id = %node_id)
    }

    pub fn tenant_id(&self) -> EntityId {
        self.tenant_id
    }

    pub fn node_id(&self) -> Uuid {
        self.node_id
    }

    pub fn customer_resolver(&self) -> &dyn CustomerResolver {
        self.customer_resolver.as_ref()
    }

    pub fn tenant_resolver(&self) -> &dyn TenantResolver {
        self.tenant_resolver.as_ref()
    }

    pub fn relation_resolver(&self) -> &dyn RelationResolver {
        self.relation_resolver.as_ref()
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}
