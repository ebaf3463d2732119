//! Mock Resolver Implementation for Testing
//!
//! Provides a recording implementation of the three resolver traits so node
//! behavior can be tested without any entity or relation storage.

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use rule_node_core::error::{ResolveError, ResolveResult};
use rule_node_core::models::{EntityId, EntitySearchDirection, EntityType};
use rule_node_core::node::RuleNodeContext;
use rule_node_core::resolvers::{CustomerResolver, RelationResolver, TenantResolver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A single resolver invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverCall {
    Customer(EntityId),
    Tenant(EntityId),
    Related {
        original: EntityId,
        direction: EntitySearchDirection,
        relation_type: String,
    },
}

type RelationKey = (EntityId, EntitySearchDirection, String);

/// Mock resolver state for tracking calls and simulating lookups
#[derive(Debug, Default)]
pub struct MockResolverState {
    pub calls: Vec<ResolverCall>,
    pub customers: HashMap<EntityId, EntityId>,
    pub tenants: HashMap<EntityId, EntityId>,
    pub related: HashMap<RelationKey, Vec<EntityId>>,
    pub transport_failure: Option<String>,
}

/// Recording resolver implementing every resolver capability
#[derive(Clone, Default)]
pub struct MockResolvers {
    state: Arc<Mutex<MockResolverState>>,
    /// Simulate slow lookups
    delay: Option<Duration>,
    /// Never complete lookups
    hang: bool,
    cancelled: Arc<AtomicBool>,
}

/// Flags cancellation when a pending lookup future is dropped
struct CancelGuard(Arc<AtomicBool>);

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl MockResolvers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lookup delay for simulating slow storage
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make every lookup hang until its future is dropped
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn add_customer(&self, entity: EntityId, customer: EntityId) {
        self.state.lock().customers.insert(entity, customer);
    }

    pub fn add_tenant(&self, entity: EntityId, tenant: EntityId) {
        self.state.lock().tenants.insert(entity, tenant);
    }

    /// Related entities in the order the traversal reports them
    pub fn add_related(
        &self,
        original: EntityId,
        direction: EntitySearchDirection,
        relation_type: &str,
        targets: Vec<EntityId>,
    ) {
        self.state
            .lock()
            .related
            .insert((original, direction, relation_type.to_string()), targets);
    }

    pub fn fail_with_transport_error(&self, message: &str) {
        self.state.lock().transport_failure = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<ResolverCall> {
        self.state.lock().calls.clone()
    }

    pub fn was_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Context whose three resolvers are all this mock
    pub fn context(&self) -> RuleNodeContext {
        let resolvers = Arc::new(self.clone());
        RuleNodeContext::new(
            EntityId::random(EntityType::Tenant),
            resolvers.clone(),
            resolvers.clone(),
            resolvers,
        )
    }

    async fn record(&self, call: ResolverCall) -> ResolveResult<()> {
        let failure = {
            let mut state = self.state.lock();
            state.calls.push(call);
            state.transport_failure.clone()
        };

        if self.hang {
            let _guard = CancelGuard(self.cancelled.clone());
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match failure {
            Some(message) => Err(ResolveError::Transport(anyhow!(message))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerResolver for MockResolvers {
    async fn find_customer_id(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId> {
        self.record(ResolverCall::Customer(*original)).await?;
        self.state
            .lock()
            .customers
            .get(original)
            .copied()
            .ok_or_else(|| ResolveError::not_found(*original, "Customer"))
    }
}

#[async_trait]
impl TenantResolver for MockResolvers {
    async fn find_tenant_id(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> ResolveResult<EntityId> {
        self.record(ResolverCall::Tenant(*original)).await?;
        self.state
            .lock()
            .tenants
            .get(original)
            .copied()
            .ok_or_else(|| ResolveError::not_found(*original, "Tenant"))
    }
}

#[async_trait]
impl RelationResolver for MockResolvers {
    async fn find_related_entity(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
        direction: EntitySearchDirection,
        relation_type: &str,
    ) -> ResolveResult<EntityId> {
        self.record(ResolverCall::Related {
            original: *original,
            direction,
            relation_type: relation_type.to_string(),
        })
        .await?;
        self.state
            .lock()
            .related
            .get(&(*original, direction, relation_type.to_string()))
            .and_then(|targets| targets.first().copied())
            .ok_or_else(|| ResolveError::not_found(*original, format!("{relation_type} relation")))
    }
}
