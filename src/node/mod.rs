//! # Rule Nodes
//!
//! A rule node receives one message at a time from the host runtime and reports an
//! outcome the host routes along a named relation.
//!
//! ## Lifecycle
//!
//! 1. The host hands the node its raw [`NodeConfiguration`]; construction validates
//!    it and fails on anything the node cannot run with.
//! 2. The ready node handles any number of independent messages through
//!    [`TransformNode::on_msg`], concurrently if the host wishes.
//! 3. [`TransformNode::destroy`] is called once on teardown.

use crate::constants::{relations, OPERATION_TRANSFORM};
use crate::error::{RuleNodeError, RuleNodeResult};
use crate::logging::{log_error, log_node_operation};
use crate::models::RuleMessage;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::Instrument;

pub mod change_originator;
pub mod context;

pub use change_originator::{
    ChangeOriginatorNode, ChangeOriginatorNodeConfiguration, OriginatorSource,
};
pub use context::RuleNodeContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    Enrichment,
    Filter,
    Transformation,
    Action,
    External,
}

/// Static description of a node type, shown to whoever assembles rule chains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub component_type: ComponentType,
    /// Type name used in node definitions
    pub node_type: &'static str,
    /// Human readable name
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub configuration_type: &'static str,
}

/// Raw configuration record handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeConfiguration {
    data: serde_json::Value,
}

impl NodeConfiguration {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    pub fn from_config<T: Serialize>(config: &T) -> RuleNodeResult<Self> {
        Ok(Self::new(serde_json::to_value(config)?))
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Deserialize the record into a node's typed configuration
    pub fn convert<T: DeserializeOwned>(&self) -> RuleNodeResult<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            RuleNodeError::InvalidConfiguration(format!(
                "cannot convert node configuration: {e}"
            ))
        })
    }
}

/// What happened to a single message
#[derive(Debug)]
pub enum NodeOutcome {
    /// Transformed message, routed along `Success`
    Success(RuleMessage),
    /// Transformed message, emitted as the head of a new chain
    NewChain(RuleMessage),
    /// The input message, routed along `Failure`
    Failure {
        msg: RuleMessage,
        error: RuleNodeError,
    },
}

impl NodeOutcome {
    /// Relation the host routes this outcome along; `None` for a new chain
    pub fn relation(&self) -> Option<&'static str> {
        match self {
            NodeOutcome::Success(_) => Some(relations::SUCCESS),
            NodeOutcome::NewChain(_) => None,
            NodeOutcome::Failure { .. } => Some(relations::FAILURE),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, NodeOutcome::Failure { .. })
    }

    pub fn message(&self) -> &RuleMessage {
        match self {
            NodeOutcome::Success(msg) | NodeOutcome::NewChain(msg) => msg,
            NodeOutcome::Failure { msg, .. } => msg,
        }
    }

    pub fn into_result(self) -> RuleNodeResult<RuleMessage> {
        match self {
            NodeOutcome::Success(msg) | NodeOutcome::NewChain(msg) => Ok(msg),
            NodeOutcome::Failure { error, .. } => Err(error),
        }
    }
}

/// A node that maps each message to exactly one new message
#[async_trait]
pub trait TransformNode: Send + Sync + fmt::Debug {
    fn descriptor(&self) -> &'static NodeDescriptor;

    /// Emit transformed messages as new chains instead of routing them onwards
    fn start_new_chain(&self) -> bool {
        false
    }

    /// Produce the transformed message. The input is never modified.
    async fn transform(
        &self,
        ctx: &RuleNodeContext,
        msg: &RuleMessage,
    ) -> RuleNodeResult<RuleMessage>;

    /// Transform `msg` and classify the result for routing
    async fn on_msg(&self, ctx: &RuleNodeContext, msg: RuleMessage) -> NodeOutcome {
        let node = self.descriptor().name;
        let result = self
            .transform(ctx, &msg)
            .instrument(ctx.span().clone())
            .await;

        match result {
            Ok(transformed) => {
                log_node_operation(
                    OPERATION_TRANSFORM,
                    node,
                    Some(&transformed),
                    relations::SUCCESS,
                    None,
                );
                if self.start_new_chain() {
                    NodeOutcome::NewChain(transformed)
                } else {
                    NodeOutcome::Success(transformed)
                }
            }
            Err(error) => {
                log_error(
                    node,
                    OPERATION_TRANSFORM,
                    &error.to_string(),
                    Some(&msg.id().to_string()),
                );
                NodeOutcome::Failure { msg, error }
            }
        }
    }

    /// Release node resources on teardown
    fn destroy(&self) {}
}
