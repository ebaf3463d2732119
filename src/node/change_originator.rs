//! # Change Originator Node
//!
//! Re-targets a message at a different entity: the customer or tenant owning the
//! current originator, or an entity related to it by a typed relation. Everything
//! except the originator is carried over to the produced message.
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "originator_source": "RELATED",
//!   "direction": "FROM",
//!   "relation_type": "Contains",
//!   "start_new_chain": false
//! }
//! ```
//!
//! `direction` and `relation_type` are only read for the `RELATED` source, where
//! both are required. When several related entities match, the first one returned
//! by the relation resolver wins and the rest are discarded.

use super::{ComponentType, NodeConfiguration, NodeDescriptor, RuleNodeContext, TransformNode};
use crate::constants::{originator_sources, OPERATION_INIT};
use crate::error::{RuleNodeError, RuleNodeResult};
use crate::logging::log_node_operation;
use crate::models::{EntityId, EntityRelation, EntitySearchDirection, RuleMessage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

pub static CHANGE_ORIGINATOR_DESCRIPTOR: NodeDescriptor = NodeDescriptor {
    component_type: ComponentType::Transformation,
    node_type: "ChangeOriginatorNode",
    name: "change originator",
    description: "Change Message Originator To Tenant/Customer/Related Entity",
    details: "Related Entity found using configured relation direction and Relation Type. \
              If multiple Related Entities are found, only first Entity is used as new Originator, \
              other entities are discarded.",
    configuration_type: "ChangeOriginatorNodeConfiguration",
};

/// Where the new originator comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginatorSource {
    Customer,
    Tenant,
    Related,
}

impl OriginatorSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginatorSource::Customer => originator_sources::CUSTOMER,
            OriginatorSource::Tenant => originator_sources::TENANT,
            OriginatorSource::Related => originator_sources::RELATED,
        }
    }
}

impl fmt::Display for OriginatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginatorSource {
    type Err = RuleNodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            originator_sources::CUSTOMER => Ok(OriginatorSource::Customer),
            originator_sources::TENANT => Ok(OriginatorSource::Tenant),
            originator_sources::RELATED => Ok(OriginatorSource::Related),
            other => Err(RuleNodeError::UnsupportedSource(other.to_string())),
        }
    }
}

/// Raw configuration as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOriginatorNodeConfiguration {
    #[serde(default, alias = "originatorSource")]
    pub originator_source: Option<String>,
    #[serde(default)]
    pub direction: Option<EntitySearchDirection>,
    #[serde(default, alias = "relationType")]
    pub relation_type: Option<String>,
    #[serde(default, alias = "startNewChain")]
    pub start_new_chain: bool,
}

impl ChangeOriginatorNodeConfiguration {
    pub fn default_configuration() -> Self {
        Self {
            originator_source: Some(originator_sources::CUSTOMER.to_string()),
            direction: Some(EntitySearchDirection::From),
            relation_type: Some(EntityRelation::CONTAINS_TYPE.to_string()),
            start_new_chain: false,
        }
    }
}

impl Default for ChangeOriginatorNodeConfiguration {
    fn default() -> Self {
        Self::default_configuration()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RelationQuery {
    direction: EntitySearchDirection,
    relation_type: String,
}

/// Validated, ready-to-run change originator node
#[derive(Debug, Clone)]
pub struct ChangeOriginatorNode {
    source: OriginatorSource,
    relation: Option<RelationQuery>,
    start_new_chain: bool,
}

impl ChangeOriginatorNode {
    /// Convert and validate the host configuration
    pub fn init(configuration: &NodeConfiguration) -> RuleNodeResult<Self> {
        let config: ChangeOriginatorNodeConfiguration = configuration.convert()?;
        let node = Self::from_config(&config)?;
        log_node_operation(
            OPERATION_INIT,
            CHANGE_ORIGINATOR_DESCRIPTOR.name,
            None,
            "ready",
            Some(node.source.as_str()),
        );
        Ok(node)
    }

    pub fn from_config(config: &ChangeOriginatorNodeConfiguration) -> RuleNodeResult<Self> {
        let raw_source = config.originator_source.as_deref().unwrap_or_default();
        let source = raw_source.parse::<OriginatorSource>().map_err(|e| {
            error!(source = %raw_source, "Unsupported source for ChangeOriginatorNode");
            e
        })?;

        let relation = match source {
            OriginatorSource::Related => Some(Self::validate_related(config)?),
            OriginatorSource::Customer | OriginatorSource::Tenant => None,
        };

        Ok(Self {
            source,
            relation,
            start_new_chain: config.start_new_chain,
        })
    }

    fn validate_related(
        config: &ChangeOriginatorNodeConfiguration,
    ) -> RuleNodeResult<RelationQuery> {
        let relation_type = config
            .relation_type
            .as_deref()
            .filter(|t| !t.trim().is_empty());

        match (config.direction, relation_type) {
            (Some(direction), Some(relation_type)) => Ok(RelationQuery {
                direction,
                relation_type: relation_type.to_string(),
            }),
            _ => {
                error!(
                    direction = ?config.direction,
                    relation_type = ?config.relation_type,
                    "Related source for ChangeOriginatorNode should have direction and relation type"
                );
                Err(RuleNodeError::IncompleteRelatedConfig {
                    direction: config.direction,
                    relation_type: config.relation_type.clone(),
                })
            }
        }
    }

    pub fn source(&self) -> OriginatorSource {
        self.source
    }

    async fn new_originator(
        &self,
        ctx: &RuleNodeContext,
        original: &EntityId,
    ) -> RuleNodeResult<EntityId> {
        let resolved = match (self.source, &self.relation) {
            (OriginatorSource::Customer, _) => {
                ctx.customer_resolver().find_customer_id(ctx, original).await?
            }
            (OriginatorSource::Tenant, _) => {
                ctx.tenant_resolver().find_tenant_id(ctx, original).await?
            }
            (OriginatorSource::Related, Some(query)) => {
                ctx.relation_resolver()
                    .find_related_entity(ctx, original, query.direction, &query.relation_type)
                    .await?
            }
            (OriginatorSource::Related, None) => {
                return Err(RuleNodeError::UnexpectedSource(self.source.to_string()));
            }
        };
        Ok(resolved)
    }
}

#[async_trait]
impl TransformNode for ChangeOriginatorNode {
    fn descriptor(&self) -> &'static NodeDescriptor {
        &CHANGE_ORIGINATOR_DESCRIPTOR
    }

    fn start_new_chain(&self) -> bool {
        self.start_new_chain
    }

    async fn transform(
        &self,
        ctx: &RuleNodeContext,
        msg: &RuleMessage,
    ) -> RuleNodeResult<RuleMessage> {
        let original = msg.originator();
        let new_originator = self.new_originator(ctx, &original).await?;
        debug!(
            msg_id = %msg.id(),
            source = %self.source,
            from = %original,
            to = %new_originator,
            "Changed message originator"
        );
        Ok(msg.with_originator(new_originator))
    }
}
