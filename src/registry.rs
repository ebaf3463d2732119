//! # Node Registry
//!
//! Maps node type names to factories so a host can build nodes from settings.
//! A node type is reachable both by its descriptor name (`"change originator"`)
//! and by its type name (`"ChangeOriginatorNode"`).

use crate::config::{NodeDefinition, RuleEngineSettings};
use crate::error::{RuleNodeError, RuleNodeResult};
use crate::node::change_originator::CHANGE_ORIGINATOR_DESCRIPTOR;
use crate::node::{ChangeOriginatorNode, NodeConfiguration, NodeDescriptor, TransformNode};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub type NodeFactory = fn(&NodeConfiguration) -> RuleNodeResult<Arc<dyn TransformNode>>;

fn change_originator_factory(
    configuration: &NodeConfiguration,
) -> RuleNodeResult<Arc<dyn TransformNode>> {
    Ok(Arc::new(ChangeOriginatorNode::init(configuration)?))
}

/// Thread-safe registry of node factories
#[derive(Default)]
pub struct NodeRegistry {
    factories: DashMap<String, NodeFactory>,
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut node_types: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        node_types.sort();
        f.debug_struct("NodeRegistry")
            .field("node_types", &node_types)
            .finish()
    }
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every node type shipped in this crate
    pub fn with_builtin_nodes() -> Self {
        let registry = Self::new();
        registry.register(&CHANGE_ORIGINATOR_DESCRIPTOR, change_originator_factory);
        registry
    }

    pub fn register(&self, descriptor: &NodeDescriptor, factory: NodeFactory) {
        self.factories.insert(descriptor.name.to_string(), factory);
        self.factories
            .insert(descriptor.node_type.to_string(), factory);
        debug!(
            name = descriptor.name,
            node_type = descriptor.node_type,
            "Registered node factory"
        );
    }

    pub fn contains(&self, node_type: &str) -> bool {
        self.factories.contains_key(node_type)
    }

    /// Initialize the node a definition describes
    pub fn create(&self, definition: &NodeDefinition) -> RuleNodeResult<Arc<dyn TransformNode>> {
        let factory = self
            .factories
            .get(&definition.node_type)
            .map(|entry| *entry.value())
            .ok_or_else(|| RuleNodeError::UnknownNodeType(definition.node_type.clone()))?;

        factory(&definition.node_configuration())
    }

    /// Initialize every node declared in settings, failing on the first invalid one
    pub fn build_all(
        &self,
        settings: &RuleEngineSettings,
    ) -> RuleNodeResult<Vec<(String, Arc<dyn TransformNode>)>> {
        let nodes = settings
            .nodes
            .iter()
            .map(|definition| {
                self.create(definition)
                    .map(|node| (definition.name.clone(), node))
            })
            .collect::<RuleNodeResult<Vec<_>>>()?;

        info!(count = nodes.len(), "Initialized rule nodes");
        Ok(nodes)
    }
}
