//! Message and configuration builders shared by integration tests.

use rule_node_core::models::{EntityId, MessageMetadata, RuleMessage};
use rule_node_core::node::{ChangeOriginatorNode, NodeConfiguration};
use serde_json::json;

/// Telemetry message about `originator` with some metadata and payload
pub fn telemetry_message(originator: EntityId) -> RuleMessage {
    let metadata: MessageMetadata = [
        ("deviceName", "thermostat-42"),
        ("deviceType", "thermostat"),
        ("ts", "1530000000000"),
    ]
    .into_iter()
    .collect();

    RuleMessage::new(
        "POST_TELEMETRY_REQUEST",
        originator,
        metadata,
        r#"{"temperature":22.5,"humidity":41}"#,
    )
}

pub fn customer_node() -> ChangeOriginatorNode {
    ChangeOriginatorNode::init(&NodeConfiguration::new(json!({
        "originator_source": "CUSTOMER"
    })))
    .expect("customer configuration is valid")
}

pub fn tenant_node() -> ChangeOriginatorNode {
    ChangeOriginatorNode::init(&NodeConfiguration::new(json!({
        "originator_source": "TENANT"
    })))
    .expect("tenant configuration is valid")
}

pub fn related_node(direction: &str, relation_type: &str) -> ChangeOriginatorNode {
    ChangeOriginatorNode::init(&NodeConfiguration::new(json!({
        "originator_source": "RELATED",
        "direction": direction,
        "relation_type": relation_type
    })))
    .expect("related configuration is valid")
}
