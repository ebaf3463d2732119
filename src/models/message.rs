//! # Rule Messages
//!
//! The unit of work flowing through a rule chain. Messages are immutable values:
//! a node that changes anything produces a new [`RuleMessage`].

use super::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Key-value metadata travelling with a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageMetadata {
    data: BTreeMap<String, String>,
}

impl MessageMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, String>> for MessageMetadata {
    fn from(data: BTreeMap<String, String>) -> Self {
        Self { data }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMessage {
    id: Uuid,
    msg_type: String,
    originator: EntityId,
    metadata: MessageMetadata,
    data: String,
}

impl RuleMessage {
    /// Create a message with a freshly generated id
    pub fn new(
        msg_type: impl Into<String>,
        originator: EntityId,
        metadata: MessageMetadata,
        data: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), msg_type, originator, metadata, data)
    }

    pub fn with_id(
        id: Uuid,
        msg_type: impl Into<String>,
        originator: EntityId,
        metadata: MessageMetadata,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id,
            msg_type: msg_type.into(),
            originator,
            metadata,
            data: data.into(),
        }
    }

    /// Copy of this message about a different entity. Id, type, metadata and
    /// payload are carried over unchanged.
    #[must_use]
    pub fn with_originator(&self, originator: EntityId) -> Self {
        Self {
            originator,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn msg_type(&self) -> &str {
        &self.msg_type
    }

    pub fn originator(&self) -> EntityId {
        self.originator
    }

    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}
