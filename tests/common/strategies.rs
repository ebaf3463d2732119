use proptest::prelude::*;
use rule_node_core::models::{EntitySearchDirection, EntityType};
use std::collections::BTreeMap;

/// Strategy for source literals outside the supported set
pub fn unsupported_source_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_ ]{0,16}".prop_filter("must not be a supported source", |s| {
        !matches!(s.as_str(), "CUSTOMER" | "TENANT" | "RELATED")
    })
}

/// Strategy for relation types, including empty and whitespace-only values
pub fn relation_type_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        " {1,4}",
        "[A-Za-z][A-Za-z ]{0,15}",
    ])
}

pub fn direction_strategy() -> impl Strategy<Value = Option<EntitySearchDirection>> {
    prop::option::of(prop_oneof![
        Just(EntitySearchDirection::From),
        Just(EntitySearchDirection::To),
    ])
}

pub fn entity_type_strategy() -> impl Strategy<Value = EntityType> {
    prop_oneof![
        Just(EntityType::Device),
        Just(EntityType::Asset),
        Just(EntityType::User),
        Just(EntityType::Customer),
    ]
}

pub fn metadata_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-zA-Z]{1,12}", "[a-zA-Z0-9 ]{0,24}", 0..8)
}

pub fn payload_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,128}"
}
