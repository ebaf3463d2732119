//! # Related Entity Resolver
//!
//! Follows a single typed relation from an entity. The relation store may report
//! several matches; only the first one in store order is used.

use super::RelationResolver;
use crate::error::{ResolveError, ResolveResult};
use crate::models::{EntityId, EntityRelation, EntitySearchDirection, RelationTypeGroup};
use crate::node::RuleNodeContext;
use async_trait::async_trait;
use tracing::debug;

/// Relation store queries, results in store order
#[async_trait]
pub trait RelationLookup: Send + Sync {
    async fn find_by_from_and_type(
        &self,
        from: &EntityId,
        relation_type: &str,
        type_group: RelationTypeGroup,
    ) -> ResolveResult<Vec<EntityRelation>>;

    async fn find_by_to_and_type(
        &self,
        to: &EntityId,
        relation_type: &str,
        type_group: RelationTypeGroup,
    ) -> ResolveResult<Vec<EntityRelation>>;
}

#[derive(Debug, Clone)]
pub struct RelatedEntityResolver<L> {
    lookup: L,
}

impl<L: RelationLookup> RelatedEntityResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<L: RelationLookup> RelationResolver for RelatedEntityResolver<L> {
    async fn find_related_entity(
        &self,
        _ctx: &RuleNodeContext,
        original: &EntityId,
        direction: EntitySearchDirection,
        relation_type: &str,
    ) -> ResolveResult<EntityId> {
        let relations = match direction {
            EntitySearchDirection::From => {
                self.lookup
                    .find_by_from_and_type(original, relation_type, RelationTypeGroup::Common)
                    .await?
            }
            EntitySearchDirection::To => {
                self.lookup
                    .find_by_to_and_type(original, relation_type, RelationTypeGroup::Common)
                    .await?
            }
        };

        let first = relations
            .first()
            .map(|relation| relation.target(direction))
            .ok_or_else(|| {
                ResolveError::not_found(*original, format!("{relation_type} relation"))
            })?;

        if relations.len() > 1 {
            debug!(
                originator = %original,
                %direction,
                relation_type = %relation_type,
                matches = relations.len(),
                chosen = %first,
                "Multiple related entities found, using the first"
            );
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;
    use crate::node::test_support::test_context;

    struct FixedRelations {
        relations: Vec<EntityRelation>,
    }

    #[async_trait]
    impl RelationLookup for FixedRelations {
        async fn find_by_from_and_type(
            &self,
            from: &EntityId,
            relation_type: &str,
            _type_group: RelationTypeGroup,
        ) -> ResolveResult<Vec<EntityRelation>> {
            Ok(self
                .relations
                .iter()
                .filter(|r| r.from == *from && r.relation_type == relation_type)
                .cloned()
                .collect())
        }

        async fn find_by_to_and_type(
            &self,
            to: &EntityId,
            relation_type: &str,
            _type_group: RelationTypeGroup,
        ) -> ResolveResult<Vec<EntityRelation>> {
            Ok(self
                .relations
                .iter()
                .filter(|r| r.to == *to && r.relation_type == relation_type)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn test_from_direction_takes_first_target() {
        let ctx = test_context();
        let asset = EntityId::random(EntityType::Asset);
        let first = EntityId::random(EntityType::Device);
        let second = EntityId::random(EntityType::Device);
        let resolver = RelatedEntityResolver::new(FixedRelations {
            relations: vec![
                EntityRelation::new(asset, first, EntityRelation::CONTAINS_TYPE),
                EntityRelation::new(asset, second, EntityRelation::CONTAINS_TYPE),
            ],
        });

        let resolved = resolver
            .find_related_entity(
                &ctx,
                &asset,
                EntitySearchDirection::From,
                EntityRelation::CONTAINS_TYPE,
            )
            .await
            .unwrap();

        assert_eq!(resolved, first);
    }

    #[tokio::test]
    async fn test_to_direction_returns_relation_source() {
        let ctx = test_context();
        let asset = EntityId::random(EntityType::Asset);
        let device = EntityId::random(EntityType::Device);
        let resolver = RelatedEntityResolver::new(FixedRelations {
            relations: vec![EntityRelation::new(
                asset,
                device,
                EntityRelation::CONTAINS_TYPE,
            )],
        });

        let resolved = resolver
            .find_related_entity(
                &ctx,
                &device,
                EntitySearchDirection::To,
                EntityRelation::CONTAINS_TYPE,
            )
            .await
            .unwrap();

        assert_eq!(resolved, asset);
    }

    #[tokio::test]
    async fn test_no_matching_relation_is_not_found() {
        let ctx = test_context();
        let asset = EntityId::random(EntityType::Asset);
        let device = EntityId::random(EntityType::Device);
        let resolver = RelatedEntityResolver::new(FixedRelations {
            relations: vec![EntityRelation::new(
                asset,
                device,
                EntityRelation::MANAGES_TYPE,
            )],
        });

        let error = resolver
            .find_related_entity(
                &ctx,
                &asset,
                EntitySearchDirection::From,
                EntityRelation::CONTAINS_TYPE,
            )
            .await
            .unwrap_err();

        assert!(matches!(error, ResolveError::NotFound { entity, .. } if entity == asset));
    }
}
