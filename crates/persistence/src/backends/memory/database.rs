//! The in-memory tables and link graph.
//!
//! Every method is synchronous and runs under whatever lock the caller
//! holds; [`super::MemoryBackend`] takes one write lock per mutation so a
//! create-and-link or a cascading delete is applied as a single step.

use std::collections::BTreeMap;

use crate::core::validation::{validate_create, validate_merge, validate_replace};
use crate::error::{RelationshipError, ResourceError, StorageResult};
use crate::seed::{SEED_LINKS, seed_entities};
use crate::types::{
    Entity, EntityId, EntityKind, FieldSet, FieldValue, LinkPayload, RelatedIds, Relation,
};

use super::allocator::IdAllocator;
use super::graph::RelationshipGraph;

#[derive(Debug, Default)]
struct Table {
    ids: IdAllocator,
    rows: BTreeMap<EntityId, Vec<FieldValue>>,
}

#[derive(Debug, Default)]
pub(crate) struct Database {
    todos: Table,
    projects: Table,
    categories: Table,
    graph: RelationshipGraph,
}

impl Database {
    fn table(&self, kind: EntityKind) -> &Table {
        match kind {
            EntityKind::Todo => &self.todos,
            EntityKind::Project => &self.projects,
            EntityKind::Category => &self.categories,
        }
    }

    fn table_mut(&mut self, kind: EntityKind) -> &mut Table {
        match kind {
            EntityKind::Todo => &mut self.todos,
            EntityKind::Project => &mut self.projects,
            EntityKind::Category => &mut self.categories,
        }
    }

    pub(crate) fn exists(&self, kind: EntityKind, id: EntityId) -> bool {
        self.table(kind).rows.contains_key(&id)
    }

    pub(crate) fn count(&self, kind: EntityKind) -> usize {
        self.table(kind).rows.len()
    }

    pub(crate) fn next_id(&self, kind: EntityKind) -> EntityId {
        self.table(kind).ids.peek()
    }

    pub(crate) fn link_count(&self) -> usize {
        self.graph.len()
    }

    /// Builds a snapshot including the entity's current links.
    pub(crate) fn snapshot(&self, kind: EntityKind, id: EntityId) -> Option<Entity> {
        let values = self.table(kind).rows.get(&id)?;
        let related = Relation::from_kind(kind)
            .iter()
            .map(|&relation| RelatedIds {
                relation,
                ids: self.graph.targets(relation, id),
            })
            .collect();
        Some(Entity::new(kind, id, values.clone()).with_related(related))
    }

    fn snapshot_or_not_found(&self, kind: EntityKind, id: EntityId) -> StorageResult<Entity> {
        self.snapshot(kind, id)
            .ok_or_else(|| ResourceError::not_found(kind, id).into())
    }

    pub(crate) fn list(&self, kind: EntityKind) -> Vec<Entity> {
        self.table(kind)
            .rows
            .keys()
            .filter_map(|&id| self.snapshot(kind, id))
            .collect()
    }

    pub(crate) fn create(&mut self, kind: EntityKind, fields: &FieldSet) -> StorageResult<Entity> {
        let table = self.table_mut(kind);
        // The id is spent even if validation fails.
        let id = table.ids.allocate();
        let row = validate_create(kind, fields)?;
        table.rows.insert(id, row);
        tracing::debug!("Created {}/{}", kind, id);
        self.snapshot_or_not_found(kind, id)
    }

    pub(crate) fn merge(
        &mut self,
        kind: EntityKind,
        id: EntityId,
        fields: &FieldSet,
    ) -> StorageResult<Entity> {
        let current = self
            .table(kind)
            .rows
            .get(&id)
            .ok_or_else(|| ResourceError::not_found(kind, id))?;
        let row = validate_merge(kind, id, current, fields)?;
        self.table_mut(kind).rows.insert(id, row);
        tracing::debug!("Amended {}/{} ({} fields)", kind, id, fields.len());
        self.snapshot_or_not_found(kind, id)
    }

    pub(crate) fn replace(
        &mut self,
        kind: EntityKind,
        id: EntityId,
        fields: &FieldSet,
    ) -> StorageResult<Entity> {
        let row = validate_replace(kind, id, fields)?;
        let slot = self
            .table_mut(kind)
            .rows
            .get_mut(&id)
            .ok_or_else(|| ResourceError::not_found(kind, id))?;
        *slot = row;
        tracing::debug!("Replaced {}/{}", kind, id);
        self.snapshot_or_not_found(kind, id)
    }

    pub(crate) fn delete(&mut self, kind: EntityKind, id: EntityId) -> StorageResult<()> {
        if self.table_mut(kind).rows.remove(&id).is_none() {
            return Err(ResourceError::no_matching(kind, id).into());
        }
        let pruned = self.graph.remove_entity(kind, id);
        tracing::debug!("Deleted {}/{} and {} links", kind, id, pruned);
        Ok(())
    }

    pub(crate) fn link(
        &mut self,
        relation: Relation,
        source: EntityId,
        target: EntityId,
    ) -> StorageResult<Entity> {
        if !self.exists(relation.source(), source) {
            return Err(RelationshipError::no_such_parent(relation, source).into());
        }
        if !self.exists(relation.target(), target) {
            return Err(RelationshipError::NoSuchTarget.into());
        }
        if self.graph.link(relation, source, target) {
            tracing::debug!(
                "Linked {}/{}/{} to {}",
                relation.source(),
                source,
                relation,
                target
            );
        }
        self.snapshot_or_not_found(relation.target(), target)
    }

    pub(crate) fn link_or_create(
        &mut self,
        relation: Relation,
        source: EntityId,
        payload: LinkPayload,
    ) -> StorageResult<Entity> {
        if !self.exists(relation.source(), source) {
            return Err(RelationshipError::no_such_parent(relation, source).into());
        }
        match payload {
            LinkPayload::ById(raw) => {
                let target =
                    EntityId::parse(raw.trim()).ok_or(RelationshipError::NoSuchTarget)?;
                self.link(relation, source, target)
            }
            LinkPayload::ByFields(fields) => {
                let created = self.create(relation.target(), &fields)?;
                self.link(relation, source, created.id())
            }
            LinkPayload::Invalid => {
                Err(RelationshipError::invalid_payload(relation, source).into())
            }
        }
    }

    pub(crate) fn unlink(
        &mut self,
        relation: Relation,
        source: EntityId,
        target: EntityId,
    ) -> StorageResult<()> {
        if !self.graph.unlink(relation, source, target) {
            return Err(ResourceError::no_matching_link(relation, source, target).into());
        }
        tracing::debug!(
            "Unlinked {}/{}/{}/{}",
            relation.source(),
            source,
            relation,
            target
        );
        Ok(())
    }

    pub(crate) fn related(&self, relation: Relation, source: Option<EntityId>) -> Vec<Entity> {
        let sources = match source {
            Some(id) if self.exists(relation.source(), id) => vec![id],
            _ => self.table(relation.source()).rows.keys().copied().collect(),
        };
        sources
            .into_iter()
            .flat_map(|id| self.graph.targets(relation, id))
            .filter_map(|target| self.snapshot(relation.target(), target))
            .collect()
    }

    pub(crate) fn related_instance(
        &self,
        relation: Relation,
        source: EntityId,
        target: EntityId,
    ) -> Option<Entity> {
        if self.graph.contains(relation, source, target) {
            self.snapshot(relation.target(), target)
        } else {
            None
        }
    }

    pub(crate) fn merge_related(
        &mut self,
        relation: Relation,
        source: EntityId,
        target: EntityId,
        fields: &FieldSet,
    ) -> StorageResult<Entity> {
        if !self.exists(relation.source(), source) {
            return Err(RelationshipError::no_such_parent(relation, source).into());
        }
        if !self.graph.contains(relation, source, target) {
            return Err(ResourceError::no_matching_link(relation, source, target).into());
        }
        self.merge(relation.target(), target, fields)
    }

    /// Installs the seed entities and links.
    pub(crate) fn seed(&mut self) -> StorageResult<()> {
        for (kind, fields) in seed_entities() {
            self.create(kind, &fields)?;
        }
        for &(relation, source, target) in SEED_LINKS {
            self.link(relation, source, target)?;
        }
        Ok(())
    }
}
