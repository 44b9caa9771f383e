//! In-memory backend implementation.

use std::fmt::Debug;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{EntityStorage, RelationshipStorage};
use crate::error::StorageResult;
use crate::types::{Entity, EntityId, EntityKind, FieldSet, LinkPayload, Relation};

use super::database::Database;

/// Process-local storage for entities and links.
///
/// All state lives behind a single [`RwLock`]: reads share it and each
/// mutation holds it exclusively for its whole duration, so readers never
/// observe half of a create-and-link or cascading delete. Nothing survives
/// a restart.
pub struct MemoryBackend {
    db: RwLock<Database>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let db = self.db.read();
        f.debug_struct("MemoryBackend")
            .field("todos", &db.count(EntityKind::Todo))
            .field("projects", &db.count(EntityKind::Project))
            .field("categories", &db.count(EntityKind::Category))
            .field("links", &db.link_count())
            .finish_non_exhaustive()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            db: RwLock::new(Database::default()),
        }
    }

    /// Creates a backend holding the seed data (see [`crate::seed`]).
    pub fn seeded() -> StorageResult<Self> {
        let mut db = Database::default();
        db.seed()?;
        tracing::info!(
            "Seeded {} todos, {} projects, {} categories",
            db.count(EntityKind::Todo),
            db.count(EntityKind::Project),
            db.count(EntityKind::Category)
        );
        Ok(Self {
            db: RwLock::new(db),
        })
    }

    /// The id the next successful or failed creation of `kind` will use.
    pub fn next_id(&self, kind: EntityKind) -> EntityId {
        self.db.read().next_id(kind)
    }

    /// Total number of links across all relationships.
    pub fn link_count(&self) -> usize {
        self.db.read().link_count()
    }
}

#[async_trait]
impl EntityStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, kind: EntityKind, fields: FieldSet) -> StorageResult<Entity> {
        self.db.write().create(kind, &fields)
    }

    async fn read(&self, kind: EntityKind, id: EntityId) -> StorageResult<Option<Entity>> {
        Ok(self.db.read().snapshot(kind, id))
    }

    async fn list(&self, kind: EntityKind) -> StorageResult<Vec<Entity>> {
        Ok(self.db.read().list(kind))
    }

    async fn merge(
        &self,
        kind: EntityKind,
        id: EntityId,
        fields: FieldSet,
    ) -> StorageResult<Entity> {
        self.db.write().merge(kind, id, &fields)
    }

    async fn replace(
        &self,
        kind: EntityKind,
        id: EntityId,
        fields: FieldSet,
    ) -> StorageResult<Entity> {
        self.db.write().replace(kind, id, &fields)
    }

    async fn delete(&self, kind: EntityKind, id: EntityId) -> StorageResult<()> {
        self.db.write().delete(kind, id)
    }

    async fn count(&self, kind: EntityKind) -> StorageResult<usize> {
        Ok(self.db.read().count(kind))
    }
}

#[async_trait]
impl RelationshipStorage for MemoryBackend {
    async fn link(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
    ) -> StorageResult<Entity> {
        self.db.write().link(relation, id, target)
    }

    async fn link_or_create(
        &self,
        id: EntityId,
        relation: Relation,
        payload: LinkPayload,
    ) -> StorageResult<Entity> {
        self.db.write().link_or_create(relation, id, payload)
    }

    async fn unlink(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
    ) -> StorageResult<()> {
        self.db.write().unlink(relation, id, target)
    }

    async fn related(
        &self,
        id: Option<EntityId>,
        relation: Relation,
    ) -> StorageResult<Vec<Entity>> {
        Ok(self.db.read().related(relation, id))
    }

    async fn related_instance(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
    ) -> StorageResult<Option<Entity>> {
        Ok(self.db.read().related_instance(relation, id, target))
    }

    async fn merge_related(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
        fields: FieldSet,
    ) -> StorageResult<Entity> {
        self.db.write().merge_related(relation, id, target, &fields)
    }
}
