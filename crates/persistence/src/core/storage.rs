//! Core entity and relationship storage traits.
//!
//! This module defines [`EntityStorage`], the CRUD operations on the three
//! entity tables, and [`RelationshipStorage`], the link operations over the
//! relationship graph. Relationship storage extends entity storage because
//! every link operation needs to resolve and return entities.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Entity, EntityId, EntityKind, FieldSet, LinkPayload, Relation};

/// Core storage trait for entities.
///
/// # Identity
///
/// Each kind has its own identifier sequence. `create` takes the next
/// identifier *before* validating the body, so a rejected creation still
/// consumes an id and later ids show a gap. Identifiers of deleted
/// entities are never handed out again.
///
/// # Example
///
/// ```ignore
/// use todo_persistence::core::EntityStorage;
/// use todo_persistence::types::{EntityKind, FieldSet};
///
/// async fn example<S: EntityStorage>(storage: &S) -> StorageResult<()> {
///     let fields = FieldSet::new().with("title", "water plants");
///     let todo = storage.create(EntityKind::Todo, fields).await?;
///
///     let read = storage.read(EntityKind::Todo, todo.id()).await?;
///     assert!(read.is_some());
///
///     storage.delete(EntityKind::Todo, todo.id()).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait EntityStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new entity.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the body does not fit the schema
    async fn create(&self, kind: EntityKind, fields: FieldSet) -> StorageResult<Entity>;

    /// Reads an entity by id, or `None` if it does not exist.
    async fn read(&self, kind: EntityKind, id: EntityId) -> StorageResult<Option<Entity>>;

    /// Lists every entity of a kind in id order.
    async fn list(&self, kind: EntityKind) -> StorageResult<Vec<Entity>>;

    /// Partially updates an entity. Fields not in the body are unchanged; an
    /// empty body returns the entity as it is.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the entity does not exist
    /// * `StorageError::Validation` - If the body does not fit the schema
    async fn merge(&self, kind: EntityKind, id: EntityId, fields: FieldSet)
    -> StorageResult<Entity>;

    /// Fully replaces an entity's fields. Omitted fields take their defaults.
    ///
    /// The body is validated before the entity is looked up, so a body
    /// missing a mandatory field is rejected even for an unknown id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the body does not fit the schema
    /// * `StorageError::Resource(NotFound)` - If the entity does not exist
    async fn replace(
        &self,
        kind: EntityKind,
        id: EntityId,
        fields: FieldSet,
    ) -> StorageResult<Entity>;

    /// Deletes an entity and every link that mentions it.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NoMatchingInstances)` - If the entity does not exist
    async fn delete(&self, kind: EntityKind, id: EntityId) -> StorageResult<()>;

    /// Number of live entities of a kind.
    async fn count(&self, kind: EntityKind) -> StorageResult<usize>;
}

/// Relationship operations over the link graph.
///
/// Links are undirected: linking `projects/1/tasks` to todo 2 makes project
/// 1 visible from `todos/2/tasksof` as well. A link between the same two
/// entities exists at most once.
#[async_trait]
pub trait RelationshipStorage: EntityStorage {
    /// Links two existing entities and returns the target.
    ///
    /// Linking an already-linked pair is a no-op.
    ///
    /// # Errors
    ///
    /// * `StorageError::Relationship(NoSuchParent)` - If the source does not exist
    /// * `StorageError::Relationship(NoSuchTarget)` - If the target does not exist
    async fn link(&self, id: EntityId, relation: Relation, target: EntityId)
    -> StorageResult<Entity>;

    /// Links an existing entity or creates a new one and links it,
    /// depending on the payload. Returns the linked entity.
    ///
    /// The source is checked first; a failed creation still consumes an id
    /// of the target kind.
    ///
    /// # Errors
    ///
    /// * `StorageError::Relationship(NoSuchParent)` - If the source does not exist
    /// * `StorageError::Relationship(NoSuchTarget)` - If a payload id does not resolve
    /// * `StorageError::Relationship(InvalidPayload)` - If the payload names nothing usable
    /// * `StorageError::Validation` - If the creation body does not fit the schema
    async fn link_or_create(
        &self,
        id: EntityId,
        relation: Relation,
        payload: LinkPayload,
    ) -> StorageResult<Entity>;

    /// Removes the link between two entities.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NoMatchingInstances)` - If the pair is not linked
    async fn unlink(&self, id: EntityId, relation: Relation, target: EntityId)
    -> StorageResult<()>;

    /// Entities reachable from `id` through `relation`, in link order.
    ///
    /// When `id` is `None` or does not resolve, returns the concatenation of
    /// the views of every source entity in id order. An entity linked to
    /// several sources appears once per source.
    async fn related(&self, id: Option<EntityId>, relation: Relation)
    -> StorageResult<Vec<Entity>>;

    /// The target entity if it is linked to `id` through `relation`.
    async fn related_instance(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
    ) -> StorageResult<Option<Entity>>;

    /// Partially updates a linked target entity.
    ///
    /// # Errors
    ///
    /// * `StorageError::Relationship(NoSuchParent)` - If the source does not exist
    /// * `StorageError::Resource(NoMatchingInstances)` - If the pair is not linked
    /// * `StorageError::Validation` - If the body does not fit the schema
    async fn merge_related(
        &self,
        id: EntityId,
        relation: Relation,
        target: EntityId,
        fields: FieldSet,
    ) -> StorageResult<Entity>;
}
