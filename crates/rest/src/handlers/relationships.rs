//! Relationship handlers.
//!
//! Relationship paths hang off an entity:
//!
//! | Method | Path | Action |
//! |--------|------|--------|
//! | GET | `/[kind]/[id]/[relation]` | view the linked entities |
//! | POST | `/[kind]/[id]/[relation]` | link an existing entity, or create and link |
//! | GET | `/[kind]/[id]/[relation]/[target]` | read one linked entity |
//! | POST | `/[kind]/[id]/[relation]/[target]` | amend one linked entity |
//! | DELETE | `/[kind]/[id]/[relation]/[target]` | remove the link |
//!
//! Responses use the target kind's envelope: `GET /projects/1/tasks` returns
//! `{"todos": [...]}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use todo_persistence::core::RelationshipStorage;
use todo_persistence::error::{RelationshipError, ResourceError, StorageError, link_path};
use todo_persistence::types::{LinkPayload, Relation};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Negotiated, Payload};
use crate::resolver::{self, IdSegment};
use crate::responses::{collection_response, empty_response, entity_response};
use crate::state::AppState;

/// Handler for a relationship view.
///
/// When the id does not name an entity, the view falls back to the
/// concatenated views of every source entity.
///
/// # HTTP Request
///
/// `GET [base]/[kind]/[id]/[relation]`
///
/// # Response
///
/// - `200 OK` - Linked entities in link order, in the target kind's envelope
/// - `404 Not Found` - Unknown collection or relation
pub async fn related_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id, relation)): Path<(String, String, String)>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (relation, id) = resolver::relationship(&kind, &id, &relation)?;
    debug!(relation = %relation, id = %id.raw(), "Processing relationship view");

    let entities = state.storage().related(id.id(), relation).await?;
    collection_response(relation.target(), &entities, format)
}

/// Handler for linking.
///
/// A body with an `id` links that existing entity. Otherwise a body with
/// fields of the target kind creates a new entity and links it.
///
/// # HTTP Request
///
/// `POST [base]/[kind]/[id]/[relation]`
///
/// # Response
///
/// - `201 Created` - The linked (or created) entity
/// - `400 Bad Request` - Body names neither an id nor target fields, or fails validation
/// - `404 Not Found` - Source entity, or the entity named by `id`, does not exist
///
/// # Example
///
/// ```http
/// POST /projects/1/categories HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "Games"}
/// ```
pub async fn link_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id, relation)): Path<(String, String, String)>,
    Negotiated(format): Negotiated,
    Payload(fields): Payload,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (relation, id) = resolver::relationship(&kind, &id, &relation)?;
    debug!(relation = %relation, id = %id.raw(), fields = fields.len(), "Processing link request");

    let Some(source) = id.id() else {
        let err = RelationshipError::no_such_parent(relation, id.raw());
        return Err(StorageError::from(err).into());
    };

    let payload = LinkPayload::classify(relation.target(), fields);
    let entity = state
        .storage()
        .link_or_create(source, relation, payload)
        .await
        .map_err(|e| RestError::from_relationship(e, state.legacy_errors()))?;

    debug!(
        relation = %relation,
        source = %source,
        target = %entity.id(),
        "Linked entity"
    );
    entity_response(StatusCode::CREATED, &entity, format)
}

/// Handler for reading one linked entity.
///
/// # HTTP Request
///
/// `GET [base]/[kind]/[id]/[relation]/[target]`
///
/// # Response
///
/// - `200 OK` - The target entity, in its kind's envelope
/// - `404 Not Found` - The pair is not linked
pub async fn related_instance_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id, relation, target)): Path<(String, String, String, String)>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (relation, id, target) = resolver::related_instance(&kind, &id, &relation, &target)?;
    debug!(
        relation = %relation,
        id = %id.raw(),
        target = %target.raw(),
        "Processing related instance read"
    );

    let entity = match (id.id(), target.id()) {
        (Some(source), Some(target)) => {
            state
                .storage()
                .related_instance(source, relation, target)
                .await?
        }
        _ => None,
    };

    match entity {
        Some(entity) => {
            collection_response(relation.target(), std::slice::from_ref(&entity), format)
        }
        None => Err(RestError::no_instance(link_path(
            relation,
            id.raw(),
            target.raw(),
        ))),
    }
}

/// Handler for amending one linked entity.
///
/// # HTTP Request
///
/// `POST [base]/[kind]/[id]/[relation]/[target]`
///
/// # Response
///
/// - `200 OK` - The updated target entity
/// - `400 Bad Request` - Source entity does not exist (legacy message), or bad body
/// - `404 Not Found` - The pair is not linked
pub async fn amend_related_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id, relation, target)): Path<(String, String, String, String)>,
    Negotiated(format): Negotiated,
    Payload(fields): Payload,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (relation, id, target) = resolver::related_instance(&kind, &id, &relation, &target)?;
    debug!(
        relation = %relation,
        id = %id.raw(),
        target = %target.raw(),
        "Processing related instance amend"
    );

    let legacy = state.legacy_errors();
    let Some(source) = id.id() else {
        return Err(missing_parent(relation, &id, legacy));
    };
    let Some(target_id) = target.id() else {
        return Err(no_link(relation, &id, &target));
    };

    let entity = state
        .storage()
        .merge_related(source, relation, target_id, fields)
        .await
        .map_err(|e| match e {
            StorageError::Relationship(RelationshipError::NoSuchParent { .. }) => {
                missing_parent(relation, &id, legacy)
            }
            other => other.into(),
        })?;
    entity_response(StatusCode::OK, &entity, format)
}

/// Handler for unlinking.
///
/// Only the link is removed; both entities remain.
///
/// # HTTP Request
///
/// `DELETE [base]/[kind]/[id]/[relation]/[target]`
///
/// # Response
///
/// - `200 OK` - Unlinked, empty body
/// - `404 Not Found` - The pair is not linked
pub async fn unlink_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id, relation, target)): Path<(String, String, String, String)>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (relation, id, target) = resolver::related_instance(&kind, &id, &relation, &target)?;
    debug!(
        relation = %relation,
        id = %id.raw(),
        target = %target.raw(),
        "Processing unlink request"
    );

    let (Some(source), Some(target_id)) = (id.id(), target.id()) else {
        return Err(no_link(relation, &id, &target));
    };

    state.storage().unlink(source, relation, target_id).await?;
    Ok(empty_response(format))
}

fn missing_parent(relation: Relation, id: &IdSegment, legacy: bool) -> RestError {
    if legacy {
        RestError::legacy()
    } else {
        StorageError::from(RelationshipError::no_such_parent(relation, id.raw())).into()
    }
}

fn no_link(relation: Relation, id: &IdSegment, target: &IdSegment) -> RestError {
    StorageError::from(ResourceError::no_matching_link(
        relation,
        id.raw(),
        target.raw(),
    ))
    .into()
}
