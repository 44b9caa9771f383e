//! Update handlers.
//!
//! `POST [base]/[kind]/[id]` amends an entity; `PUT [base]/[kind]/[id]`
//! replaces it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use todo_persistence::core::RelationshipStorage;
use todo_persistence::core::validation::validate_replace_fields;
use todo_persistence::error::StorageError;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Negotiated, Payload};
use crate::resolver;
use crate::responses::entity_response;
use crate::state::AppState;

/// Handler for a partial update.
///
/// Fields missing from the body keep their values; an empty body returns
/// the entity unchanged.
///
/// # HTTP Request
///
/// `POST [base]/[kind]/[id]`
///
/// # Response
///
/// - `200 OK` - The updated entity
/// - `400 Bad Request` - Unknown field or bad value
/// - `404 Not Found` - Entity does not exist
pub async fn amend_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id)): Path<(String, String)>,
    Negotiated(format): Negotiated,
    Payload(fields): Payload,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (kind, id) = resolver::instance(&kind, &id)?;
    debug!(kind = %kind, id = %id.raw(), fields = fields.len(), "Processing amend request");

    let Some(entity_id) = id.id() else {
        return Err(RestError::no_instance(format!("{}/{}", kind, id.raw())));
    };

    let entity = state.storage().merge(kind, entity_id, fields).await?;
    entity_response(StatusCode::OK, &entity, format)
}

/// Handler for a full replacement.
///
/// Every field missing from the body is reset to its default. The body is
/// checked for mandatory fields before the entity is looked up.
///
/// # HTTP Request
///
/// `PUT [base]/[kind]/[id]`
///
/// # Response
///
/// - `200 OK` - The replaced entity
/// - `400 Bad Request` - Missing mandatory field, unknown field or bad value
/// - `404 Not Found` - Entity does not exist
///
/// # Example
///
/// ```http
/// PUT /todos/1 HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "scan paperwork", "doneStatus": true}
/// ```
pub async fn replace_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id)): Path<(String, String)>,
    Negotiated(format): Negotiated,
    Payload(fields): Payload,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (kind, id) = resolver::instance(&kind, &id)?;
    debug!(kind = %kind, id = %id.raw(), fields = fields.len(), "Processing replace request");

    let Some(entity_id) = id.id() else {
        validate_replace_fields(kind, &fields).map_err(StorageError::from)?;
        return Err(RestError::no_instance(format!("{}/{}", kind, id.raw())));
    };

    let entity = state.storage().replace(kind, entity_id, fields).await?;
    entity_response(StatusCode::OK, &entity, format)
}
