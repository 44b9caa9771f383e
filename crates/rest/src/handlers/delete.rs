//! Delete handler.
//!
//! `DELETE [base]/[kind]/[id]`

use axum::{
    extract::{Path, State},
    response::Response,
};
use todo_persistence::core::RelationshipStorage;
use todo_persistence::error::{ResourceError, StorageError};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::Negotiated;
use crate::resolver;
use crate::responses::empty_response;
use crate::state::AppState;

/// Handler for deleting an entity.
///
/// Every link that mentions the entity is removed with it.
///
/// # HTTP Request
///
/// `DELETE [base]/[kind]/[id]`
///
/// # Response
///
/// - `200 OK` - Deleted, empty body
/// - `404 Not Found` - Entity does not exist
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, id)): Path<(String, String)>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (kind, id) = resolver::instance(&kind, &id)?;
    debug!(kind = %kind, id = %id.raw(), "Processing delete request");

    let Some(entity_id) = id.id() else {
        return Err(StorageError::from(ResourceError::no_matching(kind, id.raw())).into());
    };

    state.storage().delete(kind, entity_id).await?;
    debug!(kind = %kind, id = %entity_id, "Deleted entity");

    Ok(empty_response(format))
}
