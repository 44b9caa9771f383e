//! Read handlers.
//!
//! `GET [base]/[kind]` and `GET [base]/[kind]/[id]`

use axum::{
    extract::{Path, State},
    response::Response,
};
use todo_persistence::core::RelationshipStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::Negotiated;
use crate::resolver::{self, Member};
use crate::responses::collection_response;
use crate::state::AppState;

/// Handler for listing a collection.
///
/// # HTTP Request
///
/// `GET [base]/[kind]`
///
/// # Response
///
/// - `200 OK` - Every entity of the kind in id order, in the kind's envelope
/// - `404 Not Found` - Unknown collection
///
/// # Example
///
/// ```http
/// GET /todos HTTP/1.1
/// Accept: application/json
/// ```
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    Path(kind): Path<String>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let kind = resolver::collection(&kind)?;
    debug!(kind = %kind, "Processing list request");

    let entities = state.storage().list(kind).await?;
    collection_response(kind, &entities, format)
}

/// Handler for reading one entity.
///
/// A relation name in the id position (`GET /projects/tasks`) is the
/// relationship view over every source entity.
///
/// # HTTP Request
///
/// `GET [base]/[kind]/[id]`
///
/// # Response
///
/// - `200 OK` - The entity, wrapped in the kind's envelope
/// - `404 Not Found` - Entity does not exist
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path((kind, segment)): Path<(String, String)>,
    Negotiated(format): Negotiated,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let (kind, member) = resolver::member(&kind, &segment)?;

    match member {
        Member::View(relation) => {
            debug!(relation = %relation, "Processing relationship view without a source");
            let entities = state.storage().related(None, relation).await?;
            collection_response(relation.target(), &entities, format)
        }
        Member::Instance(id) => {
            debug!(kind = %kind, id = %id.raw(), "Processing read request");

            let entity = match id.id() {
                Some(id) => state.storage().read(kind, id).await?,
                None => None,
            };

            match entity {
                Some(entity) => collection_response(kind, std::slice::from_ref(&entity), format),
                None => {
                    debug!(kind = %kind, id = %id.raw(), "Entity not found");
                    Err(RestError::no_instance(format!("{}/{}", kind, id.raw())))
                }
            }
        }
    }
}
