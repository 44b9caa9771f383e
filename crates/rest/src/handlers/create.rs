//! Create handler.
//!
//! `POST [base]/[kind]`

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use todo_persistence::core::RelationshipStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{Negotiated, Payload};
use crate::resolver;
use crate::responses::entity_response;
use crate::state::AppState;

/// Handler for creating an entity.
///
/// The server assigns the id. Every creation attempt consumes an id, so a
/// rejected body leaves a gap in the sequence.
///
/// # HTTP Request
///
/// `POST [base]/[kind]`
///
/// # Headers
///
/// - `Content-Type` - `application/json` (default) or `application/xml`
///
/// # Response
///
/// - `201 Created` - The new entity, with a `Location` header
/// - `400 Bad Request` - Unknown field, missing mandatory field or bad value
///
/// # Example
///
/// ```http
/// POST /todos HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "water plants", "doneStatus": false}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Path(kind): Path<String>,
    Negotiated(format): Negotiated,
    Payload(fields): Payload,
) -> RestResult<Response>
where
    S: RelationshipStorage + Send + Sync,
{
    let kind = resolver::collection(&kind)?;
    debug!(kind = %kind, fields = fields.len(), "Processing create request");

    let entity = state.storage().create(kind, fields).await?;
    debug!(kind = %kind, id = %entity.id(), "Created entity");

    let mut response = entity_response(StatusCode::CREATED, &entity, format)?;
    if let Ok(location) = HeaderValue::from_str(&format!("/{}", entity.url())) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}
