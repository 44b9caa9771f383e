//! Format-aware response building.
//!
//! Serializes entities, collections and error envelopes to JSON or XML
//! based on content negotiation, and sets the matching `Content-Type`.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use todo_persistence::types::{Entity, EntityKind};

use crate::codec::{self, MediaFormat};
use crate::error::{ErrorMessages, RestResult};
use crate::middleware::content_type::content_type_header;

/// Builds a response holding one bare entity (create and update results).
pub fn entity_response(
    status: StatusCode,
    entity: &Entity,
    format: MediaFormat,
) -> RestResult<Response> {
    let body = codec::encode_entity(entity, format)?;
    Ok(body_response(status, body, format))
}

/// Builds a 200 response holding entities of `kind` in the kind's envelope.
pub fn collection_response(
    kind: EntityKind,
    entities: &[Entity],
    format: MediaFormat,
) -> RestResult<Response> {
    let body = codec::encode_collection(kind, entities, format)?;
    Ok(body_response(StatusCode::OK, body, format))
}

/// Builds a 200 response with no body.
pub fn empty_response(format: MediaFormat) -> Response {
    body_response(StatusCode::OK, Vec::new(), format)
}

/// Builds an error envelope response.
///
/// The messages are also attached as an [`ErrorMessages`] extension so the
/// response can be re-rendered later in a different format.
pub fn error_response(status: StatusCode, messages: &[String], format: MediaFormat) -> Response {
    let mut response = match codec::encode_errors(messages, format) {
        Ok(body) => body_response(status, body, format),
        Err(e) => {
            tracing::error!("Failed to encode error envelope: {}", e);
            (status, messages.join("\n")).into_response()
        }
    };
    response
        .extensions_mut()
        .insert(ErrorMessages(messages.to_vec()));
    response
}

fn body_response(status: StatusCode, body: Vec<u8>, format: MediaFormat) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, content_type_header(format))],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_headers() {
        let messages = vec!["Could not find field: x".to_string()];
        let response = error_response(StatusCode::BAD_REQUEST, &messages, MediaFormat::Xml);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
        assert_eq!(
            response.extensions().get::<ErrorMessages>().unwrap().0,
            messages
        );
    }

    #[test]
    fn test_empty_response() {
        let response = empty_response(MediaFormat::Json);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
