//! Request body extractor.
//!
//! Reads the body as JSON or XML (by `Content-Type`) into a [`FieldSet`].
//! Schema checks are left to the store.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use todo_persistence::types::FieldSet;

use crate::codec;
use crate::error::RestError;
use crate::middleware::content_type::request_body_format;

/// Axum extractor for entity field bodies.
///
/// # Example
///
/// ```rust,ignore
/// use todo_rest::extractors::Payload;
///
/// async fn create_handler(Payload(fields): Payload) {
///     println!("{} fields", fields.len());
/// }
/// ```
#[derive(Debug)]
pub struct Payload(pub FieldSet);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = request_body_format(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RestError::PayloadTooLarge {
                    message: e.body_text(),
                }
            } else {
                RestError::BadRequest {
                    message: e.body_text(),
                }
            }
        })?;

        let fields = codec::decode_fields(&bytes, format)?;
        Ok(Payload(fields))
    }
}
