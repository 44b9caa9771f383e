//! Response format extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::codec::MediaFormat;
use crate::middleware::content_type::negotiate_format;

/// The response format the client asked for via `Accept`.
///
/// Never rejects: clients that name neither JSON nor XML get JSON.
///
/// # Example
///
/// ```rust,ignore
/// use todo_rest::extractors::Negotiated;
///
/// async fn handler(Negotiated(format): Negotiated) {
///     println!("responding with {}", format.mime_type());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negotiated(pub MediaFormat);

impl<S> FromRequestParts<S> for Negotiated
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Negotiated(negotiate_format(&parts.headers)))
    }
}
