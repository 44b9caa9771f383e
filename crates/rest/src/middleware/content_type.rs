//! Content negotiation.
//!
//! Responses are JSON unless the `Accept` header asks for XML. Request bodies
//! are read as XML when `Content-Type` names XML, and as JSON otherwise.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::codec::MediaFormat;
use crate::error::ErrorMessages;
use crate::responses::format::error_response;

/// Determines the response format from the Accept header.
///
/// Media types are tried in the order listed (quality values are ignored);
/// the first JSON or XML type wins. JSON is the default when the header is
/// absent, a wildcard, or names neither.
pub fn negotiate_format(headers: &HeaderMap) -> MediaFormat {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .and_then(|accept| accept.split(',').find_map(MediaFormat::parse))
        .unwrap_or_default()
}

/// Determines how to read the request body from the Content-Type header.
pub fn request_body_format(headers: &HeaderMap) -> MediaFormat {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(MediaFormat::parse)
        .unwrap_or_default()
}

/// Returns the `Content-Type` header value for a format.
pub fn content_type_header(format: MediaFormat) -> HeaderValue {
    HeaderValue::from_static(format.mime_type())
}

/// Re-renders error responses in the format the client asked for.
///
/// Errors are produced as JSON wherever they occur (handlers, extractors,
/// the fallback route); this layer rewrites them to XML for clients that
/// accept XML, keeping the status code.
pub async fn negotiate_errors(request: Request, next: Next) -> Response {
    let format = negotiate_format(request.headers());
    let response = next.run(request).await;

    if format == MediaFormat::Json {
        return response;
    }
    match response.extensions().get::<ErrorMessages>() {
        Some(ErrorMessages(messages)) => {
            error_response(response.status(), messages, format).into_response()
        }
        None => response,
    }
}
