//! JSON and XML representations of entities, collections and errors.
//!
//! Both formats carry the same information:
//!
//! - an entity is its `id`, then its schema fields in declaration order
//!   (booleans as the text `true`/`false`), then one list of `{"id": …}`
//!   references per non-empty relation;
//! - a collection wraps its entities in an envelope named after the kind
//!   (`{"todos": [...]}` / `<todos><todo>…</todo></todos>`);
//! - errors are `{"errorMessages": [...]}` /
//!   `<errorMessages><errorMessage>…</errorMessage></errorMessages>`.
//!
//! Request bodies decode into a [`FieldSet`] with no schema checks; the
//! store validates.

pub mod json;
pub mod xml;

use thiserror::Error;
use todo_persistence::types::{Entity, EntityKind, FieldSet};

/// Name of the error envelope.
pub const ERROR_ENVELOPE: &str = "errorMessages";

/// Name of one error element in XML.
pub const ERROR_ELEMENT: &str = "errorMessage";

/// A wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFormat {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl MediaFormat {
    /// Returns the MIME type string for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Json => "application/json",
            MediaFormat::Xml => "application/xml",
        }
    }

    /// Parses a single media type (`application/xml; charset=utf-8`).
    /// Structured suffixes count, so `application/vnd.todo+json` is JSON.
    pub fn parse(media_type: &str) -> Option<Self> {
        let mime: mime::Mime = media_type.trim().parse().ok()?;
        let is = |name: mime::Name<'static>| mime.subtype() == name || mime.suffix() == Some(name);

        if is(mime::JSON) {
            Some(MediaFormat::Json)
        } else if is(mime::XML) {
            Some(MediaFormat::Xml)
        } else {
            None
        }
    }
}

/// Errors raised while reading or writing a representation.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("Malformed JSON body: expected an object, found {0}")]
    NotAnObject(&'static str),

    /// The body is not well-formed XML.
    #[error("Malformed XML body: {0}")]
    Xml(String),

    /// The body is not UTF-8.
    #[error("Request body is not valid UTF-8")]
    Encoding,

    /// Writing the representation failed.
    #[error("Failed to write response: {0}")]
    Write(#[from] std::io::Error),
}

impl From<quick_xml::Error> for CodecError {
    fn from(err: quick_xml::Error) -> Self {
        CodecError::Xml(err.to_string())
    }
}

/// Encodes a single entity without an envelope.
pub fn encode_entity(entity: &Entity, format: MediaFormat) -> Result<Vec<u8>, CodecError> {
    match format {
        MediaFormat::Json => json::encode_entity(entity),
        MediaFormat::Xml => xml::encode_entity(entity),
    }
}

/// Encodes entities of one kind inside the kind's envelope.
pub fn encode_collection(
    kind: EntityKind,
    entities: &[Entity],
    format: MediaFormat,
) -> Result<Vec<u8>, CodecError> {
    match format {
        MediaFormat::Json => json::encode_collection(kind, entities),
        MediaFormat::Xml => xml::encode_collection(kind, entities),
    }
}

/// Encodes an error envelope.
pub fn encode_errors(messages: &[String], format: MediaFormat) -> Result<Vec<u8>, CodecError> {
    match format {
        MediaFormat::Json => json::encode_errors(messages),
        MediaFormat::Xml => xml::encode_errors(messages),
    }
}

/// Decodes a request body. An empty or whitespace-only body is an empty
/// field set in either format.
pub fn decode_fields(body: &[u8], format: MediaFormat) -> Result<FieldSet, CodecError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FieldSet::new());
    }
    match format {
        MediaFormat::Json => json::decode_fields(body),
        MediaFormat::Xml => xml::decode_fields(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_media_type() {
        assert_eq!(MediaFormat::parse("application/json"), Some(MediaFormat::Json));
        assert_eq!(
            MediaFormat::parse("application/xml; charset=utf-8"),
            Some(MediaFormat::Xml)
        );
        assert_eq!(MediaFormat::parse("text/xml"), Some(MediaFormat::Xml));
        assert_eq!(
            MediaFormat::parse("application/vnd.todo+json"),
            Some(MediaFormat::Json)
        );
        assert_eq!(MediaFormat::parse("text/plain"), None);
        assert_eq!(MediaFormat::parse("*/*"), None);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(MediaFormat::Json.mime_type(), "application/json");
        assert_eq!(MediaFormat::Xml.mime_type(), "application/xml");
    }

    #[test]
    fn test_blank_body_is_empty_set() {
        for format in [MediaFormat::Json, MediaFormat::Xml] {
            assert!(decode_fields(b"", format).unwrap().is_empty());
            assert!(decode_fields(b"  \n", format).unwrap().is_empty());
        }
    }
}
