//! Relationship request payloads.

use super::fields::FieldSet;
use super::kind::EntityKind;

/// What a relationship POST body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPayload {
    /// Link an existing entity. The raw text is kept so that a malformed id
    /// reports as a missing target rather than a parse failure.
    ById(String),
    /// Create an entity of the target kind from these fields, then link it.
    ByFields(FieldSet),
    /// Neither an id nor any recognised field of the target kind.
    Invalid,
}

impl LinkPayload {
    /// Classifies a body against the target kind. An `id` entry always wins.
    pub fn classify(target: EntityKind, fields: FieldSet) -> Self {
        if let Some(id) = fields.get("id") {
            return LinkPayload::ById(id.as_text().unwrap_or_default());
        }
        if fields.iter().any(|(name, _)| target.has_field(name)) {
            LinkPayload::ByFields(fields)
        } else {
            LinkPayload::Invalid
        }
    }
}
