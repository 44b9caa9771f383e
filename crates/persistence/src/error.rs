//! Error types for the persistence layer.
//!
//! Errors are grouped by what went wrong: a request body that does not fit
//! the schema ([`ValidationError`]), an entity or link that does not exist
//! ([`ResourceError`]), or a relationship request that cannot be carried out
//! ([`RelationshipError`]). Every message is the exact text reported to API
//! clients.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::{EntityKind, FieldType, Relation};

/// The primary error type for all storage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Schema validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity and link lookup errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Relationship request errors
    #[error(transparent)]
    Relationship(#[from] RelationshipError),
}

/// A request body rejected by the kind's schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name that is not a field of the kind.
    #[error("Could not find field: {field}")]
    FieldNotFound { field: String },

    /// A required field was omitted.
    #[error("{field} : field is mandatory")]
    MissingRequired { field: String },

    /// A mandatory field was supplied as empty text.
    #[error("Failed Validation: {field} : can not be empty")]
    EmptyField { field: String },

    /// A value of the wrong type.
    #[error("Failed Validation: {field} should be {}", .expected.label())]
    InvalidValue { field: String, expected: FieldType },

    /// Creation bodies may not choose the id.
    #[error("Invalid Creation: Failed Validation: Not allowed to create with id")]
    IdNotAllowed,

    /// Update bodies may only repeat the current id.
    #[error("Can not amend id on Entity {kind}/{id} to {value}")]
    IdMismatch {
        kind: EntityKind,
        id: String,
        value: String,
    },
}

/// A lookup that found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Read or update of a missing entity (or related instance).
    #[error("Could not find an instance with {path}")]
    NotFound { path: String },

    /// Delete or unlink of something that does not exist.
    #[error("Could not find any instances with {path}")]
    NoMatchingInstances { path: String },
}

impl ResourceError {
    /// Missing entity on read or update.
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        ResourceError::NotFound {
            path: format!("{}/{}", kind, id.to_string()),
        }
    }

    /// Missing entity on delete.
    pub fn no_matching(kind: EntityKind, id: impl ToString) -> Self {
        ResourceError::NoMatchingInstances {
            path: format!("{}/{}", kind, id.to_string()),
        }
    }

    /// Missing link on unlink or relationship-instance access.
    pub fn no_matching_link(relation: Relation, id: impl ToString, target: impl ToString) -> Self {
        ResourceError::NoMatchingInstances {
            path: link_path(relation, id, target),
        }
    }
}

/// A relationship request that cannot be carried out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationshipError {
    /// The source entity of the relationship does not exist.
    #[error("Could not find parent thing for relationship {kind}/{id}/{relation}")]
    NoSuchParent {
        kind: EntityKind,
        id: String,
        relation: Relation,
    },

    /// The entity named by `id` in the body does not exist.
    #[error("Could not find thing matching value for id")]
    NoSuchTarget,

    /// A body with neither an id nor a field of the target kind.
    #[error("Relationship {kind}/{id}/{relation} requires an id or {target} fields")]
    InvalidPayload {
        kind: EntityKind,
        id: String,
        relation: Relation,
        target: EntityKind,
    },
}

impl RelationshipError {
    /// Missing source entity.
    pub fn no_such_parent(relation: Relation, id: impl ToString) -> Self {
        RelationshipError::NoSuchParent {
            kind: relation.source(),
            id: id.to_string(),
            relation,
        }
    }

    /// Unusable link-or-create body.
    pub fn invalid_payload(relation: Relation, id: impl ToString) -> Self {
        RelationshipError::InvalidPayload {
            kind: relation.source(),
            id: id.to_string(),
            relation,
            target: relation.target(),
        }
    }
}

/// `{kind}/{id}/{relation}/{target}`.
pub fn link_path(relation: Relation, id: impl ToString, target: impl ToString) -> String {
    format!(
        "{}/{}/{}/{}",
        relation.source(),
        id.to_string(),
        relation,
        target.to_string()
    )
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::FieldNotFound {
            field: "fake_attribute".into(),
        };
        assert_eq!(err.to_string(), "Could not find field: fake_attribute");

        let err = ValidationError::MissingRequired {
            field: "title".into(),
        };
        assert_eq!(err.to_string(), "title : field is mandatory");

        let err = ValidationError::InvalidValue {
            field: "doneStatus".into(),
            expected: FieldType::Boolean,
        };
        assert_eq!(
            err.to_string(),
            "Failed Validation: doneStatus should be BOOLEAN"
        );
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(
            ResourceError::not_found(EntityKind::Todo, "-1").to_string(),
            "Could not find an instance with todos/-1"
        );
        assert_eq!(
            ResourceError::no_matching(EntityKind::Todo, 9).to_string(),
            "Could not find any instances with todos/9"
        );
        assert_eq!(
            ResourceError::no_matching_link(Relation::ProjectCategories, 1, "-1").to_string(),
            "Could not find any instances with projects/1/categories/-1"
        );
    }

    #[test]
    fn test_relationship_messages() {
        assert_eq!(
            RelationshipError::no_such_parent(Relation::ProjectCategories, "-1").to_string(),
            "Could not find parent thing for relationship projects/-1/categories"
        );
        assert_eq!(
            RelationshipError::NoSuchTarget.to_string(),
            "Could not find thing matching value for id"
        );
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: StorageError = ResourceError::not_found(EntityKind::Project, 4).into();
        assert_eq!(err.to_string(), "Could not find an instance with projects/4");
        assert!(matches!(err, StorageError::Resource(_)));

        let err: StorageError = ValidationError::IdNotAllowed.into();
        assert_eq!(
            err.to_string(),
            "Invalid Creation: Failed Validation: Not allowed to create with id"
        );
    }
}
