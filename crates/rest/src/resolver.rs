//! Resolution of request path segments against the schema.
//!
//! Routes capture raw segments (`/{kind}/{id}/{relation}/{target}`); this
//! module turns them into entity kinds, relations and identifiers, and
//! produces the 404 for any path that names nothing.
//!
//! Identifiers that are not plain decimal numbers (`-1`, `abc`) never match
//! an entity. They resolve to `None` and the raw segment is kept so error
//! messages can echo it back.

use todo_persistence::types::{EntityId, EntityKind, Relation};

use crate::error::{RestError, RestResult};

/// A path identifier segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSegment {
    raw: String,
    id: Option<EntityId>,
}

impl IdSegment {
    /// Parses a raw segment.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let id = EntityId::parse(&raw);
        Self { raw, id }
    }

    /// The segment as sent.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The identifier, if the segment is one.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// What `/{kind}/{segment}` names on a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// An entity identifier (possibly unparsable).
    Instance(IdSegment),
    /// A relation name in the id position: the view over every source.
    View(Relation),
}

/// Resolves a collection name (`todos`, `projects`, `categories`).
///
/// `path` is the request path without its leading `/`, used in the error.
pub fn kind(segment: &str, path: impl FnOnce() -> String) -> RestResult<EntityKind> {
    EntityKind::from_plural(segment).ok_or_else(|| RestError::no_instance(path()))
}

/// Resolves `/{kind}`.
pub fn collection(kind_segment: &str) -> RestResult<EntityKind> {
    kind(kind_segment, || kind_segment.to_string())
}

/// Resolves `/{kind}/{id}`.
pub fn instance(kind_segment: &str, id: &str) -> RestResult<(EntityKind, IdSegment)> {
    let kind = kind(kind_segment, || format!("{}/{}", kind_segment, id))?;
    Ok((kind, IdSegment::new(id)))
}

/// Resolves `/{kind}/{segment}` for reads, where the segment may be a
/// relation name instead of an id.
pub fn member(kind_segment: &str, segment: &str) -> RestResult<(EntityKind, Member)> {
    let (kind, id) = instance(kind_segment, segment)?;
    if id.id().is_none() {
        if let Some(relation) = Relation::parse(kind, segment) {
            return Ok((kind, Member::View(relation)));
        }
    }
    Ok((kind, Member::Instance(id)))
}

/// Resolves `/{kind}/{id}/{relation}`.
pub fn relationship(
    kind_segment: &str,
    id: &str,
    relation: &str,
) -> RestResult<(Relation, IdSegment)> {
    let path = || format!("{}/{}/{}", kind_segment, id, relation);
    let kind = kind(kind_segment, path)?;
    let relation = Relation::parse(kind, relation).ok_or_else(|| RestError::no_instance(path()))?;
    Ok((relation, IdSegment::new(id)))
}

/// Resolves `/{kind}/{id}/{relation}/{target}`.
pub fn related_instance(
    kind_segment: &str,
    id: &str,
    relation: &str,
    target: &str,
) -> RestResult<(Relation, IdSegment, IdSegment)> {
    let path = || format!("{}/{}/{}/{}", kind_segment, id, relation, target);
    let kind = kind(kind_segment, path)?;
    let relation = Relation::parse(kind, relation).ok_or_else(|| RestError::no_instance(path()))?;
    Ok((relation, IdSegment::new(id), IdSegment::new(target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_collection() {
        let err = collection("things").unwrap_err();
        assert_eq!(err.to_string(), "Could not find an instance with things");

        let err = instance("things", "1").unwrap_err();
        assert_eq!(err.to_string(), "Could not find an instance with things/1");
    }

    #[test]
    fn test_id_segments() {
        let (kind, id) = instance("todos", "12").unwrap();
        assert_eq!(kind, EntityKind::Todo);
        assert_eq!(id.id(), Some(EntityId::new(12)));

        let (_, id) = instance("todos", "-1").unwrap();
        assert_eq!(id.id(), None);
        assert_eq!(id.raw(), "-1");
    }

    #[test]
    fn test_relation_in_id_position() {
        let (_, member) = super::member("projects", "tasks").unwrap();
        assert_eq!(member, Member::View(Relation::ProjectTasks));

        let (_, member) = super::member("projects", "todos").unwrap();
        assert_eq!(member, Member::Instance(IdSegment::new("todos")));
    }

    #[test]
    fn test_unknown_relation() {
        let err = relationship("todos", "1", "tasks").unwrap_err();
        assert_eq!(err.to_string(), "Could not find an instance with todos/1/tasks");

        let (relation, id) = relationship("todos", "1", "tasksof").unwrap();
        assert_eq!(relation, Relation::TodoTasksOf);
        assert_eq!(id.id(), Some(EntityId::new(1)));
    }

    #[test]
    fn test_related_instance() {
        let (relation, id, target) = related_instance("categories", "2", "projects", "x").unwrap();
        assert_eq!(relation, Relation::CategoryProjects);
        assert_eq!(id.raw(), "2");
        assert_eq!(target.id(), None);

        let err = related_instance("categories", "2", "tasks", "1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find an instance with categories/2/tasks/1"
        );
    }
}
