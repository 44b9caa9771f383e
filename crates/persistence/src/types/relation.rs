//! Named relationships between entity kinds.
//!
//! Each undirected [`Link`] is stored once in the graph. A [`Relation`] is one
//! directed, named view onto a link, so every link is reachable from both of
//! its endpoints (`projects/1/tasks` and `todos/1/tasksof` read the same set).

use std::fmt;

use super::kind::EntityKind;

/// An undirected many-to-many association, stored once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Link {
    /// Todo ↔ Category.
    TodoCategory,
    /// Project ↔ Todo.
    ProjectTask,
    /// Project ↔ Category.
    ProjectCategory,
}

impl Link {
    /// The kind stored on the left of each canonical pair.
    pub fn left(&self) -> EntityKind {
        match self {
            Link::TodoCategory => EntityKind::Todo,
            Link::ProjectTask | Link::ProjectCategory => EntityKind::Project,
        }
    }

    /// The kind stored on the right of each canonical pair.
    pub fn right(&self) -> EntityKind {
        match self {
            Link::TodoCategory | Link::ProjectCategory => EntityKind::Category,
            Link::ProjectTask => EntityKind::Todo,
        }
    }
}

/// A directed, named view of a [`Link`] as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    /// `todos/{id}/tasksof` → projects.
    TodoTasksOf,
    /// `todos/{id}/categories` → categories.
    TodoCategories,
    /// `projects/{id}/tasks` → todos.
    ProjectTasks,
    /// `projects/{id}/categories` → categories.
    ProjectCategories,
    /// `categories/{id}/todos` → todos.
    CategoryTodos,
    /// `categories/{id}/projects` → projects.
    CategoryProjects,
}

impl Relation {
    /// Path segment naming this relation.
    pub fn name(&self) -> &'static str {
        match self {
            Relation::TodoTasksOf => "tasksof",
            Relation::TodoCategories | Relation::ProjectCategories => "categories",
            Relation::ProjectTasks => "tasks",
            Relation::CategoryTodos => "todos",
            Relation::CategoryProjects => "projects",
        }
    }

    /// Kind of the entity the relation is read from.
    pub fn source(&self) -> EntityKind {
        match self {
            Relation::TodoTasksOf | Relation::TodoCategories => EntityKind::Todo,
            Relation::ProjectTasks | Relation::ProjectCategories => EntityKind::Project,
            Relation::CategoryTodos | Relation::CategoryProjects => EntityKind::Category,
        }
    }

    /// Kind of the entities the relation yields.
    pub fn target(&self) -> EntityKind {
        match self {
            Relation::TodoTasksOf | Relation::CategoryProjects => EntityKind::Project,
            Relation::TodoCategories | Relation::ProjectCategories => EntityKind::Category,
            Relation::ProjectTasks | Relation::CategoryTodos => EntityKind::Todo,
        }
    }

    /// The undirected link this relation reads.
    pub fn link(&self) -> Link {
        match self {
            Relation::TodoCategories | Relation::CategoryTodos => Link::TodoCategory,
            Relation::TodoTasksOf | Relation::ProjectTasks => Link::ProjectTask,
            Relation::ProjectCategories | Relation::CategoryProjects => Link::ProjectCategory,
        }
    }

    /// The same link read from the other endpoint.
    pub fn inverse(&self) -> Relation {
        match self {
            Relation::TodoTasksOf => Relation::ProjectTasks,
            Relation::ProjectTasks => Relation::TodoTasksOf,
            Relation::TodoCategories => Relation::CategoryTodos,
            Relation::CategoryTodos => Relation::TodoCategories,
            Relation::ProjectCategories => Relation::CategoryProjects,
            Relation::CategoryProjects => Relation::ProjectCategories,
        }
    }

    /// True when the source is the left side of the canonical pair.
    pub fn reads_left_to_right(&self) -> bool {
        self.link().left() == self.source()
    }

    /// Relations readable from `kind`, in rendering order.
    pub fn from_kind(kind: EntityKind) -> &'static [Relation] {
        match kind {
            EntityKind::Todo => &[Relation::TodoTasksOf, Relation::TodoCategories],
            EntityKind::Project => &[Relation::ProjectTasks, Relation::ProjectCategories],
            EntityKind::Category => &[Relation::CategoryTodos, Relation::CategoryProjects],
        }
    }

    /// Looks up a relation by its path segment on `kind`.
    pub fn parse(kind: EntityKind, name: &str) -> Option<Relation> {
        Self::from_kind(kind).iter().copied().find(|r| r.name() == name)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for kind in EntityKind::ALL {
            for relation in Relation::from_kind(kind) {
                let inverse = relation.inverse();
                assert_eq!(inverse.inverse(), *relation);
                assert_eq!(inverse.link(), relation.link());
                assert_eq!(inverse.source(), relation.target());
                assert_eq!(inverse.target(), relation.source());
            }
        }
    }

    #[test]
    fn test_parse_is_scoped_by_kind() {
        assert_eq!(
            Relation::parse(EntityKind::Todo, "tasksof"),
            Some(Relation::TodoTasksOf)
        );
        assert_eq!(Relation::parse(EntityKind::Project, "tasksof"), None);
        assert_eq!(
            Relation::parse(EntityKind::Project, "categories"),
            Some(Relation::ProjectCategories)
        );
    }

    #[test]
    fn test_orientation() {
        assert!(Relation::ProjectTasks.reads_left_to_right());
        assert!(!Relation::TodoTasksOf.reads_left_to_right());
        assert_eq!(Link::ProjectTask.left(), EntityKind::Project);
        assert_eq!(Link::ProjectTask.right(), EntityKind::Todo);
    }
}
