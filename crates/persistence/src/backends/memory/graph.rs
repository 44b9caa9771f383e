//! Symmetric link storage.
//!
//! Each link is one `(left, right)` pair under its [`Link`], oriented as
//! [`Link::left`] / [`Link::right`]. Reading a relation from either endpoint
//! scans the same pairs, so both directions always agree.

use std::collections::BTreeMap;

use crate::types::{EntityId, EntityKind, Link, Relation};

#[derive(Debug, Default)]
pub(crate) struct RelationshipGraph {
    pairs: BTreeMap<Link, Vec<(EntityId, EntityId)>>,
}

fn canonical(relation: Relation, source: EntityId, target: EntityId) -> (EntityId, EntityId) {
    if relation.reads_left_to_right() {
        (source, target)
    } else {
        (target, source)
    }
}

impl RelationshipGraph {
    /// Adds a link. Returns false if the pair was already linked.
    pub(crate) fn link(&mut self, relation: Relation, source: EntityId, target: EntityId) -> bool {
        let pair = canonical(relation, source, target);
        let pairs = self.pairs.entry(relation.link()).or_default();
        if pairs.contains(&pair) {
            return false;
        }
        pairs.push(pair);
        true
    }

    /// Removes a link. Returns false if the pair was not linked.
    pub(crate) fn unlink(
        &mut self,
        relation: Relation,
        source: EntityId,
        target: EntityId,
    ) -> bool {
        let pair = canonical(relation, source, target);
        let Some(pairs) = self.pairs.get_mut(&relation.link()) else {
            return false;
        };
        let before = pairs.len();
        pairs.retain(|p| *p != pair);
        pairs.len() != before
    }

    pub(crate) fn contains(&self, relation: Relation, source: EntityId, target: EntityId) -> bool {
        let pair = canonical(relation, source, target);
        self.pairs
            .get(&relation.link())
            .is_some_and(|pairs| pairs.contains(&pair))
    }

    /// Ids reachable from `source` through `relation`, in link order.
    pub(crate) fn targets(&self, relation: Relation, source: EntityId) -> Vec<EntityId> {
        let Some(pairs) = self.pairs.get(&relation.link()) else {
            return Vec::new();
        };
        let forward = relation.reads_left_to_right();
        pairs
            .iter()
            .filter_map(|&(left, right)| match forward {
                true if left == source => Some(right),
                false if right == source => Some(left),
                _ => None,
            })
            .collect()
    }

    /// Drops every link that mentions the entity. Returns the number removed.
    pub(crate) fn remove_entity(&mut self, kind: EntityKind, id: EntityId) -> usize {
        let mut removed = 0;
        for (link, pairs) in self.pairs.iter_mut() {
            let before = pairs.len();
            if link.left() == kind {
                pairs.retain(|(left, _)| *left != id);
            }
            if link.right() == kind {
                pairs.retain(|(_, right)| *right != id);
            }
            removed += before - pairs.len();
        }
        removed
    }

    /// Total number of links.
    pub(crate) fn len(&self) -> usize {
        self.pairs.values().map(Vec::len).sum()
    }
}
