//! Ancestry queries over a finished orbit map.

use std::collections::HashSet;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::OrbitMap;
use crate::domain::error::{DomainError, DomainResult};

/// The deepest node that is an ancestor of both `a` and `b`, by identity.
///
/// Returns None when the two nodes live in disconnected trees. A node
/// counts as its own ancestor, so `lowest_common_ancestor(map, a, a)` is
/// `Some(a)`.
#[instrument(level = "debug", skip(map))]
pub fn lowest_common_ancestor(map: &OrbitMap, a: Index, b: Index) -> Option<Index> {
    if map.find_root(a) != map.find_root(b) {
        return None;
    }

    let chain: HashSet<Index> = map.ancestors(a).collect();
    // The first of b's ancestors on a's chain is the deepest shared one;
    // the shared root guarantees a hit.
    map.ancestors(b).find(|idx| chain.contains(idx))
}

/// Number of edges on the path between `a` and `b`, routed through their
/// lowest common ancestor. Errors with [`DomainError::Disconnected`] when
/// no common ancestor exists.
#[instrument(level = "debug", skip(map))]
pub fn distance(map: &OrbitMap, a: Index, b: Index) -> DomainResult<usize> {
    let ancestor =
        lowest_common_ancestor(map, a, b).ok_or_else(|| DomainError::Disconnected {
            a: tag_of(map, a),
            b: tag_of(map, b),
        })?;

    Ok(hops_to(map, a, ancestor) + hops_to(map, b, ancestor))
}

/// Orbital transfers between the bodies `from` and `to` orbit: the distance
/// between their parents. Errors when either node is a root.
#[instrument(level = "debug", skip(map))]
pub fn transfers(map: &OrbitMap, from: Index, to: Index) -> DomainResult<usize> {
    let from_parent = parent_of(map, from)?;
    let to_parent = parent_of(map, to)?;
    distance(map, from_parent, to_parent)
}

fn parent_of(map: &OrbitMap, idx: Index) -> DomainResult<Index> {
    map.node(idx)
        .and_then(|n| n.parent)
        .ok_or_else(|| DomainError::NoParent(tag_of(map, idx)))
}

fn hops_to(map: &OrbitMap, from: Index, ancestor: Index) -> usize {
    map.ancestors(from)
        .take_while(|&idx| idx != ancestor)
        .count()
}

fn tag_of(map: &OrbitMap, idx: Index) -> String {
    map.tag(idx).unwrap_or_default().to_string()
}
