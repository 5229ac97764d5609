//! Arena-based orbit map: nodes, parent/child links, and traversal.

use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// A single body in the orbit map.
#[derive(Debug)]
pub struct OrbitNode {
    /// Unique string identifier
    pub tag: String,
    /// Index of the node this one orbits, None for roots
    pub parent: Option<Index>,
    /// Indices of orbiting nodes, in edge-insertion order
    pub children: Vec<Index>,
}

impl fmt::Display for OrbitNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Arena-backed tree of orbit relationships.
///
/// Uses generational arena for memory-safe node references: the parent link
/// is a non-owning `Index` back-reference, ownership runs strictly
/// parent -> children. Nodes are only ever added, never removed.
#[derive(Debug)]
pub struct OrbitMap {
    arena: Arena<OrbitNode>,
}

impl Default for OrbitMap {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitMap {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Insert a node with the given tag. When a parent is supplied, the new
    /// node is also recorded in the parent's children sequence.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, tag: String, parent: Option<Index>) -> Index {
        let node = OrbitNode {
            tag,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        }

        node_idx
    }

    /// Record `child` under `parent`. Sets the child's parent link when it
    /// is still absent. Caller contract: the pair must not already be
    /// connected (the builder enforces this before calling).
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, child: Index) {
        if let Some(node) = self.arena.get_mut(child) {
            if node.parent.is_none() {
                node.parent = Some(parent);
            }
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn node(&self, idx: Index) -> Option<&OrbitNode> {
        self.arena.get(idx)
    }

    /// Tag of the node at `idx`, if it exists.
    pub fn tag(&self, idx: Index) -> Option<&str> {
        self.arena.get(idx).map(|n| n.tag.as_str())
    }

    /// Look up a node by its tag. Linear scan; tags are unique per build.
    pub fn find_tag(&self, tag: &str) -> Option<Index> {
        self.arena
            .iter()
            .find(|(_, node)| node.tag == tag)
            .map(|(idx, _)| idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// All parentless nodes, in insertion order. A fully connected map has
    /// exactly one.
    pub fn roots(&self) -> Vec<Index> {
        self.arena
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// The first root, None for an empty map.
    pub fn root(&self) -> Option<Index> {
        self.roots().into_iter().next()
    }

    /// Walk the parent chain starting at `idx` (inclusive), ending at the
    /// root of its tree.
    pub fn ancestors(&self, idx: Index) -> AncestorIter<'_> {
        AncestorIter {
            map: self,
            cursor: Some(idx),
        }
    }

    /// Orbit count: parent-hops from `idx` to its root, 0 for the root.
    #[instrument(level = "trace", skip(self))]
    pub fn orbits(&self, idx: Index) -> usize {
        self.ancestors(idx).count().saturating_sub(1)
    }

    /// The root of the tree containing `idx`. Identity for the root itself.
    #[instrument(level = "trace", skip(self))]
    pub fn find_root(&self, idx: Index) -> Index {
        self.ancestors(idx).last().unwrap_or(idx)
    }

    /// Pre-order traversal of the whole map, starting at its root.
    pub fn iter(&self) -> PreOrderIter<'_> {
        match self.root() {
            Some(root) => self.iter_from(root),
            None => PreOrderIter {
                map: self,
                stack: Vec::new(),
            },
        }
    }

    /// Lazy pre-order traversal from `idx`: the node itself, then each child
    /// subtree in edge-insertion order. Calling again from the same node
    /// reproduces the identical sequence.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, idx: Index) -> PreOrderIter<'_> {
        PreOrderIter {
            map: self,
            stack: vec![idx],
        }
    }

    /// Nodes matching `predicate`, in traversal order over the entire tree
    /// containing `idx` (the walk is anchored at the tree's root, not at
    /// `idx`).
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn filter_from<P>(&self, idx: Index, mut predicate: P) -> Vec<Index>
    where
        P: FnMut(&OrbitNode) -> bool,
    {
        let root = self.find_root(idx);
        self.iter_from(root)
            .filter(|(_, node)| predicate(node))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Sum of orbit counts over every node: the map's orbit checksum.
    #[instrument(level = "debug", skip(self))]
    pub fn total_orbits(&self) -> usize {
        self.arena.iter().map(|(idx, _)| self.orbits(idx)).sum()
    }

    /// Tags of all nodes nothing orbits around, in traversal order per tree.
    pub fn leaf_tags(&self) -> Vec<String> {
        self.roots()
            .into_iter()
            .flat_map(|root| self.filter_from(root, |node| node.children.is_empty()))
            .filter_map(|idx| self.tag(idx).map(str::to_owned))
            .collect()
    }
}

/// Parent-chain iterator, starting node included.
pub struct AncestorIter<'a> {
    map: &'a OrbitMap,
    cursor: Option<Index>,
}

impl Iterator for AncestorIter<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = self.map.node(current).and_then(|n| n.parent);
        Some(current)
    }
}

/// Explicit-stack pre-order iterator. State is bounded by the current path's
/// sibling count rather than the tree size.
pub struct PreOrderIter<'a> {
    map: &'a OrbitMap,
    stack: Vec<Index>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a OrbitNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.map.node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
