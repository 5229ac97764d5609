//! termtree rendering of an orbit map

use generational_arena::Index;
use termtree::Tree;

use crate::domain::OrbitMap;

/// Build a printable tree rooted at `idx`, children in edge-insertion order.
pub fn to_tree_string(map: &OrbitMap, idx: Index) -> Tree<String> {
    let tag = map.tag(idx).unwrap_or_default().to_string();
    let mut tree = Tree::new(tag);
    if let Some(node) = map.node(idx) {
        for &child in &node.children {
            tree.push(to_tree_string(map, child));
        }
    }
    tree
}
