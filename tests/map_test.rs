//! Tests for the arena-backed orbit map: depth, roots, traversal, filter.

use std::collections::HashSet;

use generational_arena::Index;
use rstest::{fixture, rstest};
use rsorbit::{MapBuilder, OrbitMap};

#[ctor::ctor]
fn init() {
    rsorbit::util::testing::init_test_setup();
}

const SAMPLE_EDGES: [(&str, &str); 11] = [
    ("COM", "B"),
    ("B", "C"),
    ("C", "D"),
    ("D", "E"),
    ("E", "F"),
    ("B", "G"),
    ("G", "H"),
    ("D", "I"),
    ("E", "J"),
    ("J", "K"),
    ("K", "L"),
];

#[fixture]
fn sample_map() -> OrbitMap {
    let mut builder = MapBuilder::new();
    for (parent, child) in SAMPLE_EDGES {
        builder.connect(parent, child).unwrap();
    }
    builder.finish()
}

fn idx(map: &OrbitMap, tag: &str) -> Index {
    map.find_tag(tag).unwrap()
}

fn tags(map: &OrbitMap, indices: &[Index]) -> Vec<String> {
    indices
        .iter()
        .map(|&i| map.tag(i).unwrap().to_string())
        .collect()
}

// ============================================================
// Depth / Root
// ============================================================

#[rstest]
fn given_sample_map_when_counting_nodes_then_twelve(sample_map: OrbitMap) {
    assert_eq!(sample_map.len(), 12);
}

#[rstest]
fn given_sample_map_when_checking_root_then_com_with_zero_orbits(sample_map: OrbitMap) {
    let roots = sample_map.roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(sample_map.tag(roots[0]), Some("COM"));
    assert_eq!(sample_map.orbits(roots[0]), 0);
}

#[rstest]
#[case("COM", 0)]
#[case("D", 3)]
#[case("H", 3)]
#[case("L", 7)]
fn given_sample_map_when_querying_orbits_then_matches(
    sample_map: OrbitMap,
    #[case] tag: &str,
    #[case] expected: usize,
) {
    assert_eq!(sample_map.orbits(idx(&sample_map, tag)), expected);
}

#[rstest]
fn given_any_node_when_querying_orbits_then_one_more_than_parent(sample_map: OrbitMap) {
    for (node_idx, node) in sample_map.iter() {
        if let Some(parent_idx) = node.parent {
            assert_eq!(
                sample_map.orbits(node_idx),
                sample_map.orbits(parent_idx) + 1,
                "orbit count of {} should be one more than its parent",
                node.tag
            );
        }
    }
}

#[rstest]
fn given_any_node_when_finding_root_then_com_and_idempotent(sample_map: OrbitMap) {
    let root = idx(&sample_map, "COM");
    for (node_idx, _) in sample_map.iter() {
        let found = sample_map.find_root(node_idx);
        assert_eq!(found, root);
        assert_eq!(sample_map.find_root(found), found);
    }
    assert_eq!(sample_map.orbits(sample_map.find_root(root)), 0);
}

#[rstest]
fn given_sample_map_when_summing_orbits_then_checksum_42(sample_map: OrbitMap) {
    assert_eq!(sample_map.total_orbits(), 42);
}

// ============================================================
// Traversal
// ============================================================

#[rstest]
fn given_sample_map_when_traversing_then_preorder_insertion_order(sample_map: OrbitMap) {
    let visited: Vec<Index> = sample_map.iter().map(|(i, _)| i).collect();
    let expected = [
        "COM", "B", "C", "D", "E", "F", "J", "K", "L", "I", "G", "H",
    ];
    assert_eq!(tags(&sample_map, &visited), expected);
}

#[rstest]
fn given_sample_map_when_traversing_then_every_node_exactly_once(sample_map: OrbitMap) {
    let visited: Vec<Index> = sample_map.iter().map(|(i, _)| i).collect();
    assert_eq!(visited.len(), sample_map.len());
    let unique: HashSet<Index> = visited.into_iter().collect();
    assert_eq!(unique.len(), sample_map.len());
}

#[rstest]
fn given_same_node_when_traversing_twice_then_identical_sequences(sample_map: OrbitMap) {
    let start = idx(&sample_map, "B");
    let first: Vec<Index> = sample_map.iter_from(start).map(|(i, _)| i).collect();
    let second: Vec<Index> = sample_map.iter_from(start).map(|(i, _)| i).collect();
    assert_eq!(first, second);
}

#[rstest]
fn given_inner_node_when_traversing_then_subtree_only(sample_map: OrbitMap) {
    let visited: Vec<Index> = sample_map
        .iter_from(idx(&sample_map, "E"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(tags(&sample_map, &visited), ["E", "F", "J", "K", "L"]);
}

#[rstest]
fn given_traversal_when_partially_consumed_then_no_blocking(sample_map: OrbitMap) {
    // Taking a prefix must work without draining the rest.
    let prefix: Vec<Index> = sample_map.iter().take(3).map(|(i, _)| i).collect();
    assert_eq!(tags(&sample_map, &prefix), ["COM", "B", "C"]);
}

// ============================================================
// Filter
// ============================================================

#[rstest]
fn given_leaf_node_when_filtering_then_whole_tree_searched(sample_map: OrbitMap) {
    // The filter is anchored at the tree's root regardless of entry node.
    let from_leaf = sample_map.filter_from(idx(&sample_map, "L"), |n| n.children.is_empty());
    assert_eq!(tags(&sample_map, &from_leaf), ["F", "L", "I", "H"]);

    let from_root = sample_map.filter_from(idx(&sample_map, "COM"), |n| n.children.is_empty());
    assert_eq!(from_leaf, from_root);
}

#[rstest]
fn given_predicate_on_tag_when_filtering_then_matches_in_traversal_order(sample_map: OrbitMap) {
    let matches = sample_map.filter_from(idx(&sample_map, "COM"), |n| n.tag.as_str() < "E");
    assert_eq!(tags(&sample_map, &matches), ["COM", "B", "C", "D"]);
}

#[rstest]
fn given_sample_map_when_listing_leaves_then_traversal_order(sample_map: OrbitMap) {
    assert_eq!(sample_map.leaf_tags(), ["F", "L", "I", "H"]);
}

// ============================================================
// Node primitives
// ============================================================

#[test]
fn given_parentless_child_when_adding_then_parent_link_filled() {
    let mut map = OrbitMap::new();
    let parent = map.insert_node("A".to_string(), None);
    let child = map.insert_node("B".to_string(), None);

    map.add_child(parent, child);

    let child_node = map.node(child).unwrap();
    assert_eq!(child_node.parent, Some(parent));
    assert_eq!(map.node(parent).unwrap().children, vec![child]);
}

#[test]
fn given_parented_child_when_adding_then_parent_link_kept() {
    let mut map = OrbitMap::new();
    let first = map.insert_node("A".to_string(), None);
    let child = map.insert_node("B".to_string(), Some(first));
    let second = map.insert_node("C".to_string(), None);

    map.add_child(second, child);

    assert_eq!(map.node(child).unwrap().parent, Some(first));
}

#[test]
fn given_empty_map_when_traversing_then_nothing() {
    let map = OrbitMap::new();
    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.total_orbits(), 0);
    assert!(map.root().is_none());
}
