//! Orbit map ancestry queries.
//!
//! Builds a tree of uniquely-tagged nodes from `A)B` edge records and
//! answers two questions about it: how deep a node orbits (parent-hops to
//! the root) and how far apart two nodes are, routed through their lowest
//! common ancestor. The [`domain`] module is the pure core; [`cli`] is thin
//! glue around it.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    distance, lowest_common_ancestor, transfers, DomainError, DomainResult, EdgeRecord,
    MapBuilder, OrbitMap, OrbitNode,
};
