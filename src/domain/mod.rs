//! Domain layer: the orbit map and its queries
//!
//! This layer is independent of external concerns (no CLI, no terminal
//! output).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod query;

pub use arena::{OrbitMap, OrbitNode};
pub use builder::MapBuilder;
pub use entities::EdgeRecord;
pub use error::{DomainError, DomainResult};
pub use query::{distance, lowest_common_ancestor, transfers};
