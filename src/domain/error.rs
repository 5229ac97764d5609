//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the orbit map's structural rules.
/// These are independent of CLI concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("node {child} already orbits {existing}, cannot attach under {requested}")]
    DuplicateParent {
        child: String,
        existing: String,
        requested: String,
    },

    #[error("duplicate edge: {parent}){child}")]
    DuplicateEdge { parent: String, child: String },

    #[error("cycle detected: {parent}){child} would make {child} its own ancestor")]
    CycleDetected { parent: String, child: String },

    #[error("no common ancestor: {a} and {b} are in disconnected trees")]
    Disconnected { a: String, b: String },

    #[error("node {0} does not orbit anything")]
    NoParent(String),

    #[error("invalid edge record '{line}': {reason}")]
    InvalidRecord { line: String, reason: String },

    #[error("map file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read map file: {0}")]
    FileReadError(#[from] std::io::Error),
}

/// Result type for orbit map operations.
pub type DomainResult<T> = Result<T, DomainError>;
