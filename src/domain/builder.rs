//! Incremental map builder: edge ingestion with fail-fast validation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::OrbitMap;
use crate::domain::entities::EdgeRecord;
use crate::domain::error::{DomainError, DomainResult};

/// Builds an [`OrbitMap`] one edge at a time.
///
/// Owns the growing arena plus a tag registry, so lookup-by-tag is O(1)
/// during construction and tag uniqueness is enforced rather than assumed.
/// Construction is strictly sequential, a single caller feeding one edge at
/// a time; the finished map is read-only.
#[derive(Debug)]
pub struct MapBuilder {
    map: OrbitMap,
    tags: HashMap<String, Index>,
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            map: OrbitMap::new(),
            tags: HashMap::new(),
        }
    }

    /// Ingest one edge: attach `child_tag` under `parent_tag`.
    ///
    /// Unknown tags are created lazily, a parentless node for the parent and
    /// a pre-parented node for the child. A child first seen as someone
    /// else's parent keeps its node and gets its absent parent link filled
    /// in here.
    ///
    /// Rejected edges leave the builder untouched:
    /// - `DuplicateParent` when the child already orbits a different node
    /// - `DuplicateEdge` when this exact pair was already ingested
    /// - `CycleDetected` when the edge would make the child its own ancestor
    #[instrument(level = "debug", skip(self))]
    pub fn connect(&mut self, parent_tag: &str, child_tag: &str) -> DomainResult<()> {
        if parent_tag == child_tag {
            return Err(DomainError::CycleDetected {
                parent: parent_tag.to_string(),
                child: child_tag.to_string(),
            });
        }

        let parent_existing = self.tags.get(parent_tag).copied();
        let child_existing = self.tags.get(child_tag).copied();

        match child_existing {
            Some(child_idx) => {
                // Validate before touching the arena.
                match self.map.node(child_idx).and_then(|n| n.parent) {
                    Some(existing) if parent_existing == Some(existing) => {
                        return Err(DomainError::DuplicateEdge {
                            parent: parent_tag.to_string(),
                            child: child_tag.to_string(),
                        });
                    }
                    Some(existing) => {
                        let existing_tag = self.map.tag(existing).unwrap_or_default().to_string();
                        return Err(DomainError::DuplicateParent {
                            child: child_tag.to_string(),
                            existing: existing_tag,
                            requested: parent_tag.to_string(),
                        });
                    }
                    None => {
                        // Attaching an existing subtree: the parent must not
                        // already sit inside it.
                        if let Some(parent_idx) = parent_existing {
                            if self.map.ancestors(parent_idx).any(|idx| idx == child_idx) {
                                return Err(DomainError::CycleDetected {
                                    parent: parent_tag.to_string(),
                                    child: child_tag.to_string(),
                                });
                            }
                        }
                    }
                }
                let parent_idx =
                    parent_existing.unwrap_or_else(|| self.insert_tag(parent_tag, None));
                self.map.add_child(parent_idx, child_idx);
            }
            None => {
                let parent_idx =
                    parent_existing.unwrap_or_else(|| self.insert_tag(parent_tag, None));
                self.insert_tag(child_tag, Some(parent_idx));
            }
        }

        debug!("connected {}){}", parent_tag, child_tag);
        Ok(())
    }

    fn insert_tag(&mut self, tag: &str, parent: Option<Index>) -> Index {
        let idx = self.map.insert_node(tag.to_string(), parent);
        self.tags.insert(tag.to_string(), idx);
        idx
    }

    /// Ingest a batch of parsed records, in order.
    pub fn extend_from_records<I>(&mut self, records: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for record in records {
            self.connect(&record.parent, &record.child)?;
        }
        Ok(())
    }

    /// Index of a known tag during construction.
    pub fn get(&self, tag: &str) -> Option<Index> {
        self.tags.get(tag).copied()
    }

    /// Consume the builder, yielding the finished map.
    pub fn finish(self) -> OrbitMap {
        self.map
    }

    /// Read a map file (one `A)B` record per line) and build the map.
    #[instrument(level = "debug")]
    pub fn build_from_path(path: &Path) -> DomainResult<OrbitMap> {
        if !path.exists() {
            return Err(DomainError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let records = EdgeRecord::parse_document(&content)?;
        debug!(
            "parsed {} edge records from {}",
            records.len(),
            path.display()
        );

        let mut builder = Self::new();
        builder.extend_from_records(records)?;
        Ok(builder.finish())
    }
}
