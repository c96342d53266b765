//! Staging index
//!
//! The index records what the next commit will contain: a flat mapping from
//! working-tree-relative path to blob hash. It is persisted as a JSON
//! object with sorted keys and rewritten in full after every mutation, so
//! there is never in-memory-only staged state across process invocations.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// The staging area: path → blob hash for the next commit.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.nit/index`)
    path: Box<Path>,
    /// Staged files mapped by path
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing any in-memory state. A missing
    /// or empty file is an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .context(format!("Unable to read index file {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(());
        }

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&content).context("Invalid index file")?;
        for (path, oid) in raw {
            self.entries.insert(path, ObjectId::try_parse(oid)?);
        }

        Ok(())
    }

    /// Insert or overwrite one entry and flush.
    pub fn stage(&mut self, path: String, oid: ObjectId) -> anyhow::Result<()> {
        self.entries.insert(path, oid);
        self.flush()
    }

    /// Remove one entry and flush. Returns false when the path was not
    /// staged (nothing is written in that case).
    pub fn unstage(&mut self, path: &str) -> anyhow::Result<bool> {
        if self.entries.remove(path).is_none() {
            return Ok(false);
        }

        self.flush()?;
        Ok(true)
    }

    /// Drop every entry and flush. Called exactly once per successful
    /// commit, as its final step.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.flush()
    }

    pub fn entry(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> &BTreeMap<String, ObjectId> {
        &self.entries
    }

    /// The full staged mapping, for building a commit tree.
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> anyhow::Result<()> {
        let raw: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(path, oid)| (path.as_str(), oid.as_ref()))
            .collect();

        let content = serde_json::to_string_pretty(&raw).context("Unable to encode index")?;
        std::fs::write(&self.path, content)
            .context(format!("Unable to write index file {}", self.path.display()))?;

        Ok(())
    }
}
