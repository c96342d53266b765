//! Commit object
//!
//! A commit snapshots the whole staging index as a flat path → blob map and
//! links to at most two parents (the second only for merge commits). The
//! serialization is canonical: tree entries are emitted in sorted path
//! order, so identical logical content always hashes identically.
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <blob-sha> <path>
//! ...
//! parent <parent-sha>
//! parent2 <merge-parent-sha>
//! author <free text>
//! timestamp <seconds since epoch>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// A snapshot of the repository with metadata and parent links.
///
/// The commit graph is a DAG: 0 parents for a root commit, 1 for an
/// ordinary commit, 2 for a merge commit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Flat mapping of working-tree path to blob hash; no directory objects
    tree: BTreeMap<String, ObjectId>,
    /// First parent (None for a root commit)
    parent: Option<ObjectId>,
    /// Second parent, present only on merge commits
    parent2: Option<ObjectId>,
    /// Free-text author, may be empty
    author: String,
    /// Commit message
    message: String,
    /// Seconds since epoch
    timestamp: i64,
}

impl Commit {
    pub fn new(
        tree: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
        parent2: Option<ObjectId>,
        author: String,
        message: String,
        timestamp: i64,
    ) -> Self {
        Commit {
            tree,
            parent,
            parent2,
            author,
            message,
            timestamp,
        }
    }

    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn parent2(&self) -> Option<&ObjectId> {
        self.parent2.as_ref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for short-form display.
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        // BTreeMap iteration gives the deterministic path order the
        // canonical form requires
        for (path, oid) in &self.tree {
            object_content.push(format!("tree {} {}", oid.as_ref(), path));
        }
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        if let Some(parent2) = &self.parent2 {
            object_content.push(format!("parent2 {}", parent2.as_ref()));
        }
        object_content.push(format!("author {}", self.author));
        object_content.push(format!("timestamp {}", self.timestamp));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");
        let content_bytes = object_content.into_bytes();

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let mut tree = BTreeMap::new();
        let mut parent = None;
        let mut parent2 = None;

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        while let Some(entry) = next_line.strip_prefix("tree ") {
            let (oid, path) = entry
                .split_once(' ')
                .context("Invalid commit object: malformed tree entry")?;
            tree.insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        if let Some(oid) = next_line.strip_prefix("parent ") {
            parent = Some(ObjectId::try_parse(oid.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        if let Some(oid) = next_line.strip_prefix("parent2 ") {
            parent2 = Some(ObjectId::try_parse(oid.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        // the author is free text and may be empty, in which case the line
        // is just "author"
        let author = next_line
            .strip_prefix("author")
            .context("Invalid commit object: invalid author line")?
            .strip_prefix(' ')
            .unwrap_or_default()
            .to_string();

        let timestamp_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = timestamp_line
            .strip_prefix("timestamp ")
            .context("Invalid commit object: invalid timestamp line")?
            .parse::<i64>()
            .context("Invalid commit object: non-numeric timestamp")?;

        // skip the empty line
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(tree, parent, parent2, author, message, timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
