//! References (HEAD, branches, remote-tracking heads, stash slots)
//!
//! References are human-readable names pointing to commits, stored as text
//! files under the metadata directory:
//!
//! - `HEAD` holds a bare ref name (`refs/heads/master`), a symbolic
//!   pointer-to-pointer giving "current branch" semantics
//! - `refs/heads/<branch>` holds a commit hash, or nothing for an unborn
//!   branch
//! - `refs/remotes/<remote>/heads/<branch>` mirrors a fetched remote tip
//! - `refs/stash/<n>` holds one stash snapshot per numeric slot

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the default branch created by init
pub const DEFAULT_BRANCH: &str = "master";

/// Reference manager over the metadata directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.nit`)
    path: Box<Path>,
}

impl Refs {
    /// The ref name HEAD currently designates.
    pub fn read_head_ref(&self) -> anyhow::Result<RefName> {
        let content = std::fs::read_to_string(self.head_path())
            .context("failed to read HEAD; is this a repository?")?;

        Ok(RefName::from_full(content.trim().to_string()))
    }

    /// Repoint the symbolic HEAD at another ref.
    pub fn set_head_ref(&self, target: &RefName) -> anyhow::Result<()> {
        self.write_ref_file(self.head_path(), target.as_str())
    }

    /// Resolve HEAD to a commit through one level of indirection. None
    /// before the first commit on the current branch.
    pub fn resolve_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref(&self.read_head_ref()?)
    }

    /// Advance the ref HEAD designates.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let current = self.read_head_ref()?;
        self.write_ref(&current, Some(oid))
    }

    pub fn ref_exists(&self, name: &RefName) -> bool {
        self.ref_path(name).exists()
    }

    /// Read a ref. Both a missing file and an empty file (an unborn ref)
    /// read as None.
    pub fn read_ref(&self, name: &RefName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.ref_path(name);
        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .context(format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Write a ref, creating parent directories as needed. None writes an
    /// empty file, representing an unborn ref.
    pub fn write_ref(&self, name: &RefName, value: Option<&ObjectId>) -> anyhow::Result<()> {
        let raw = value.map(|oid| oid.as_ref().to_string()).unwrap_or_default();
        self.write_ref_file(self.ref_path(name), &raw)
    }

    pub fn delete_ref(&self, name: &RefName) -> anyhow::Result<()> {
        let ref_path = self.ref_path(name);
        std::fs::remove_file(&ref_path)
            .context(format!("failed to delete ref file at {:?}", ref_path))
    }

    pub fn create_branch(
        &self,
        name: &BranchName,
        source_oid: Option<&ObjectId>,
    ) -> anyhow::Result<()> {
        let branch_ref = RefName::branch(name);

        if self.ref_exists(&branch_ref) {
            anyhow::bail!("branch {} already exists", name);
        }

        self.write_ref(&branch_ref, source_oid)
    }

    /// Delete a branch ref, returning the tip it held. The merged-or-forced
    /// safety check belongs to the caller.
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_ref = RefName::branch(name);

        if !self.ref_exists(&branch_ref) {
            return Err(RepoError::RefNotFound(branch_ref.to_string()).into());
        }

        let oid = self.read_ref(&branch_ref)?;
        self.delete_ref(&branch_ref)?;
        self.prune_empty_parent_dirs(&self.ref_path(&branch_ref))?;

        Ok(oid)
    }

    /// Every ref name under a hierarchical prefix (`refs/heads`,
    /// `refs/remotes/origin/heads`, ...), sorted.
    pub fn list_refs(&self, prefix: &str) -> anyhow::Result<Vec<RefName>> {
        let prefix_path = self.path.join(prefix);
        if !prefix_path.exists() {
            return Ok(Vec::new());
        }

        let mut refs = WalkDir::new(&prefix_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(self.path.as_ref()).ok()?;
                Some(RefName::from_full(
                    relative_path.to_string_lossy().to_string(),
                ))
            })
            .collect::<Vec<_>>();
        refs.sort();

        Ok(refs)
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let mut branches = self
            .list_refs("refs/heads")?
            .into_iter()
            .filter_map(|ref_name| {
                BranchName::try_parse(ref_name.short_name().to_string()).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// Next unused numeric stash slot.
    pub fn next_stash_slot(&self) -> anyhow::Result<u32> {
        let mut slot = 0;
        while self.ref_exists(&RefName::stash(slot)) {
            slot += 1;
        }
        Ok(slot)
    }

    /// Stash slots in ascending numeric order.
    pub fn list_stash(&self) -> anyhow::Result<Vec<(u32, ObjectId)>> {
        let stash_path = self.stash_path();
        if !stash_path.exists() {
            return Ok(Vec::new());
        }

        let mut slots = Vec::new();
        for entry in std::fs::read_dir(&stash_path)? {
            let entry = entry?;
            let Ok(slot) = entry.file_name().to_string_lossy().parse::<u32>() else {
                continue;
            };
            if let Some(oid) = self.read_ref(&RefName::stash(slot))? {
                slots.push((slot, oid));
            }
        }
        slots.sort_by_key(|(slot, _)| *slot);

        Ok(slots)
    }

    fn write_ref_file(&self, path: PathBuf, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_path()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn ref_path(&self, name: &RefName) -> PathBuf {
        self.path.join(name.as_str())
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn remotes_path(&self) -> PathBuf {
        self.refs_path().join("remotes")
    }

    pub fn stash_path(&self) -> PathBuf {
        self.refs_path().join("stash")
    }
}
