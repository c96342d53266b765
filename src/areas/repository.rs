//! Repository handle
//!
//! Explicit context passed to every operation: wires the workspace, object
//! database, staging index, reference store, and config together over one
//! directory, and owns the advisory lock that gives mutating commands
//! single-writer safety. State lives on the filesystem; each operation
//! reads it fresh and flushes on mutation.

use crate::METADATA_DIR;
use crate::areas::config::ConfigStore;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::cell::{RefCell, RefMut};
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: ConfigStore,
}

/// Exclusive advisory lock over the whole repository, held for the
/// duration of a mutating command.
pub struct RepoLock {
    _guard: FileGuard<Box<File>>,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let metadata_path = path.join(METADATA_DIR);

        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_path.clone().into_boxed_path());
        let config = ConfigStore::new(metadata_path.join("config").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config
    }

    /// Take the repository-wide exclusive lock. Every mutating command
    /// acquires this first and holds it until the command completes.
    pub fn lock_exclusive(&self) -> anyhow::Result<RepoLock> {
        let lock_path = self.metadata_path().join("lock");

        std::fs::create_dir_all(self.metadata_path()).context(format!(
            "Unable to create metadata directory {}",
            self.metadata_path().display()
        ))?;

        let lock_file = Box::new(
            std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&lock_path)
                .context(format!("Unable to open lock file {}", lock_path.display()))?,
        );

        let guard = file_guard::lock(lock_file, Lock::Exclusive, 0, 1)
            .context("Unable to acquire repository lock")?;

        Ok(RepoLock { _guard: guard })
    }
}
