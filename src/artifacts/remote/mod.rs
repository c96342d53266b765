//! Remote records and the local-filesystem transport
//!
//! The only supported connection scheme is `file://<path>`, where the path
//! addresses another repository's metadata directory on a reachable
//! filesystem. The remote side is driven through the same `Database` and
//! `Refs` abstractions as the local one, so object copying inherits
//! content-addressed deduplication for free.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::RepoError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Connection scheme accepted by the local transport
pub const LOCAL_SCHEME: &str = "file://";

/// A named remote record, as stored in config.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Remote {
    name: String,
    url: String,
}

impl Remote {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn open_transport(&self) -> anyhow::Result<LocalTransport> {
        LocalTransport::try_parse(&self.url)
    }
}

/// Handle on another repository's metadata directory.
#[derive(Debug)]
pub struct LocalTransport {
    root: PathBuf,
}

impl LocalTransport {
    pub fn try_parse(url: &str) -> anyhow::Result<Self> {
        let path = url
            .strip_prefix(LOCAL_SCHEME)
            .ok_or_else(|| RepoError::UnsupportedRemoteScheme(url.to_string()))?;

        Ok(Self {
            root: PathBuf::from(path),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The remote's object store.
    pub fn database(&self) -> Database {
        Database::new(self.root.join("objects").into_boxed_path())
    }

    /// The remote's reference store.
    pub fn refs(&self) -> Refs {
        Refs::new(self.root.clone().into_boxed_path())
    }
}
