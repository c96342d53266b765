//! Repository error taxonomy
//!
//! Every failure mode the engine distinguishes is a variant here. Commands
//! surface these through `anyhow::Result`, so callers can still downcast to
//! the precise variant when they need to.

use thiserror::Error;

/// Errors raised by repository engine operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A hash has no backing object in the object store (corruption or a
    /// ref pointing at an object that was never copied).
    #[error("object {0} not found in object store")]
    ObjectNotFound(String),

    /// The target of add/rm/reset does not exist.
    #[error("path '{0}' not found")]
    PathNotFound(String),

    /// A branch, remote, or stash slot is absent.
    #[error("ref '{0}' not found")]
    RefNotFound(String),

    /// The remote's connection string is not a supported local transport.
    #[error("unsupported remote scheme in '{0}' (only file:// is supported)")]
    UnsupportedRemoteScheme(String),

    /// Deleting a branch whose tip is not reachable from HEAD requires force.
    #[error("branch '{0}' is not merged; use force to delete it anyway")]
    UnmergedBranchDelete(String),
}
