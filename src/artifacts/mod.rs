//! Domain artifacts shared across repository areas
//!
//! - `objects`: stored object kinds (blob, commit) and their identity
//! - `branch`: validated branch and ref names
//! - `merge`: commit-graph traversal for merge and deletion safety
//! - `diff`: line-based diffing and unified hunk rendering
//! - `remote`: remote records and the local-filesystem transport

pub mod branch;
pub mod diff;
pub mod merge;
pub mod objects;
pub mod remote;
