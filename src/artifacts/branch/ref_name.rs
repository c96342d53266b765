use crate::artifacts::branch::branch_name::BranchName;

/// Name of the symbolic HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

const HEADS_PREFIX: &str = "refs/heads/";

/// A hierarchical reference key, relative to the metadata directory.
///
/// Covers every ref kind the repository stores: `HEAD`, branch heads
/// (`refs/heads/<name>`), remote-tracking heads
/// (`refs/remotes/<remote>/heads/<name>`), and numbered stash slots
/// (`refs/stash/<n>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn head() -> Self {
        Self(HEAD_REF_NAME.to_string())
    }

    pub fn branch(name: &BranchName) -> Self {
        Self(format!("{HEADS_PREFIX}{name}"))
    }

    pub fn remote_branch(remote: &str, branch: &BranchName) -> Self {
        Self(format!("refs/remotes/{remote}/heads/{branch}"))
    }

    pub fn stash(slot: u32) -> Self {
        Self(format!("refs/stash/{slot}"))
    }

    /// Wrap a full ref name read back from the HEAD file.
    pub fn from_full(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing name: the branch part for branch heads, the full key
    /// for everything else.
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix(HEADS_PREFIX).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
