use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::merge::ancestry::is_ancestor;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use std::io::Write;

/// How a merge target was brought into the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The current branch ref was advanced to the target; no new object
    FastForward,
    /// A two-parent commit was recorded
    MergeCommit(ObjectId),
}

impl Repository {
    pub fn merge(&mut self, target: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let branch_name = BranchName::try_parse(target.to_string())?;
        let branch_ref = RefName::branch(&branch_name);

        if !self.refs().ref_exists(&branch_ref) {
            return Err(RepoError::RefNotFound(branch_ref.to_string()).into());
        }

        // merging an unborn branch is a no-op
        let Some(target_oid) = self.refs().read_ref(&branch_ref)? else {
            return Ok(());
        };

        let current_ref = self.refs().read_head_ref()?;
        let message = format!(
            "Merge branch '{}' into {}",
            branch_name,
            current_ref.short_name()
        );

        match self.apply_merge_policy(&target_oid, message)? {
            MergeOutcome::FastForward => writeln!(self.writer(), "Fast-forwarded")?,
            MergeOutcome::MergeCommit(commit_id) => writeln!(
                self.writer(),
                "Created merge commit {}",
                commit_id.to_short_oid()
            )?,
        }

        Ok(())
    }

    /// Fast-forward-or-merge-commit policy shared by merge and pull.
    ///
    /// Fast-forward when the current HEAD commit lies on the target's
    /// first-parent chain. Otherwise record a merge commit whose tree is
    /// whatever is currently staged; callers stage the desired result
    /// beforehand, and there is no conflict detection. A merge commit does
    /// not clear the index.
    pub(crate) fn apply_merge_policy(
        &self,
        target_oid: &ObjectId,
        message: String,
    ) -> anyhow::Result<MergeOutcome> {
        let head_oid = self.refs().resolve_head()?;

        if let Some(head_oid) = &head_oid
            && is_ancestor(self.database(), head_oid, target_oid)?
        {
            self.refs().update_head(target_oid)?;
            return Ok(MergeOutcome::FastForward);
        }

        let mut index = self.index();
        index.rehydrate()?;

        let author = self.config_store().load()?.author_line();
        let commit = Commit::new(
            index.snapshot(),
            head_oid,
            Some(target_oid.clone()),
            author,
            message,
            chrono::Utc::now().timestamp(),
        );
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        Ok(MergeOutcome::MergeCommit(commit_id))
    }
}
