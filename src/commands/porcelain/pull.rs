use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::commands::porcelain::merge::MergeOutcome;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Fetch, then bring the freshly mirrored tracking ref into the current
    /// branch under the same fast-forward-or-merge-commit policy as merge.
    pub fn pull(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;

        let copied = self.fetch_remote(remote_name)?;
        writeln!(
            self.writer(),
            "Fetched from {} ({} new objects)",
            remote_name,
            copied
        )?;

        let branch_name = BranchName::try_parse(branch.to_string())?;
        let tracking_ref = RefName::remote_branch(remote_name, &branch_name);

        if !self.refs().ref_exists(&tracking_ref) {
            return Err(RepoError::RefNotFound(tracking_ref.to_string()).into());
        }

        // an unborn remote branch leaves nothing to merge
        let Some(target_oid) = self.refs().read_ref(&tracking_ref)? else {
            return Ok(());
        };

        let message = format!("Merge remote {}/{}", remote_name, branch_name);
        match self.apply_merge_policy(&target_oid, message)? {
            MergeOutcome::FastForward => writeln!(
                self.writer(),
                "Fast-forwarded to {}/{}",
                remote_name,
                branch_name
            )?,
            MergeOutcome::MergeCommit(commit_id) => writeln!(
                self.writer(),
                "Created merge commit {}",
                commit_id.to_short_oid()
            )?,
        }

        Ok(())
    }
}
