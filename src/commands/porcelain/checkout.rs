use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::errors::RepoError;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Switch HEAD to a branch, optionally creating it at the current HEAD
    /// first, and materialize its tip onto the working area.
    ///
    /// The materialization is a destructive overwrite: every regular file
    /// outside the metadata directory is deleted before the target tree is
    /// written out, so unstaged edits are lost.
    pub fn checkout(&mut self, target: &str, create: bool) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let branch_name = BranchName::try_parse(target.to_string())?;
        let branch_ref = RefName::branch(&branch_name);

        if create {
            let source_oid = self.refs().resolve_head()?;
            self.refs().create_branch(&branch_name, source_oid.as_ref())?;
        } else if !self.refs().ref_exists(&branch_ref) {
            return Err(RepoError::RefNotFound(branch_ref.to_string()).into());
        }

        self.refs().set_head_ref(&branch_ref)?;

        // an unborn tip leaves the working area untouched
        if let Some(tip) = self.refs().read_ref(&branch_ref)? {
            let commit = self.database().load_commit(&tip)?;

            self.workspace().remove_all_files()?;
            for (path, blob_oid) in commit.tree() {
                let blob = self.database().load_blob(blob_oid)?;
                self.workspace().write_file(Path::new(path), blob.content())?;
            }
        }

        writeln!(self.writer(), "Switched to branch '{}'", branch_name)?;

        Ok(())
    }
}
