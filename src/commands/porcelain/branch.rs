use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::merge::ancestry::is_ancestor;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    pub fn branch(
        &mut self,
        create: Option<&str>,
        delete: Option<&str>,
        force: bool,
    ) -> anyhow::Result<()> {
        match (create, delete) {
            (Some(name), None) => self.branch_create(name),
            (None, Some(name)) => self.branch_delete(name, force),
            (None, None) => self.branch_list(),
            (Some(_), Some(_)) => {
                anyhow::bail!("cannot create and delete a branch in the same invocation")
            }
        }
    }

    fn branch_list(&mut self) -> anyhow::Result<()> {
        let current_ref = self.refs().read_head_ref()?;

        for branch in self.refs().list_branches()? {
            let marker = if RefName::branch(&branch) == current_ref {
                "*"
            } else {
                " "
            };
            writeln!(self.writer(), "{} {}", marker, branch)?;
        }

        Ok(())
    }

    fn branch_create(&mut self, name: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let branch_name = BranchName::try_parse(name.to_string())?;

        // an unborn HEAD creates an unborn branch
        let source_oid = self.refs().resolve_head()?;
        self.refs().create_branch(&branch_name, source_oid.as_ref())?;

        writeln!(self.writer(), "Created branch {}", branch_name)?;

        Ok(())
    }

    fn branch_delete(&mut self, name: &str, force: bool) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let branch_name = BranchName::try_parse(name.to_string())?;
        let branch_ref = RefName::branch(&branch_name);

        if !self.refs().ref_exists(&branch_ref) {
            return Err(RepoError::RefNotFound(branch_ref.to_string()).into());
        }

        if !force
            && let (Some(tip), Some(head)) = (
                self.refs().read_ref(&branch_ref)?,
                self.refs().resolve_head()?,
            )
            && !is_ancestor(self.database(), &tip, &head)?
        {
            return Err(RepoError::UnmergedBranchDelete(name.to_string()).into());
        }

        self.refs().delete_branch(&branch_name)?;
        writeln!(self.writer(), "Deleted branch {}", branch_name)?;

        Ok(())
    }
}
