use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Copy local objects absent at the remote, then overwrite the remote's
    /// branch head with the local value. Push never rejects a
    /// non-fast-forward update.
    pub fn push(&mut self, remote_name: &str, branch: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;

        let config = self.config_store().load()?;
        let remote = config
            .remote(remote_name)
            .ok_or_else(|| RepoError::RefNotFound(remote_name.to_string()))?;
        let transport = remote.open_transport()?;

        let branch_name = BranchName::try_parse(branch.to_string())?;
        let branch_ref = RefName::branch(&branch_name);
        if !self.refs().ref_exists(&branch_ref) {
            return Err(RepoError::RefNotFound(branch_ref.to_string()).into());
        }

        transport
            .database()
            .copy_missing_objects_from(self.database())?;

        let local_tip = self.refs().read_ref(&branch_ref)?;
        transport.refs().write_ref(&branch_ref, local_tip.as_ref())?;

        writeln!(self.writer(), "Pushed {} to {}", branch_name, remote_name)?;

        Ok(())
    }
}
