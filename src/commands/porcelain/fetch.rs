use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::errors::RepoError;
use std::io::Write;

impl Repository {
    pub fn fetch(&mut self, remote_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let copied = self.fetch_remote(remote_name)?;

        writeln!(
            self.writer(),
            "Fetched from {} ({} new objects)",
            remote_name,
            copied
        )?;

        Ok(())
    }

    /// Copy every remote object absent locally, then mirror the remote's
    /// branch heads into `refs/remotes/<remote>/heads/`. Returns how many
    /// objects were copied; a repeat fetch copies none.
    pub(crate) fn fetch_remote(&self, remote_name: &str) -> anyhow::Result<usize> {
        let config = self.config_store().load()?;
        let remote = config
            .remote(remote_name)
            .ok_or_else(|| RepoError::RefNotFound(remote_name.to_string()))?;
        let transport = remote.open_transport()?;

        let copied = self
            .database()
            .copy_missing_objects_from(&transport.database())?;

        let remote_refs = transport.refs();
        for branch in remote_refs.list_branches()? {
            let tip = remote_refs.read_ref(&RefName::branch(&branch))?;
            self.refs()
                .write_ref(&RefName::remote_branch(remote_name, &branch), tip.as_ref())?;
        }

        Ok(copied)
    }
}
