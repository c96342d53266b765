use crate::areas::config::Config;
use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_name::RefName;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create refs/heads directory")?;

        fs::create_dir_all(self.refs().remotes_path())
            .context("Failed to create refs/remotes directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head_ref(&RefName::branch(&default_branch))
                .context("Failed to create initial HEAD reference")?;
        }

        // make sure the default branch file exists, unborn
        if !self.refs().ref_exists(&RefName::branch(&default_branch)) {
            self.refs()
                .write_ref(&RefName::branch(&default_branch), None)
                .context("Failed to create default branch file")?;
        }

        if !self.config_store().path().exists() {
            self.config_store()
                .save(&Config::default())
                .context("Failed to create config file")?;
        }

        {
            let mut index = self.index();
            if !index.path().exists() {
                index.clear().context("Failed to create index file")?;
            }
        }

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
