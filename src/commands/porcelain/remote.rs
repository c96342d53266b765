use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Record a named remote's connection string in config. The scheme is
    /// validated on use (fetch/push/pull), not here.
    pub fn remote_add(&mut self, name: &str, url: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut config = self.config_store().load()?;

        config.remotes.insert(name.to_string(), url.to_string());
        self.config_store().save(&config)?;

        writeln!(self.writer(), "Added remote {}", name)?;

        Ok(())
    }

    pub fn remote_list(&mut self) -> anyhow::Result<()> {
        let config = self.config_store().load()?;

        if config.remotes.is_empty() {
            writeln!(self.writer(), "No remotes")?;
            return Ok(());
        }

        for (name, url) in &config.remotes {
            writeln!(self.writer(), "{}\t{}", name, url)?;
        }

        Ok(())
    }
}
