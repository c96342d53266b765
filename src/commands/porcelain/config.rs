use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Persist `user.name` / `user.email`; with no arguments, show the
    /// configured identity.
    pub fn config(&mut self, name: Option<&str>, email: Option<&str>) -> anyhow::Result<()> {
        if name.is_none() && email.is_none() {
            let config = self.config_store().load()?;
            writeln!(
                self.writer(),
                "user.name = {}",
                config.user.name.as_deref().unwrap_or_default()
            )?;
            writeln!(
                self.writer(),
                "user.email = {}",
                config.user.email.as_deref().unwrap_or_default()
            )?;
            return Ok(());
        }

        let _lock = self.lock_exclusive()?;
        let mut config = self.config_store().load()?;

        if let Some(name) = name {
            config.user.name = Some(name.to_string());
        }
        if let Some(email) = email {
            config.user.email = Some(email.to_string());
        }

        self.config_store().save(&config)?;
        writeln!(self.writer(), "Config updated")?;

        Ok(())
    }
}
