use crate::areas::repository::Repository;
use crate::errors::RepoError;

impl Repository {
    /// Remove one path from the staging index.
    pub fn reset(&mut self, path: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut index = self.index();
        index.rehydrate()?;

        if !index.unstage(path)? {
            return Err(RepoError::PathNotFound(path.to_string()).into());
        }

        Ok(())
    }
}
