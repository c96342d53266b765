use crate::areas::repository::Repository;
use crate::errors::RepoError;
use std::path::Path;

impl Repository {
    /// Delete a working file and drop its index entry. Fails only when the
    /// path exists in neither place.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut index = self.index();
        index.rehydrate()?;

        let relative_path = Path::new(path);
        let removed = if self.workspace().file_exists(relative_path) {
            self.workspace().remove_file(relative_path)?;
            true
        } else {
            false
        };

        let unstaged = index.unstage(path)?;

        if !removed && !unstaged {
            return Err(RepoError::PathNotFound(path.to_string()).into());
        }

        Ok(())
    }
}
