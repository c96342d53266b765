use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::errors::RepoError;
use std::path::Path;

impl Repository {
    /// Stage a file, or every regular file beneath a directory, writing the
    /// backing blobs first. Each file is keyed by its workspace-relative
    /// path.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut index = self.index();
        index.rehydrate()?;

        let target = Path::new(path);
        if !self.workspace().path().join(target).exists() {
            return Err(RepoError::PathNotFound(path.to_string()).into());
        }

        for file in self.workspace().list_files(Some(target))? {
            let data = self.workspace().read_file(&file)?;
            let blob_id = self.database().store(&Blob::new(data))?;
            index.stage(file.to_string_lossy().to_string(), blob_id)?;
        }

        Ok(())
    }
}
