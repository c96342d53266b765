use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Snapshot the index as a new commit and advance the ref HEAD names.
    ///
    /// A commit is always created, even when the tree is identical to the
    /// parent's. Clearing the index is the final step.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut index = self.index();
        index.rehydrate()?;

        let parent = self.refs().resolve_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let author = self.config_store().load()?.author_line();
        let message = message.trim().to_string();

        let commit = Commit::new(
            index.snapshot(),
            parent,
            None,
            author,
            message,
            chrono::Utc::now().timestamp(),
        );
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;
        index.clear()?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
