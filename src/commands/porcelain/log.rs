use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print history from HEAD following first-parent links only.
    pub fn log(&mut self) -> anyhow::Result<()> {
        let mut current = self.refs().resolve_head()?;

        while let Some(commit_oid) = current {
            let commit = self.database().load_commit(&commit_oid)?;

            writeln!(self.writer(), "{}", format!("commit {}", commit_oid).yellow())?;
            if !commit.author().is_empty() {
                writeln!(self.writer(), "Author: {}", commit.author())?;
            }
            writeln!(
                self.writer(),
                "Date:   {}",
                Self::readable_timestamp(commit.timestamp())
            )?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {}", message_line)?;
            }
            writeln!(self.writer())?;

            current = commit.parent().cloned();
        }

        Ok(())
    }

    fn readable_timestamp(timestamp: i64) -> String {
        chrono::DateTime::from_timestamp(timestamp, 0)
            .map(|date| date.format("%a %b %-d %H:%M:%S %Y %z").to_string())
            .unwrap_or_else(|| timestamp.to_string())
    }
}
