use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::diff::myers::Edit;
use crate::artifacts::diff::unified_hunks;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Unified diffs; the engine only selects the two texts per path.
    ///
    /// - unstaged: working file bytes against their tracked blob (the
    ///   staged one, falling back to HEAD's)
    /// - staged: index blobs against HEAD's tree
    pub fn diff(&mut self, staged: bool) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if staged {
            self.diff_head_index(&index)
        } else {
            self.diff_index_workspace(&index)
        }
    }

    fn diff_index_workspace(&self, index: &Index) -> anyhow::Result<()> {
        for (path, tracked_oid) in self.tracked_tree(index)? {
            let relative_path = Path::new(&path);
            if !self.workspace().file_exists(relative_path) {
                continue;
            }

            let workspace_blob = Blob::new(self.workspace().read_file(relative_path)?);
            if workspace_blob.object_id()? == tracked_oid {
                continue;
            }

            let tracked_text = self.database().load_blob(&tracked_oid)?.content_as_text();
            self.print_file_diff(&path, &tracked_text, &workspace_blob.content_as_text())?;
        }

        Ok(())
    }

    fn diff_head_index(&self, index: &Index) -> anyhow::Result<()> {
        let head_tree = match self.refs().resolve_head()? {
            Some(head_oid) => self.database().load_commit(&head_oid)?.tree().clone(),
            None => BTreeMap::new(),
        };

        let paths = head_tree
            .keys()
            .chain(index.entries().keys())
            .collect::<BTreeSet<_>>();

        for path in paths {
            let head_oid = head_tree.get(path);
            let staged_oid = index.entry(path);
            if head_oid == staged_oid {
                continue;
            }

            let head_text = match head_oid {
                Some(oid) => self.database().load_blob(oid)?.content_as_text(),
                None => String::new(),
            };
            let staged_text = match staged_oid {
                Some(oid) => self.database().load_blob(oid)?.content_as_text(),
                None => String::new(),
            };

            self.print_file_diff(path, &head_text, &staged_text)?;
        }

        Ok(())
    }

    fn print_file_diff(&self, path: &str, a: &str, b: &str) -> anyhow::Result<()> {
        let hunks = unified_hunks(a, b);
        if hunks.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "{}", format!("--- a/{}", path).bold())?;
        writeln!(self.writer(), "{}", format!("+++ b/{}", path).bold())?;

        for hunk in hunks {
            writeln!(self.writer(), "{}", hunk.header().cyan())?;
            for edit in hunk.edits() {
                match edit {
                    Edit::Delete(_) => {
                        writeln!(self.writer(), "{}", edit.to_string().red())?
                    }
                    Edit::Insert(_) => {
                        writeln!(self.writer(), "{}", edit.to_string().green())?
                    }
                    Edit::Equal(_) => writeln!(self.writer(), "{}", edit)?,
                }
            }
        }

        Ok(())
    }
}
