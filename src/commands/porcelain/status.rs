use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

// Terminology:
// - staged files: paths present in the index
// - tracked files: staged paths plus everything in HEAD's tree
// - modified (unstaged): tracked paths whose working bytes differ from the
//   tracked blob
// - deleted (unstaged): tracked paths missing from the working tree
//
// Status reconciles the index with the working tree but never rewrites the
// index.
impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let current_ref = self.refs().read_head_ref()?;
        writeln!(self.writer(), "On branch {}", current_ref.short_name())?;

        if index.is_empty() {
            writeln!(self.writer(), "No files staged.")?;
        } else {
            writeln!(self.writer(), "Staged files:")?;
            for path in index.entries().keys() {
                writeln!(self.writer(), "   {}", path)?;
            }
        }

        let mut modified = Vec::new();
        let mut deleted = Vec::new();
        for (path, tracked_oid) in self.tracked_tree(&index)? {
            let relative_path = Path::new(&path);
            if !self.workspace().file_exists(relative_path) {
                deleted.push(path);
                continue;
            }

            let data = self.workspace().read_file(relative_path)?;
            if Blob::new(data).object_id()? != tracked_oid {
                modified.push(path);
            }
        }

        if !modified.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Modified (unstaged):")?;
            for path in modified {
                writeln!(self.writer(), "   {}", path)?;
            }
        }

        if !deleted.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Deleted (unstaged):")?;
            for path in deleted {
                writeln!(self.writer(), "   {}", path)?;
            }
        }

        Ok(())
    }

    /// The intended next-commit state the working tree is compared to:
    /// HEAD's tree overlaid with the staged entries. The index wins where
    /// both know a path.
    pub(crate) fn tracked_tree(
        &self,
        index: &Index,
    ) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let mut tree = match self.refs().resolve_head()? {
            Some(head_oid) => self.database().load_commit(&head_oid)?.tree().clone(),
            None => BTreeMap::new(),
        };

        for (path, oid) in index.entries() {
            tree.insert(path.clone(), oid.clone());
        }

        Ok(tree)
    }
}
