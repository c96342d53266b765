use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepoError;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Marker message carried by every stash snapshot
const STASH_MESSAGE: &str = "WIP stash";

impl Repository {
    /// Park the working tree: snapshot every working file into fresh blobs,
    /// wrap them in a parentless commit object, and append it at the next
    /// free numeric stash slot.
    pub fn stash_save(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;

        let mut tree = BTreeMap::new();
        for file in self.workspace().list_files(None)? {
            let data = self.workspace().read_file(&file)?;
            let blob_id = self.database().store(&Blob::new(data))?;
            tree.insert(file.to_string_lossy().to_string(), blob_id);
        }

        let snapshot = Commit::new(
            tree,
            None,
            None,
            String::new(),
            STASH_MESSAGE.to_string(),
            chrono::Utc::now().timestamp(),
        );
        let snapshot_id = self.database().store(&snapshot)?;

        let slot = self.refs().next_stash_slot()?;
        self.refs()
            .write_ref(&RefName::stash(slot), Some(&snapshot_id))?;

        writeln!(
            self.writer(),
            "Saved stash {} ({})",
            slot,
            snapshot_id.to_short_oid()
        )?;

        Ok(())
    }

    pub fn stash_list(&mut self) -> anyhow::Result<()> {
        let slots = self.refs().list_stash()?;

        if slots.is_empty() {
            writeln!(self.writer(), "No stash entries.")?;
            return Ok(());
        }

        for (slot, oid) in slots {
            writeln!(self.writer(), "{} {}", slot, oid)?;
        }

        Ok(())
    }

    /// Restore the highest-numbered stash onto the working area and consume
    /// its slot. Write-only: files not in the snapshot are left alone.
    pub fn stash_pop(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock_exclusive()?;

        let Some((slot, snapshot_id)) = self.refs().list_stash()?.pop() else {
            return Err(RepoError::RefNotFound("refs/stash".to_string()).into());
        };

        let snapshot = self.database().load_commit(&snapshot_id)?;
        for (path, blob_oid) in snapshot.tree() {
            let blob = self.database().load_blob(blob_oid)?;
            self.workspace().write_file(Path::new(path), blob.content())?;
        }

        self.refs().delete_ref(&RefName::stash(slot))?;

        writeln!(self.writer(), "Applied stash {}", slot)?;

        Ok(())
    }
}
