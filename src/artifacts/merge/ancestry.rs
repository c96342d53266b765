//! First-parent ancestor walk
//!
//! Walks a commit's `parent` chain only; `parent2` links of historical
//! merge commits are never traversed. Ancestry through the second side of
//! a merge is therefore not detected, and this implementation keeps that
//! behavior on purpose (see the tests below).

use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;

/// Whether `ancestor` appears on the first-parent chain starting at `tip`
/// (inclusive: a commit is its own ancestor).
pub fn is_ancestor(
    database: &Database,
    ancestor: &ObjectId,
    tip: &ObjectId,
) -> anyhow::Result<bool> {
    let mut cursor = Some(tip.clone());

    while let Some(oid) = cursor {
        if &oid == ancestor {
            return Ok(true);
        }
        cursor = database.load_commit(&oid)?.parent().cloned();
    }

    Ok(false)
}
