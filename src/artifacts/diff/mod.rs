//! Line diffing and unified rendering
//!
//! A self-contained collaborator: the repository engine picks the two texts
//! to compare per path, this module does the rest.
//!
//! - `myers`: shortest-edit-script line diff
//! - `hunk`: grouping of the edit script into unified hunks with context

pub mod hunk;
pub mod myers;

use crate::artifacts::diff::hunk::{Hunk, build_hunks};
use crate::artifacts::diff::myers::MyersDiff;

/// Compute the unified hunks between two texts, split on lines.
pub fn unified_hunks<'d>(a: &'d str, b: &'d str) -> Vec<Hunk<'d>> {
    let edits = MyersDiff::new(a.lines().collect(), b.lines().collect()).diff();
    build_hunks(&edits)
}
