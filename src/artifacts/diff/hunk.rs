//! Unified hunk grouping
//!
//! Groups an edit script into hunks, keeping up to [`HUNK_CONTEXT`] equal
//! lines around each run of changes and merging runs whose context would
//! overlap. Headers follow the unified convention: `@@ -s,n +s,n @@`, with
//! `,n` omitted when the side spans exactly one line and the start shifted
//! to the preceding line when the side is empty.

use crate::artifacts::diff::myers::Edit;

/// Equal lines kept around each change run
pub const HUNK_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'d> {
    /// 1-based first line of the hunk on the old side
    a_start: usize,
    a_len: usize,
    /// 1-based first line of the hunk on the new side
    b_start: usize,
    b_len: usize,
    edits: Vec<Edit<'d>>,
}

impl<'d> Hunk<'d> {
    pub fn edits(&self) -> &[Edit<'d>] {
        &self.edits
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            Self::range(self.a_start, self.a_len),
            Self::range(self.b_start, self.b_len)
        )
    }

    fn range(start: usize, len: usize) -> String {
        match len {
            // an empty range points at the line before the hunk
            0 => format!("{},0", start.saturating_sub(1)),
            1 => format!("{start}"),
            _ => format!("{start},{len}"),
        }
    }
}

/// Group an edit script into context hunks. No changes, no hunks.
pub fn build_hunks<'d>(edits: &[Edit<'d>]) -> Vec<Hunk<'d>> {
    // positions[i] = (old lines consumed, new lines consumed) before edit i
    let mut positions = Vec::with_capacity(edits.len() + 1);
    let (mut a_pos, mut b_pos) = (0usize, 0usize);
    for edit in edits {
        positions.push((a_pos, b_pos));
        match edit {
            Edit::Equal(_) => {
                a_pos += 1;
                b_pos += 1;
            }
            Edit::Delete(_) => a_pos += 1,
            Edit::Insert(_) => b_pos += 1,
        }
    }
    positions.push((a_pos, b_pos));

    let change_indices = edits
        .iter()
        .enumerate()
        .filter(|(_, edit)| edit.is_change())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    let Some(&first_change) = change_indices.first() else {
        return Vec::new();
    };

    let mut hunks = Vec::new();
    let mut group_start = first_change;
    let mut group_end = first_change;

    for &index in &change_indices[1..] {
        // two runs whose surrounding context would meet stay in one hunk
        if index - group_end > 2 * HUNK_CONTEXT {
            hunks.push(make_hunk(edits, &positions, group_start, group_end));
            group_start = index;
        }
        group_end = index;
    }
    hunks.push(make_hunk(edits, &positions, group_start, group_end));

    hunks
}

fn make_hunk<'d>(
    edits: &[Edit<'d>],
    positions: &[(usize, usize)],
    start: usize,
    end: usize,
) -> Hunk<'d> {
    let lo = start.saturating_sub(HUNK_CONTEXT);
    let hi = usize::min(end + HUNK_CONTEXT, edits.len() - 1);

    let (a_before, b_before) = positions[lo];
    let (a_after, b_after) = positions[hi + 1];

    Hunk {
        a_start: a_before + 1,
        a_len: a_after - a_before,
        b_start: b_before + 1,
        b_len: b_after - b_before,
        edits: edits[lo..=hi].to_vec(),
    }
}
