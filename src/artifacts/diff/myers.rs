//! Myers shortest-edit-script diff over lines
//!
//! The classic O((N+M)D) greedy algorithm: walk the edit graph forward
//! recording the furthest-reaching x per diagonal for each edit distance,
//! then backtrack from the end to recover the edit script.

use derive_new::new;

/// One element of an edit script. Borrows the compared lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'d> {
    Equal(&'d str),
    Delete(&'d str),
    Insert(&'d str),
}

impl Edit<'_> {
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal(_))
    }
}

impl std::fmt::Display for Edit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Equal(line) => write!(f, " {line}"),
            Edit::Delete(line) => write!(f, "-{line}"),
            Edit::Insert(line) => write!(f, "+{line}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d> {
    a: Vec<&'d str>,
    b: Vec<&'d str>,
}

impl<'d> MyersDiff<'d> {
    /// Record the furthest-reaching x per diagonal for every edit distance
    /// until the walk reaches the bottom-right of the edit graph.
    fn shortest_edit_trace(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0isize; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            let mut k = -d;
            while k <= d {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // continue from k+1, an insertion
                    v[idx + 1]
                } else {
                    // continue from k-1, a deletion
                    v[idx - 1] + 1
                };
                let mut y = x - k;

                // snake along the diagonal
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }

                k += 2;
            }
        }

        trace
    }

    /// Recover the edit script by walking the trace backwards.
    pub fn diff(&self) -> Vec<Edit<'d>> {
        if self.a.is_empty() && self.b.is_empty() {
            return Vec::new();
        }

        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let trace = self.shortest_edit_trace();

        let mut edits = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            if x == 0 && y == 0 {
                break;
            }

            let d = d as isize;
            let k = x - y;
            let idx_of = |k: isize| (offset as isize + k) as usize;

            let prev_k = if k == -d || (k != d && v[idx_of(k - 1)] < v[idx_of(k + 1)]) {
                k + 1
            } else {
                k - 1
            };
            let prev_x = v[idx_of(prev_k)];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edits.push(Edit::Equal(self.a[(x - 1) as usize]));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                if x == prev_x {
                    edits.push(Edit::Insert(self.b[prev_y as usize]));
                } else {
                    edits.push(Edit::Delete(self.a[prev_x as usize]));
                }
            }

            (x, y) = (prev_x, prev_y);
        }

        edits.reverse();
        edits
    }
}
