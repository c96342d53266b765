//! Commit-graph traversal supporting the merge policy
//!
//! - `ancestry`: the first-parent reachability walk behind fast-forward
//!   detection and branch-delete safety

pub mod ancestry;
