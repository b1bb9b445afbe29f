//! Commit reconciliation for CVS logs
//!
//! CVS records each file's history separately. Newer servers tag every file
//! revision of one `cvs commit` with a shared `commitid`; older ones do not, so
//! those commits are rebuilt from matching comments and nearby timestamps.
//!
//! ## Algorithm
//!
//! 1. Records with a commit id are grouped by it.
//! 2. The rest are grouped by identical comment text, then split into runs: a
//!    run opens at its earliest record and takes every later record up to
//!    `DATE_FUZZ_SECONDS` after that opening time. The deadline never moves.
//! 3. All commits are sorted ascending by time (stable) and then reversed.
//!
//! ## Limitations
//!
//! Two unrelated commits that reuse a message within the window are merged,
//! and one slow commit whose files span more than the window is split. Runs
//! are not checked for overlapping file names.

pub mod commit_grouper;

/// Width of the window in which same-comment records form one commit.
pub const DATE_FUZZ_SECONDS: i64 = 120;
