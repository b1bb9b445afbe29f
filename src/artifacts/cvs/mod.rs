//! CVS `rlog` / `cvs log` parsing
//!
//! CVS logs every file on its own: a header block per file followed by one
//! block per revision. This module turns that text into a flat list of
//! `FileRevisionRecord`s; grouping them into commits is left to
//! `artifacts::reconcile`.
//!
//! ## Format
//!
//! ```text
//! RCS file: /cvsroot/project/src/main.c,v
//! Working file: src/main.c
//! head: 1.2
//! description:
//! ----------------------------
//! revision 1.2
//! date: 2005-08-29 12:00:00 -0500;  author: rgr;  state: Exp;  lines: +3 -1;  commitid: 1004313A1B2C;
//! Fix the frobnicator.
//! ----------------------------
//! revision 1.1
//! date: 2005-08-28 09:00:00 -0500;  author: rgr;  state: Exp;
//! branches:  1.1.2;
//! Initial revision
//! =============================================================================
//! ```

pub mod metadata;
pub mod parser;

/// Starts a new file section, in any parser state.
pub const RCS_FILE_PREFIX: &str = "RCS file: ";
/// Continuation of a revision's metadata line.
pub const BRANCHES_PREFIX: &str = "branches: ";
/// A `tag: value` line of a file header.
pub const HEADER_REGEX: &str = r"^([^:]+):\s*(.*)$";
/// The first line of a revision block; trailing lock notes are ignored.
pub const REVISION_REGEX: &str = r"^revision\s+(\S+)";
/// The date field that leads every metadata line.
pub const DATE_FIELD_REGEX: &str = r"^\s*date:\s*([^;]+);\s*(.*)$";
/// Shortest run of `-` or `=` accepted as a divider line.
pub const MIN_DIVIDER_LENGTH: usize = 3;
