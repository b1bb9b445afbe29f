//! Records shared by the parsers, the reconciler and the report
//!
//! - `file_revision`: one event on one file, as the log reported it
//! - `logical_commit`: a group of file events treated as one atomic change

pub mod file_revision;
pub mod logical_commit;
