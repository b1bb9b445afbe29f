//! Log data structures and algorithms
//!
//! - `core`: shared output utilities (pager wrapper)
//! - `cvs`: CVS log state machine and metadata parsing
//! - `date`: date normalization for both sources
//! - `format`: input format detection
//! - `reconcile`: rebuilding CVS commits from per-file records
//! - `records`: file revision and logical commit types
//! - `svn`: Subversion XML log tree walk

pub mod core;
pub mod cvs;
pub mod date;
pub mod format;
pub mod reconcile;
pub mod records;
pub mod svn;
