//! Subversion `svn log --xml` parsing
//!
//! Subversion already reports atomic commits, so each `<logentry>` becomes one
//! `LogicalCommit` directly; no reconciliation is needed.
//!
//! ## Format
//!
//! ```text
//! <log>
//!   <logentry revision="218">
//!     <author>rogers</author>
//!     <date>2009-03-19T02:47:39.123456Z</date>
//!     <paths>
//!       <path action="M" kind="file">/trunk/vc-chrono-log.rb</path>
//!     </paths>
//!     <msg>Fix the date handling.</msg>
//!   </logentry>
//! </log>
//! ```

pub mod parser;

pub const LOG_ENTRY_TAG: &str = "logentry";
pub const PATHS_TAG: &str = "paths";
pub const PATH_TAG: &str = "path";
pub const DATE_TAG: &str = "date";
pub const AUTHOR_TAG: &str = "author";
pub const MESSAGE_TAG: &str = "msg";
/// Action assumed for a `<path>` without an `action` attribute.
pub const DEFAULT_PATH_ACTION: &str = "M";
