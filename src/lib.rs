//! Chronological activity reports for CVS and Subversion logs
//!
//! The crate is split the same way a report is produced:
//!
//! - `areas`: the `Chronicle` session that owns the output writer and settings
//! - `artifacts`: parsers, date handling, records and commit reconciliation
//! - `commands`: the operations run on a `Chronicle` (the report itself)

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Which parser to use for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormatChoice {
    /// Look at the first non-whitespace character
    #[default]
    Auto,
    /// CVS `rlog`/`cvs log` text
    Cvs,
    /// Subversion `svn log --xml` output
    Svn,
}

/// How a numeric zone suffix on a CVS date is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CvsTimezone {
    /// Drop the suffix and keep the wall-clock time as written
    #[default]
    Strip,
    /// Shift by the suffix plus a fixed correction
    Apply,
}
