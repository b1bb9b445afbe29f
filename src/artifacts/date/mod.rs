//! Date normalization
//!
//! CVS and Subversion print dates differently. Everything is turned into a
//! local wall-clock `NaiveDateTime` so that records from either source sort
//! against each other.

pub mod normalizer;

/// Formats accepted for the date portion of a CVS metadata line.
///
/// CVS 1.12 prints dashes; older servers print slashes.
pub const CVS_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
/// Trailing numeric zone on a CVS date, e.g. ` -0500`.
pub const CVS_ZONE_SUFFIX_REGEX: &str = r"\s+([-+])(\d{4})$";
/// Correction applied by the apply-offset convention (the process zone the
/// early tool was written against, five hours west of UTC).
pub const DEFAULT_TZ_CORRECTION_SECONDS: i64 = 18000;
/// Format used when printing a normalized timestamp.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
