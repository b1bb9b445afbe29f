//! Where a report reads from and writes to
//!
//! - `chronicle`: the report session, owning the writer and date settings
//! - `log_source`: the raw log input (a file or standard input)

pub mod chronicle;
pub mod log_source;
