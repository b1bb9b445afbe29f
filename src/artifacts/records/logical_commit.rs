//! Reconstructed atomic changes
//!
//! A `LogicalCommit` is what the report prints: one point in time, one
//! message, and the file events that belong to it. Subversion hands these over
//! directly; for CVS they are rebuilt by the reconciler.

use crate::artifacts::records::file_revision::FileRevisionRecord;
use chrono::NaiveDateTime;

/// Aggregate line counts for the files of one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    pub added: u64,
    pub removed: u64,
    /// Files that reported a `+A -R` delta
    pub reporting_files: usize,
    pub total_files: usize,
}

impl LineTotals {
    /// True when every file of the commit reported a delta.
    pub fn is_complete(&self) -> bool {
        self.reporting_files == self.total_files
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalCommit {
    timestamp: NaiveDateTime,
    revision: Option<String>,
    author: Option<String>,
    commit_id: Option<String>,
    message: String,
    files: Vec<FileRevisionRecord>,
}

impl LogicalCommit {
    /// Create a commit from its file events.
    ///
    /// Files are stably sorted by name; the author defaults to the first
    /// file's author (after sorting), which callers may override.
    pub fn new(timestamp: NaiveDateTime, message: String, files: Vec<FileRevisionRecord>) -> Self {
        let mut files = files;
        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let author = files
            .iter()
            .find_map(|file| file.author())
            .map(str::to_string);

        LogicalCommit {
            timestamp,
            revision: None,
            author,
            commit_id: None,
            message,
            files,
        }
    }

    pub fn with_revision(mut self, revision: Option<String>) -> Self {
        self.revision = revision;
        self
    }

    /// Set the author; `None` keeps the author taken from the files.
    pub fn with_author(mut self, author: Option<String>) -> Self {
        if author.is_some() {
            self.author = author;
        }
        self
    }

    pub fn with_commit_id(mut self, commit_id: Option<String>) -> Self {
        self.commit_id = commit_id;
        self
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[FileRevisionRecord] {
        &self.files
    }

    /// The `revision`, `author` and `commitid` fields that are present, in
    /// report order.
    pub fn per_commit_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("revision", self.revision()),
            ("author", self.author()),
            ("commitid", self.commit_id()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }

    /// Sum the line deltas of the files.
    ///
    /// Returns `None` unless the commit has at least two files, at least one
    /// of them reports a delta, and the sums are not both zero.
    pub fn line_totals(&self) -> Option<LineTotals> {
        if self.files.len() < 2 {
            return None;
        }

        let totals = self
            .files
            .iter()
            .filter_map(FileRevisionRecord::line_delta)
            .fold(
                LineTotals {
                    added: 0,
                    removed: 0,
                    reporting_files: 0,
                    total_files: self.files.len(),
                },
                |mut totals, delta| {
                    totals.added += delta.added;
                    totals.removed += delta.removed;
                    totals.reporting_files += 1;
                    totals
                },
            );

        if totals.reporting_files == 0 || (totals.added == 0 && totals.removed == 0) {
            return None;
        }

        Some(totals)
    }
}
