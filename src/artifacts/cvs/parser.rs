use crate::artifacts::cvs::metadata::MetadataParser;
use crate::artifacts::cvs::{
    BRANCHES_PREFIX, HEADER_REGEX, MIN_DIVIDER_LENGTH, RCS_FILE_PREFIX, REVISION_REGEX,
};
use crate::artifacts::date::normalizer::DateNormalizer;
use crate::artifacts::records::file_revision::FileRevisionRecord;
use anyhow::Context;
use regex::Regex;
use std::str::Lines;

/// Where the scanner is inside a CVS log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Between file sections
    #[default]
    None,
    /// Inside a file header, before `description:`
    Headings,
    /// Inside the revision blocks of a file
    Descriptions,
}

impl std::fmt::Display for ParseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParseState::None => "none",
            ParseState::Headings => "headings",
            ParseState::Descriptions => "descriptions",
        };
        write!(f, "{}", name)
    }
}

/// A line made only of dashes or only of equals signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divider {
    /// `-----`: another revision of the same file follows
    Revision,
    /// `=====`: end of the file section
    File,
}

impl Divider {
    pub fn classify(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        if line.len() < MIN_DIVIDER_LENGTH {
            return None;
        }

        if line.bytes().all(|b| b == b'-') {
            Some(Divider::Revision)
        } else if line.bytes().all(|b| b == b'=') {
            Some(Divider::File)
        } else {
            None
        }
    }

    fn next_state(self) -> ParseState {
        match self {
            Divider::Revision => ParseState::Descriptions,
            Divider::File => ParseState::None,
        }
    }
}

/// Derive a file name from an `RCS file:` path.
///
/// `cvs rlog` prints no `Working file:` line, so the repository path (without
/// `,v` and the `Attic` directory of removed files) stands in for it.
pub fn file_name_from_rcs_path(rcs_path: &str) -> String {
    let rcs_path = rcs_path.trim();
    let rcs_path = rcs_path.strip_suffix(",v").unwrap_or(rcs_path);

    rcs_path.replace("/Attic/", "/")
}

/// Mutable state of one pass over a log.
struct Scan<'a> {
    lines: Lines<'a>,
    line_number: usize,
    state: ParseState,
    file_name: String,
    records: Vec<FileRevisionRecord>,
}

impl<'a> Scan<'a> {
    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }
}

/// Line-oriented state machine over CVS log text.
#[derive(Debug, Clone)]
pub struct CvsLogParser<'n> {
    normalizer: &'n DateNormalizer,
    metadata: MetadataParser,
    header: Regex,
    revision: Regex,
}

impl<'n> CvsLogParser<'n> {
    pub fn new(normalizer: &'n DateNormalizer) -> anyhow::Result<Self> {
        let header = Regex::new(HEADER_REGEX)
            .with_context(|| format!("invalid header regex: {HEADER_REGEX}"))?;
        let revision = Regex::new(REVISION_REGEX)
            .with_context(|| format!("invalid revision regex: {REVISION_REGEX}"))?;

        Ok(CvsLogParser {
            normalizer,
            metadata: MetadataParser::new()?,
            header,
            revision,
        })
    }

    /// Parse a whole log into per-file records, in log order.
    ///
    /// Malformed revision blocks are skipped with a warning; a log that ends
    /// inside a file section keeps every record completed before the end.
    pub fn parse(&self, text: &str) -> Vec<FileRevisionRecord> {
        let mut scan = Scan {
            lines: text.lines(),
            line_number: 0,
            state: ParseState::None,
            file_name: String::new(),
            records: Vec::new(),
        };

        while let Some(line) = scan.next_line() {
            if let Some(rcs_path) = line.strip_prefix(RCS_FILE_PREFIX) {
                scan.file_name = file_name_from_rcs_path(rcs_path);
                scan.state = ParseState::Headings;
                continue;
            }

            scan.state = match scan.state {
                ParseState::None => ParseState::None,
                ParseState::Headings => self.on_heading(&mut scan, line),
                ParseState::Descriptions => self.on_revision(&mut scan, line),
            };
        }

        if scan.state != ParseState::None {
            tracing::warn!(
                "final parser state is '{}' at line {}; truncated log?",
                scan.state,
                scan.line_number
            );
        }

        tracing::debug!("parsed {} CVS file revisions", scan.records.len());
        scan.records
    }

    fn on_heading(&self, scan: &mut Scan<'_>, line: &str) -> ParseState {
        let Some(captures) = self.header.captures(line) else {
            return ParseState::Headings;
        };

        match &captures[1] {
            "description" => Self::skip_description(scan),
            "Working file" => {
                scan.file_name = captures[2].trim_end().to_string();
                ParseState::Headings
            }
            _ => ParseState::Headings,
        }
    }

    fn skip_description(scan: &mut Scan<'_>) -> ParseState {
        while let Some(line) = scan.next_line() {
            if let Some(divider) = Divider::classify(line) {
                return divider.next_state();
            }
        }

        ParseState::Headings
    }

    fn on_revision(&self, scan: &mut Scan<'_>, line: &str) -> ParseState {
        let file_revision = match self.revision.captures(line) {
            Some(captures) => Some(captures[1].to_string()),
            None => {
                tracing::warn!(
                    "expected a revision line for {} at line {}, got '{}'",
                    scan.file_name,
                    scan.line_number,
                    line
                );
                None
            }
        };

        let Some(metadata_line) = scan.next_line() else {
            return ParseState::Descriptions;
        };
        let mut metadata_line = metadata_line.to_string();

        let mut next = scan.next_line();
        if let Some(branches) = next
            && branches.starts_with(BRANCHES_PREFIX)
        {
            metadata_line.push_str("  ");
            metadata_line.push_str(branches);
            next = scan.next_line();
        }

        let mut comment = String::new();
        while let Some(line) = next {
            if let Some(divider) = Divider::classify(line) {
                if let Some(record) =
                    self.build_record(&scan.file_name, file_revision, &metadata_line, comment)
                {
                    scan.records.push(record);
                }
                return divider.next_state();
            }

            comment.push_str(line);
            comment.push('\n');
            next = scan.next_line();
        }

        tracing::warn!(
            "revision {} of {} is cut off by the end of the log; dropping it",
            file_revision.as_deref().unwrap_or("?"),
            scan.file_name
        );
        ParseState::Descriptions
    }

    fn build_record(
        &self,
        file_name: &str,
        file_revision: Option<String>,
        metadata_line: &str,
        comment: String,
    ) -> Option<FileRevisionRecord> {
        let revision_label = file_revision.as_deref().unwrap_or("?");

        let metadata = match self.metadata.parse(metadata_line) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("{e:#} ({file_name} {revision_label}); skipping");
                return None;
            }
        };

        let timestamp = match self.normalizer.normalize_cvs(&metadata.date) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                tracing::warn!("{e:#} ({file_name} {revision_label}); skipping");
                return None;
            }
        };

        Some(
            FileRevisionRecord::new(file_name.to_string(), timestamp, metadata.date, comment)
                .with_file_revision(file_revision)
                .with_author(metadata.author)
                .with_state(metadata.state)
                .with_action(metadata.action)
                .with_lines(metadata.lines)
                .with_commit_id(metadata.commit_id)
                .with_branches(metadata.branches)
                .with_extra(metadata.extra),
        )
    }
}
