use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Added/removed line counts parsed from a `lines: +A -R` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDelta {
    pub added: u64,
    pub removed: u64,
}

impl LineDelta {
    pub fn try_parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let added = parts.next()?.strip_prefix('+')?.parse().ok()?;
        let removed = parts.next()?.strip_prefix('-')?.parse().ok()?;

        Some(LineDelta { added, removed })
    }
}

/// One version-control event on one file
///
/// Field coverage is a superset of what CVS and Subversion report: CVS gives a
/// per-file revision and `state`/`lines`/`commitid`, Subversion gives a
/// per-path `action` and shares the commit message between all paths of a
/// revision.
///
/// Records are built once by a parser and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRevisionRecord {
    file_name: String,
    file_revision: Option<String>,
    timestamp: NaiveDateTime,
    raw_timestamp: String,
    author: Option<String>,
    state: Option<String>,
    action: Option<String>,
    lines: Option<String>,
    commit_id: Option<String>,
    branches: Option<String>,
    comment: String,
    extra: BTreeMap<String, String>,
}

impl FileRevisionRecord {
    pub fn new(
        file_name: String,
        timestamp: NaiveDateTime,
        raw_timestamp: String,
        comment: String,
    ) -> Self {
        FileRevisionRecord {
            file_name,
            file_revision: None,
            timestamp,
            raw_timestamp,
            author: None,
            state: None,
            action: None,
            lines: None,
            commit_id: None,
            branches: None,
            comment,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_file_revision(mut self, file_revision: Option<String>) -> Self {
        self.file_revision = file_revision;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn with_action(mut self, action: Option<String>) -> Self {
        self.action = action;
        self
    }

    pub fn with_lines(mut self, lines: Option<String>) -> Self {
        self.lines = lines;
        self
    }

    /// Empty commit ids are treated as absent.
    pub fn with_commit_id(mut self, commit_id: Option<String>) -> Self {
        self.commit_id = commit_id.filter(|id| !id.is_empty());
        self
    }

    pub fn with_branches(mut self, branches: Option<String>) -> Self {
        self.branches = branches;
        self
    }

    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_revision(&self) -> Option<&str> {
        self.file_revision.as_deref()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn raw_timestamp(&self) -> &str {
        &self.raw_timestamp
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn lines(&self) -> Option<&str> {
        self.lines.as_deref()
    }

    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }

    pub fn branches(&self) -> Option<&str> {
        self.branches.as_deref()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Metadata keys the parser did not recognize.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn line_delta(&self) -> Option<LineDelta> {
        self.lines.as_deref().and_then(LineDelta::try_parse)
    }

    /// The `state`, `action`, `lines` and `branches` fields that are present,
    /// in report order.
    pub fn per_file_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("state", self.state()),
            ("action", self.action()),
            ("lines", self.lines()),
            ("branches", self.branches()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }
}
