use crate::artifacts::cvs::DATE_FIELD_REGEX;
use anyhow::Context;
use regex::Regex;
use std::collections::BTreeMap;

/// Metadata keys with a dedicated record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKey {
    Author,
    State,
    Lines,
    CommitId,
    Branches,
    Action,
}

pub const METADATA_KEYS: phf::Map<&'static str, MetadataKey> = phf::phf_map! {
    "author" => MetadataKey::Author,
    "state" => MetadataKey::State,
    "lines" => MetadataKey::Lines,
    "commitid" => MetadataKey::CommitId,
    "branches" => MetadataKey::Branches,
    "action" => MetadataKey::Action,
};

/// The fields of a revision's `date: ...; author: ...; ...` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvsMetadata {
    pub date: String,
    pub author: Option<String>,
    pub state: Option<String>,
    pub lines: Option<String>,
    pub commit_id: Option<String>,
    pub branches: Option<String>,
    pub action: Option<String>,
    /// Keys without a dedicated field (`kopt`, `mergepoint`, ...)
    pub extra: BTreeMap<String, String>,
}

impl CvsMetadata {
    fn set(&mut self, key: &str, value: String) {
        let slot = match METADATA_KEYS.get(key) {
            Some(MetadataKey::Author) => &mut self.author,
            Some(MetadataKey::State) => &mut self.state,
            Some(MetadataKey::Lines) => &mut self.lines,
            Some(MetadataKey::CommitId) => &mut self.commit_id,
            Some(MetadataKey::Branches) => &mut self.branches,
            Some(MetadataKey::Action) => &mut self.action,
            None => {
                self.extra.insert(key.to_string(), value);
                return;
            }
        };

        *slot = Some(value);
    }
}

#[derive(Debug, Clone)]
pub struct MetadataParser {
    date_field: Regex,
}

impl MetadataParser {
    pub fn new() -> anyhow::Result<Self> {
        let date_field = Regex::new(DATE_FIELD_REGEX)
            .with_context(|| format!("invalid date field regex: {DATE_FIELD_REGEX}"))?;

        Ok(MetadataParser { date_field })
    }

    /// Split a metadata line into its fields.
    ///
    /// Fails when the line does not start with a `date:` field; the date text
    /// itself is not validated here.
    pub fn parse(&self, line: &str) -> anyhow::Result<CvsMetadata> {
        let captures = self
            .date_field
            .captures(line)
            .with_context(|| format!("can't identify date in '{}'", line.trim()))?;

        let mut metadata = CvsMetadata {
            date: captures[1].trim().to_string(),
            ..CvsMetadata::default()
        };

        let rest = captures[2].trim().trim_end_matches(';');
        for pair in rest.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
            match pair.split_once(':') {
                Some((key, value)) => metadata.set(key.trim(), value.trim().to_string()),
                // `branches:  1.1.2;  1.1.4;` lists one branch per item
                None if metadata.branches.is_some() => {
                    if let Some(branches) = metadata.branches.as_mut() {
                        branches.push_str("; ");
                        branches.push_str(pair);
                    }
                }
                None => {
                    tracing::debug!("keeping metadata item without a value: '{pair}'");
                    metadata.set(pair, String::new());
                }
            }
        }

        Ok(metadata)
    }
}
