use crate::artifacts::date::normalizer::DateNormalizer;
use crate::artifacts::records::file_revision::FileRevisionRecord;
use crate::artifacts::records::logical_commit::LogicalCommit;
use crate::artifacts::svn::{
    AUTHOR_TAG, DATE_TAG, DEFAULT_PATH_ACTION, LOG_ENTRY_TAG, MESSAGE_TAG, PATH_TAG, PATHS_TAG,
};
use anyhow::Context;
use derive_new::new;
use roxmltree::{Document, Node};
use std::collections::BTreeMap;

/// All text below `node`, concatenated in document order.
fn collect_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}

/// One `<path>` of a log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChangedPath {
    name: String,
    action: String,
    extra: BTreeMap<String, String>,
}

impl ChangedPath {
    fn from_node(node: Node<'_, '_>) -> Self {
        let action = node
            .attribute("action")
            .unwrap_or(DEFAULT_PATH_ACTION)
            .to_string();
        let extra = node
            .attributes()
            .filter(|attribute| attribute.name() != "action")
            .map(|attribute| (attribute.name().to_string(), attribute.value().to_string()))
            .collect();

        ChangedPath {
            name: collect_text(node).trim().to_string(),
            action,
            extra,
        }
    }
}

/// Tree walk over a Subversion XML log.
#[derive(Debug, Clone, new)]
pub struct SvnLogParser<'n> {
    normalizer: &'n DateNormalizer,
}

impl SvnLogParser<'_> {
    /// Parse a whole XML log into commits, newest first.
    ///
    /// A document that is not well-formed XML is an error; a log entry without
    /// a usable date is skipped with a warning.
    pub fn parse(&self, text: &str) -> anyhow::Result<Vec<LogicalCommit>> {
        let document = Document::parse(text).context("malformed Subversion XML log")?;

        let mut commits: Vec<LogicalCommit> = document
            .descendants()
            .filter(|node| node.has_tag_name(LOG_ENTRY_TAG))
            .filter_map(|entry| self.parse_entry(entry))
            .collect();

        // stable, so entries with equal dates keep document order
        commits.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        tracing::debug!("parsed {} Subversion log entries", commits.len());
        Ok(commits)
    }

    fn parse_entry(&self, entry: Node<'_, '_>) -> Option<LogicalCommit> {
        let revision = entry.attribute("revision").map(str::to_string);
        if revision.is_none() {
            tracing::warn!(
                "log entry at byte {} has no revision attribute",
                entry.range().start
            );
        }
        let revision_label = revision.as_deref().unwrap_or("?");

        let mut fields = BTreeMap::new();
        let mut paths = Vec::new();
        for child in entry.children().filter(Node::is_element) {
            if child.has_tag_name(PATHS_TAG) {
                paths.extend(
                    child
                        .children()
                        .filter(|path| path.has_tag_name(PATH_TAG))
                        .map(ChangedPath::from_node),
                );
            } else {
                fields.insert(child.tag_name().name().to_string(), collect_text(child));
            }
        }

        let Some(raw_date) = fields.remove(DATE_TAG) else {
            tracing::warn!("revision {revision_label} has no date; skipping");
            return None;
        };
        let timestamp = match self.normalizer.normalize_svn(&raw_date) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                tracing::warn!("{e:#} (revision {revision_label}); skipping");
                return None;
            }
        };

        let author = fields.remove(AUTHOR_TAG);
        let message = fields.remove(MESSAGE_TAG).unwrap_or_default();
        if !fields.is_empty() {
            tracing::trace!(
                "revision {revision_label}: ignoring fields {:?}",
                fields.keys().collect::<Vec<_>>()
            );
        }

        let files = paths
            .into_iter()
            .map(|path| {
                FileRevisionRecord::new(path.name, timestamp, raw_date.clone(), message.clone())
                    .with_action(Some(path.action))
                    .with_author(author.clone())
                    .with_extra(path.extra)
            })
            .collect();

        Some(
            LogicalCommit::new(timestamp, message, files)
                .with_revision(revision)
                .with_author(author),
        )
    }
}
