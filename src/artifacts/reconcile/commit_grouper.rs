use crate::artifacts::reconcile::DATE_FUZZ_SECONDS;
use crate::artifacts::records::file_revision::FileRevisionRecord;
use crate::artifacts::records::logical_commit::LogicalCommit;
use chrono::TimeDelta;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups items by key, keeping groups in order of first appearance.
#[derive(Debug)]
struct OrderedGroups<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K: Hash + Eq + Clone, V> OrderedGroups<K, V> {
    fn new() -> Self {
        OrderedGroups {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.groups[position].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    fn into_groups(self) -> Vec<(K, Vec<V>)> {
        self.groups
    }
}

/// Rebuilds logical commits from a flat list of CVS file revisions.
#[derive(Debug, Clone)]
pub struct CommitGrouper {
    fuzz: TimeDelta,
}

impl Default for CommitGrouper {
    fn default() -> Self {
        CommitGrouper {
            fuzz: TimeDelta::seconds(DATE_FUZZ_SECONDS),
        }
    }
}

impl CommitGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `records` into commits, newest first.
    ///
    /// Every record ends up in exactly one commit.
    pub fn reconcile(&self, records: Vec<FileRevisionRecord>) -> Vec<LogicalCommit> {
        let mut by_commit_id = OrderedGroups::new();
        let mut by_comment = OrderedGroups::new();

        for record in records {
            match record.commit_id() {
                Some(commit_id) => by_commit_id.push(commit_id.to_string(), record),
                None => by_comment.push(record.comment().to_string(), record),
            }
        }

        let mut commits = Self::group_by_commit_id(by_commit_id.into_groups());
        let exact = commits.len();
        commits.extend(self.group_by_comment(by_comment.into_groups()));

        tracing::debug!(
            "reconciled {} commits ({} by commit id, {} by comment and date)",
            commits.len(),
            exact,
            commits.len() - exact
        );

        // The oldest entries of a repository often share one timestamp;
        // reversing an ascending stable sort keeps them in a fixed order.
        commits.sort_by_key(LogicalCommit::timestamp);
        commits.reverse();
        commits
    }

    fn group_by_commit_id(groups: Vec<(String, Vec<FileRevisionRecord>)>) -> Vec<LogicalCommit> {
        groups
            .into_iter()
            .map(|(commit_id, files)| {
                let first = &files[0];
                let timestamp = first.timestamp();
                let author = first.author().map(str::to_string);
                let message = first.comment().to_string();

                LogicalCommit::new(timestamp, message, files)
                    .with_author(author)
                    .with_commit_id(Some(commit_id))
            })
            .collect()
    }

    fn group_by_comment(
        &self,
        groups: Vec<(String, Vec<FileRevisionRecord>)>,
    ) -> Vec<LogicalCommit> {
        let mut commits = Vec::new();

        for (comment, mut records) in groups {
            records.sort_by_key(FileRevisionRecord::timestamp);

            let mut run: Vec<FileRevisionRecord> = Vec::new();
            let mut deadline = None;

            for record in records {
                if deadline.is_some_and(|limit| record.timestamp() > limit) {
                    commits.push(Self::close_run(&comment, std::mem::take(&mut run)));
                }

                // a window that would end past the last representable date never closes
                if run.is_empty() {
                    deadline = record.timestamp().checked_add_signed(self.fuzz);
                }
                run.push(record);
            }

            if !run.is_empty() {
                commits.push(Self::close_run(&comment, run));
            }
        }

        commits
    }

    fn close_run(comment: &str, run: Vec<FileRevisionRecord>) -> LogicalCommit {
        let opening = &run[0];
        let timestamp = opening.timestamp();
        let author = opening.author().map(str::to_string);
        tracing::trace!(
            "closing run of {} files opened at '{}'",
            run.len(),
            opening.raw_timestamp()
        );

        LogicalCommit::new(timestamp, comment.to_string(), run).with_author(author)
    }
}
