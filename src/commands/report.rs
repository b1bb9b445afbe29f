use crate::FormatChoice;
use crate::areas::chronicle::Chronicle;
use crate::artifacts::cvs::parser::CvsLogParser;
use crate::artifacts::date::REPORT_DATE_FORMAT;
use crate::artifacts::format::LogFormat;
use crate::artifacts::reconcile::commit_grouper::CommitGrouper;
use crate::artifacts::records::file_revision::FileRevisionRecord;
use crate::artifacts::records::logical_commit::LogicalCommit;
use crate::artifacts::svn::parser::SvnLogParser;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub format: FormatChoice,
}

impl Chronicle {
    /// Parse `text`, rebuild its commits and write the report.
    pub fn report(&self, text: &str, opts: &ReportOptions) -> anyhow::Result<()> {
        let commits = self.reconstruct(text, opts.format)?;
        tracing::info!("reporting {} commits", commits.len());

        for commit in &commits {
            self.display_commit(commit)?;
        }
        self.writer().flush()?;

        Ok(())
    }

    /// Parse `text` into commits, newest first.
    pub fn reconstruct(
        &self,
        text: &str,
        format: FormatChoice,
    ) -> anyhow::Result<Vec<LogicalCommit>> {
        let format = LogFormat::resolve(format, text);
        tracing::info!("reading {} log", format);

        match format {
            LogFormat::Cvs => {
                let records = CvsLogParser::new(self.normalizer())?.parse(text);
                Ok(CommitGrouper::new().reconcile(records))
            }
            LogFormat::SvnXml => SvnLogParser::new(self.normalizer()).parse(text),
        }
    }

    pub fn display_commit(&self, commit: &LogicalCommit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}:",
            commit.timestamp().format(REPORT_DATE_FORMAT)
        )?;

        let fields = commit.per_commit_fields();
        if !fields.is_empty() {
            writeln!(self.writer(), "  {}", join_fields(&fields))?;
        }

        for message_line in commit.message().trim_end_matches(['\n', '\r']).lines() {
            writeln!(self.writer(), "{}", indent_message_line(message_line))?;
        }

        for file in commit.files() {
            writeln!(self.writer(), "{}", file_line(file))?;
        }

        if let Some(totals) = commit.line_totals() {
            writeln!(
                self.writer(),
                "     Total lines: +{} -{}{}",
                totals.added,
                totals.removed,
                if totals.is_complete() {
                    ""
                } else {
                    " (incomplete)"
                }
            )?;
        }

        writeln!(self.writer())?;
        Ok(())
    }
}

fn join_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(";  ")
}

/// Indent by two spaces after any leading tabs; blank lines stay empty.
fn indent_message_line(line: &str) -> String {
    if line.trim().is_empty() {
        return String::new();
    }

    let body = line.trim_start_matches('\t');
    let tabs = &line[..line.len() - body.len()];
    format!("{tabs}  {body}")
}

fn file_line(file: &FileRevisionRecord) -> String {
    let mut line = format!("  => {}", file.file_name());
    if let Some(file_revision) = file.file_revision() {
        line.push(' ');
        line.push_str(file_revision);
    }

    let fields = file.per_file_fields();
    if !fields.is_empty() {
        line.push_str(":  ");
        line.push_str(&join_fields(&fields));
    }

    line
}
