use crate::common::command::report_from_stdin;
use crate::common::logs::{cvs_fuzzy_log, cvs_log};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_is_identical_across_runs(
    cvs_log: String,
    cvs_fuzzy_log: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let combined = format!("{cvs_log}{cvs_fuzzy_log}");

    let first = report_from_stdin(&combined, &[]).output()?;
    let second = report_from_stdin(&combined, &[]).output()?;

    assert!(first.status.success());
    assert_eq!(
        String::from_utf8(first.stdout)?,
        String::from_utf8(second.stdout)?
    );

    Ok(())
}
