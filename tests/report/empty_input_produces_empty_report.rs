use crate::common::command::report_from_stdin;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::nothing("")]
#[case::blank_lines("\n\n  \n")]
#[case::empty_svn_log("<?xml version=\"1.0\"?>\n<log>\n</log>\n")]
fn empty_input_produces_empty_report(#[case] log: &str) -> Result<(), Box<dyn std::error::Error>> {
    report_from_stdin(log, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
