use crate::common::command::report_from_stdin;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::unclosed_entry("<?xml version=\"1.0\"?>\n<log>\n<logentry revision=\"1\">\n")]
#[case::mismatched_tags("<log><logentry revision=\"1\"></log></logentry>")]
fn svn_malformed_xml_fails(#[case] log: &str) -> Result<(), Box<dyn std::error::Error>> {
    report_from_stdin(log, &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed Subversion XML log"));

    Ok(())
}
