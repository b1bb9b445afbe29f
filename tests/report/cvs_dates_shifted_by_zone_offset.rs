use crate::common::command::report_from_stdin;
use predicates::prelude::predicate;
use rstest::rstest;

const ZONED_LOG: &str = "RCS file: /cvsroot/a.c,v
Working file: a.c
description:
----------------------------
revision 1.1
date: 2009-03-14 12:34:56 -0500;  author: rgr;  state: Exp;
Initial revision
=============================================================================
";

#[rstest]
#[case::strip_by_default(&[], "2009-03-14 12:34:56:")]
#[case::apply_without_correction(&["--cvs-timezone", "apply", "--tz-correction", "0"], "2009-03-14 07:34:56:")]
#[case::apply_with_default_correction(&["--cvs-timezone", "apply"], "2009-03-14 12:34:56:")]
#[case::apply_with_negative_correction(&["--cvs-timezone", "apply", "--tz-correction", "-3600"], "2009-03-14 06:34:56:")]
fn cvs_dates_shifted_by_zone_offset(
    #[case] args: &[&str],
    #[case] header: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    report_from_stdin(ZONED_LOG, args)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(header));

    Ok(())
}
