use crate::common::command::report_from_stdin;
use predicates::prelude::*;
use rstest::rstest;

const BAD_DATE_LOG: &str = "RCS file: /cvsroot/a.c,v
Working file: a.c
description:
----------------------------
revision 1.2
date: sometime last week;  author: rgr;  state: Exp;
Broken.
----------------------------
revision 1.1
date: 2005-08-29 12:00:00;  author: rgr;  state: Exp;
Initial revision
=============================================================================
";

#[rstest]
fn cvs_malformed_date_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    report_from_stdin(BAD_DATE_LOG, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial revision"))
        .stdout(predicate::str::contains("Broken.").not())
        .stderr(predicate::str::contains("sometime last week"));

    Ok(())
}

#[rstest]
fn cvs_malformed_date_warning_silenced_by_quiet() -> Result<(), Box<dyn std::error::Error>> {
    report_from_stdin(BAD_DATE_LOG, &["-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    Ok(())
}
