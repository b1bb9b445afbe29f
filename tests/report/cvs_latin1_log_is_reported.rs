use crate::common::command::run_chrono_log_command;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn cvs_latin1_log_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut log = b"RCS file: /cvsroot/a.c,v\n\
        Working file: a.c\n\
        description:\n\
        ----------------------------\n\
        revision 1.1\n\
        date: 2005-08-29 12:00:00;  author: ren\xe9;  state: Exp;\n"
        .to_vec();
    log.extend_from_slice(b"Corrig\xe9 la documentation.\n");
    log.extend_from_slice(
        b"=============================================================================\n",
    );

    run_chrono_log_command(&[])
        .write_stdin(log)
        .assert()
        .success()
        .stdout(predicate::str::contains("2005-08-29 12:00:00:\n"))
        .stdout(predicate::str::contains("  author: ren\u{FFFD}\n"))
        .stdout(predicate::str::contains("  Corrig\u{FFFD} la documentation.\n"))
        .stdout(predicate::str::contains("  => a.c 1.1:  state: Exp\n"))
        .stderr(predicate::str::contains("not valid UTF-8"));

    Ok(())
}
