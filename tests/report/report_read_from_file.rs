use crate::common::command::{run_chrono_log_command, work_dir};
use crate::common::logs::{cvs_log, cvs_report};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_read_from_file(
    work_dir: TempDir,
    cvs_log: String,
    cvs_report: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = work_dir.child("cvs.log");
    log_file.write_str(&cvs_log)?;

    let log_path = log_file.path().display().to_string();

    run_chrono_log_command(&[log_path.as_str()])
        .assert()
        .success()
        .stdout(cvs_report);

    Ok(())
}

#[rstest]
fn dash_reads_standard_input(
    cvs_log: String,
    cvs_report: String,
) -> Result<(), Box<dyn std::error::Error>> {
    run_chrono_log_command(&["-"])
        .write_stdin(cvs_log)
        .assert()
        .success()
        .stdout(cvs_report);

    Ok(())
}

#[rstest]
fn missing_file_fails(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let missing = work_dir.child("missing.log");

    let missing_path = missing.path().display().to_string();

    run_chrono_log_command(&[missing_path.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read log file"));

    Ok(())
}
