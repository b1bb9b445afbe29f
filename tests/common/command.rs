use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// The binary with paging disabled and `RUST_LOG` cleared, so diagnostics
/// follow the command-line verbosity only.
pub fn run_chrono_log_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("vc-chrono-log").expect("Failed to find vc-chrono-log binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Feed `log` on standard input.
pub fn report_from_stdin(log: &str, args: &[&str]) -> Command {
    let mut cmd = run_chrono_log_command(args);
    cmd.write_stdin(log.to_string());
    cmd
}
