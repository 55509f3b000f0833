// This file is part of minishell, a small interactive POSIX shell.
// Copyright (C) 2025 minishell developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! End-to-end tests driving the compiled shell through `-c`.
//!
//! These run without a controlling terminal, so they cover everything but
//! the interactive terminal-ownership paths: pipelines, redirections,
//! expansion, exit statuses, and error reporting.

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

fn minishell() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minishell"))
}

fn run(command: &str) -> Output {
    minishell()
        .args(["-c", command])
        .output()
        .expect("failed to run minishell")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A unique scratch path for one test.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("minishell-test-{}-{name}", std::process::id()))
}

#[test]
fn echo_builtin_writes_its_arguments() {
    let output = run("echo hello world");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello world\n");
}

#[test]
fn quoting_preserves_inner_whitespace() {
    let output = run("echo 'a  b'  c");
    assert_eq!(stdout(&output), "a  b c\n");

    let output = run(r#"echo "x | y""#);
    assert_eq!(stdout(&output), "x | y\n");
}

#[test]
fn pipeline_connects_stages() {
    let output = run("echo hello | tr a-z A-Z");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "HELLO\n");
}

#[test]
fn pipeline_status_is_the_last_stage() {
    assert!(run("false | true").status.success());
    assert_eq!(run("true | false").status.code(), Some(1));
}

// Redirections belong to child processes, so these tests use the external
// printf; a lone `echo` is dispatched as a built-in in the shell itself.
#[test]
fn output_redirection_truncates_and_appends() {
    let path = scratch("redirect");
    let target = path.display();

    let output = run(&format!("printf 'first\\n' > {target}"));
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");

    let output = run(&format!("printf 'second\\n' >> {target}"));
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");

    let output = run(&format!("printf 'third\\n' > {target}"));
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "third\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn input_redirection_feeds_stdin() {
    let path = scratch("input");
    std::fs::write(&path, "alpha\nbeta\n").unwrap();

    let output = run(&format!("cat < {}", path.display()));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "alpha\nbeta\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn redirection_combined_with_pipeline() {
    let path = scratch("pipe-redirect");

    let output = run(&format!("echo hello | tr a-z A-Z > {}", path.display()));
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "HELLO\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn dollar_dollar_is_the_shell_pid() {
    let child = minishell()
        .args(["-c", "echo $$"])
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    let pid = child.id();
    let output = child.wait_with_output().unwrap();
    assert_eq!(stdout(&output), format!("{pid}\n"));
}

#[test]
fn parameter_expansion_uses_the_environment() {
    let output = minishell()
        .args(["-c", "echo $MINISHELL_E2E_VAR and ${MINISHELL_E2E_VAR}"])
        .env("MINISHELL_E2E_VAR", "xyz")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "xyz and xyz\n");
}

#[test]
fn undefined_parameter_expands_to_nothing() {
    let output = minishell()
        .args(["-c", "echo a${MINISHELL_E2E_UNSET}b"])
        .env_remove("MINISHELL_E2E_UNSET")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "ab\n");
}

#[test]
fn command_substitution_both_forms() {
    let output = run("echo `echo back`-$(echo dollar)");
    assert_eq!(stdout(&output), "back-dollar\n");
}

#[test]
fn unknown_command_exits_127() {
    let output = run("minishell-no-such-command-xyz");
    assert_eq!(output.status.code(), Some(127));
    assert!(
        stderr(&output).contains("execvp"),
        "stderr was {:?}",
        stderr(&output)
    );
}

#[test]
fn unterminated_quote_is_a_parse_error() {
    let output = run("echo 'unterminated");
    assert_eq!(output.status.code(), Some(2));
    assert!(!stderr(&output).is_empty());
}

#[test]
fn unknown_heredoc_like_operator_is_rejected() {
    let output = run("cat <<<no-heredoc");
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("<<<no-heredoc"),
        "stderr was {:?}",
        stderr(&output)
    );
}

#[test]
fn empty_pipeline_stage_is_a_parse_error() {
    let output = run("echo a || echo b");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cd_failure_reports_and_exits_1() {
    let output = run("cd /minishell/no/such/directory");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("cd:"),
        "stderr was {:?}",
        stderr(&output)
    );
}

#[test]
fn background_launch_prints_the_job_banner() {
    let output = run("sleep 0.1 &");
    assert!(output.status.success());
    let banner = stdout(&output);
    assert!(
        banner.starts_with("[1] "),
        "banner was {banner:?}"
    );
    let pgid: String = banner["[1] ".len()..].trim().to_string();
    assert!(pgid.parse::<u32>().is_ok(), "banner was {banner:?}");
}

#[test]
fn source_runs_the_restricted_evaluator() {
    let path = scratch("rcfile");
    std::fs::write(&path, "# comment\necho from rc\nexport MINISHELL_E2E_RC=1\n").unwrap();

    let output = run(&format!("source {}", path.display()));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "from rc\n");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn pwd_prints_the_working_directory() {
    let output = minishell()
        .args(["-c", "pwd"])
        .current_dir("/")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/\n");
}

#[test]
fn exit_status_of_the_command_is_returned() {
    assert_eq!(run("exit 42").status.code(), Some(42));
    assert!(run("exit").status.success());
}

#[test]
fn lines_are_read_from_stdin_without_a_terminal() {
    use std::io::Write;
    let mut child = minishell()
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"echo one\necho two\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "one\ntwo\n");
}

#[test]
fn aliases_expand_and_do_not_loop() {
    use std::io::Write;
    let mut child = minishell()
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"alias greet='echo hello'\ngreet there\nalias echo='echo again'\necho x\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    // The self-referencing alias expands once and stops.
    assert_eq!(stdout(&output), "hello there\nagain x\n");
}

#[test]
fn jobs_reports_an_empty_table() {
    let output = run("jobs");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No background jobs.\n");
}

#[test]
fn fg_with_an_unknown_job_fails() {
    let output = run("fg 42");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("no such job"),
        "stderr was {:?}",
        stderr(&output)
    );
}

#[test]
fn version_and_help_flags() {
    let output = minishell().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("minishell "));

    let output = minishell().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("-c COMMAND"));
}

#[test]
fn unknown_flag_fails_with_status_1() {
    let output = minishell().arg("--definitely-bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).is_empty());
}

#[test]
fn globbing_falls_back_to_the_literal_word() {
    let output = run("echo /no/such/dir/*.txt");
    assert_eq!(stdout(&output), "/no/such/dir/*.txt\n");
}

#[test]
fn globbing_expands_matches_in_order() {
    let dir = scratch("glob");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("one.txt"), "").unwrap();
    std::fs::write(dir.join("two.txt"), "").unwrap();

    let output = run(&format!("echo {}/*.txt", dir.display()));
    assert_eq!(
        stdout(&output),
        format!("{0}/one.txt {0}/two.txt\n", dir.display())
    );

    std::fs::remove_dir_all(&dir).unwrap();
}
