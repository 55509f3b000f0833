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

//! Pipeline execution
//!
//! [`run_pipeline`] is the core of the shell. For a pipeline of N stages it:
//!
//! 1. creates all N-1 pipes up front;
//! 2. forks one child per stage; every child joins the process group of the
//!    first child, restores default signal dispositions, takes the terminal
//!    when the pipeline runs in the foreground, wires the pipe ends onto its
//!    standard input and output, closes every pipe descriptor, applies file
//!    redirections, and executes its command;
//! 3. closes all pipe ends in the parent;
//! 4. registers a background pipeline as a job and returns immediately, or
//!    hands the terminal to the group and waits for a foreground pipeline.
//!
//! Both the parent and each child set the child's process group, so the
//! group is in place no matter which of the two is scheduled first; the
//! loser of the race gets an ignorable error.
//!
//! The exit status of a foreground pipeline is the status of its last stage:
//! the exit code if it exited normally, 1 otherwise. A pipeline stopped from
//! the keyboard becomes a stopped job and counts as a failure.

use minishell_env::context::ShellContext;
use minishell_env::job::fmt::Report;
use minishell_env::job::Job;
use minishell_env::job::JobState;
use minishell_env::job::Pid;
use minishell_env::semantics::ExitStatus;
use minishell_env::signal;
use minishell_env::system;
use minishell_env::Env;
use minishell_syntax::syntax::Pipeline;
use minishell_syntax::syntax::Stage;
use nix::errno::Errno;
use nix::fcntl::open;
use nix::fcntl::OFlag;
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::sys::stat::Mode;
use nix::sys::wait::WaitPidFlag;
use nix::sys::wait::WaitStatus;
use nix::unistd::execvp;
use nix::unistd::fork;
use nix::unistd::getpgrp;
use nix::unistd::setpgid;
use nix::unistd::ForkResult;
use std::ffi::CString;
use std::os::unix::io::RawFd;

/// Runs a pipeline to completion or to the background.
///
/// Returns the pipeline's exit status; a background pipeline reports
/// success immediately after printing its job banner.
pub fn run_pipeline(env: &mut Env, pipeline: &Pipeline) -> ExitStatus {
    let stage_count = pipeline.stages.len();
    if stage_count == 0 {
        return ExitStatus::SUCCESS;
    }

    // All pipes exist before the first fork.
    let mut pipes = Vec::with_capacity(stage_count - 1);
    for _ in 1..stage_count {
        match nix::unistd::pipe() {
            Ok(ends) => pipes.push(ends),
            Err(errno) => {
                close_pipes(&pipes);
                eprintln!("minishell: pipe: {}", errno.desc());
                return ExitStatus::FAILURE;
            }
        }
    }

    let mut pgid = None;
    let mut pids = Vec::with_capacity(stage_count);
    for (index, stage) in pipeline.stages.iter().enumerate() {
        // SAFETY: the shell is single-threaded; the child branch only
        // performs fd plumbing and exec before leaving the process.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => run_child(
                stage,
                index,
                stage_count,
                &pipes,
                pgid,
                pipeline.background,
                &env.context,
            ),

            Ok(ForkResult::Parent { child }) => {
                let group = *pgid.get_or_insert(child);
                // The child makes the same call; the later one is a no-op.
                let _ = setpgid(child, group);
                pids.push(child);
            }

            Err(errno) => {
                close_pipes(&pipes);
                eprintln!("minishell: fork: {}", errno.desc());
                // Stages forked so far run to completion and are reaped by
                // the SIGCHLD drain; they are not registered as a job.
                return ExitStatus::FAILURE;
            }
        }
    }

    close_pipes(&pipes);

    let Some(pgid) = pgid else {
        return ExitStatus::SUCCESS;
    };

    if pipeline.background {
        let id = env.jobs.add(Job::new(pgid, pids, pipeline.to_string()));
        println!("[{id}] {pgid}");
        ExitStatus::SUCCESS
    } else {
        run_foreground(env, pgid, pids, pipeline)
    }
}

/// Waits for a foreground pipeline, handling stops.
fn run_foreground(env: &mut Env, pgid: Pid, pids: Vec<Pid>, pipeline: &Pipeline) -> ExitStatus {
    env.context.give_terminal_to(pgid);
    let outcome = wait_for_group(pgid, pids);
    env.context.reclaim_terminal();

    if outcome.stopped {
        let mut job = Job::new(pgid, outcome.remaining, pipeline.to_string());
        job.state = JobState::Stopped;
        let id = env.jobs.add(job);
        if let Some(job) = env.jobs.get(id) {
            println!("{}", Report { id, job });
        }
        return ExitStatus::FAILURE;
    }
    outcome.last_status
}

/// What became of a foreground wait
pub(crate) struct WaitOutcome {
    /// Processes that had not terminated when the wait ended
    pub remaining: Vec<Pid>,
    /// Status of the last stage of the pipeline
    pub last_status: ExitStatus,
    /// Whether the wait ended because a process stopped
    pub stopped: bool,
}

/// Waits on the process group until all of `pids` are gone or one stops.
pub(crate) fn wait_for_group(pgid: Pid, pids: Vec<Pid>) -> WaitOutcome {
    let last_pid = pids.last().copied();
    let mut remaining = pids;
    let mut last_status = ExitStatus::SUCCESS;
    let mut stopped = false;

    while !remaining.is_empty() {
        let target = Pid::from_raw(-pgid.as_raw());
        match system::waitpid(target, Some(WaitPidFlag::WUNTRACED)) {
            Ok(status @ (WaitStatus::Exited(..) | WaitStatus::Signaled(..))) => {
                let pid = status.pid();
                remaining.retain(|p| Some(*p) != pid);
                if pid == last_pid {
                    last_status = ExitStatus::from(status);
                }
            }
            Ok(WaitStatus::Stopped(..)) => {
                stopped = true;
                break;
            }
            Ok(_) => {}
            // ECHILD: every process is gone already.
            Err(_) => break,
        }
    }

    WaitOutcome {
        remaining,
        last_status,
        stopped,
    }
}

/// Child-side setup and exec; never returns.
fn run_child(
    stage: &Stage,
    index: usize,
    stage_count: usize,
    pipes: &[(RawFd, RawFd)],
    pgid: Option<Pid>,
    background: bool,
    context: &ShellContext,
) -> ! {
    // First the process group: the first child founds the group, the rest
    // join it. The parent mirrors this call.
    let _ = setpgid(Pid::from_raw(0), pgid.unwrap_or(Pid::from_raw(0)));

    signal::restore_default_dispositions();

    // A foreground pipeline owns the terminal from the start, so keyboard
    // signals reach it and not the shell. Background pipelines must leave
    // the terminal alone.
    if !background {
        context.give_terminal_to(getpgrp());
    }

    if index > 0 && system::dup2(pipes[index - 1].0, STDIN_FILENO).is_err() {
        child_fail("cannot connect pipe to stdin", Errno::last());
    }
    if index < stage_count - 1 && system::dup2(pipes[index].1, STDOUT_FILENO).is_err() {
        child_fail("cannot connect pipe to stdout", Errno::last());
    }

    // dup2 leaves the originals open; close every pipe end, including the
    // ones just duplicated.
    close_pipes(pipes);

    // File redirections override the pipe wiring.
    if let Some(path) = &stage.redir.input {
        match open(path.as_str(), OFlag::O_RDONLY, Mode::empty()) {
            Ok(fd) => {
                if system::dup2(fd, STDIN_FILENO).is_err() {
                    child_fail(path, Errno::last());
                }
                let _ = system::close(fd);
            }
            Err(errno) => child_fail(path, errno),
        }
    }
    if let Some(path) = &stage.redir.output {
        let mut flags = OFlag::O_WRONLY | OFlag::O_CREAT;
        flags |= if stage.redir.append {
            OFlag::O_APPEND
        } else {
            OFlag::O_TRUNC
        };
        match open(path.as_str(), flags, Mode::from_bits_truncate(0o644)) {
            Ok(fd) => {
                if system::dup2(fd, STDOUT_FILENO).is_err() {
                    child_fail(path, Errno::last());
                }
                let _ = system::close(fd);
            }
            Err(errno) => child_fail(path, errno),
        }
    }

    if stage.words.is_empty() {
        std::process::exit(0);
    }

    let args: Vec<CString> = match stage
        .words
        .iter()
        .map(|word| CString::new(word.as_str()))
        .collect()
    {
        Ok(args) => args,
        Err(_) => child_fail(&stage.words[0], Errno::EINVAL),
    };

    let errno = execvp(&args[0], &args).err().unwrap_or(Errno::ENOENT);
    eprintln!("execvp: {}: {}", stage.words[0], errno.desc());
    std::process::exit(127)
}

/// Reports a redirection or plumbing failure and exits the child.
fn child_fail(what: impl std::fmt::Display, errno: Errno) -> ! {
    eprintln!("minishell: {}: {}", what, errno.desc());
    std::process::exit(1)
}

fn close_pipes(pipes: &[(RawFd, RawFd)]) {
    for (reader, writer) in pipes {
        let _ = system::close(*reader);
        let _ = system::close(*writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The fork/exec paths are exercised end to end by the `-c` integration
    // tests of the minishell binary; forking under the multi-threaded test
    // harness is not safe.

    #[test]
    fn waiting_on_an_empty_group_changes_nothing() {
        // No child of the test process lives in this group, so the wait
        // must end on ECHILD with all state at its defaults.
        let pgid = Pid::from_raw(999_999);
        let pids = vec![Pid::from_raw(999_999)];
        let outcome = wait_for_group(pgid, pids.clone());
        assert_eq!(outcome.remaining, pids);
        assert_eq!(outcome.last_status, ExitStatus::SUCCESS);
        assert!(!outcome.stopped);
    }

    #[test]
    fn close_pipes_tolerates_already_closed_ends() {
        close_pipes(&[(-1, -1), (-1, -1)]);
    }
}
