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

//! Job status reconciliation and resumption
//!
//! The `SIGCHLD` handler only raises a flag (see [`minishell_env::signal`]).
//! The read-eval loop calls [`handle_pending_sigchld`] at its safe points;
//! that drains every pending child status with a non-blocking `waitpid` and
//! folds the statuses into the job set. `fg` and `bg` resume a stopped or
//! backgrounded job with `SIGCONT` delivered to its whole process group.

use crate::pipeline::wait_for_group;
use minishell_env::job::JobId;
use minishell_env::job::JobState;
use minishell_env::job::Pid;
use minishell_env::job::WaitStatus;
use minishell_env::semantics::ExitStatus;
use minishell_env::signal;
use minishell_env::system;
use minishell_env::Env;
use nix::sys::signal::killpg;
use nix::sys::signal::Signal;
use nix::sys::wait::WaitPidFlag;

/// Drains every pending child status into the job set.
///
/// Non-blocking; also observes stops and continues of job processes. May be
/// called at any time from the main thread.
pub fn drain_statuses(env: &mut Env) {
    let flags = WaitPidFlag::WNOHANG | WaitPidFlag::WUNTRACED | WaitPidFlag::WCONTINUED;
    loop {
        match system::waitpid(Pid::from_raw(-1), Some(flags)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(status) => {
                env.jobs.apply_wait_status(status);
            }
            // ECHILD: no children at all.
            Err(_) => break,
        }
    }
}

/// Drains child statuses if a `SIGCHLD` arrived since the last check.
pub fn handle_pending_sigchld(env: &mut Env) {
    if signal::take_sigchld() {
        drain_statuses(env);
    }
}

/// Resumes a job in the foreground (the `fg` built-in).
///
/// Hands the terminal to the job's process group, continues it, and waits
/// until the job finishes or stops again. A finished job is removed; a job
/// stopped again stays in the set in the stopped state.
pub fn resume_foreground(env: &mut Env, id: JobId) -> ExitStatus {
    drain_statuses(env);

    let (pgid, pids) = match env.jobs.get_mut(id) {
        Some(job) => {
            job.state = JobState::Running;
            (job.pgid, job.live_pids.clone())
        }
        None => {
            eprintln!("minishell: fg: {id}: no such job");
            return ExitStatus::FAILURE;
        }
    };

    env.context.give_terminal_to(pgid);
    if let Err(errno) = killpg(pgid, Signal::SIGCONT) {
        env.context.reclaim_terminal();
        eprintln!("minishell: fg: {id}: {}", errno.desc());
        return ExitStatus::FAILURE;
    }

    let outcome = wait_for_group(pgid, pids);
    env.context.reclaim_terminal();

    if outcome.stopped {
        if let Some(job) = env.jobs.get_mut(id) {
            job.state = JobState::Stopped;
            job.live_pids = outcome.remaining;
        }
    } else {
        env.jobs.remove(id);
    }
    ExitStatus::SUCCESS
}

/// Resumes a job in the background (the `bg` built-in).
pub fn resume_background(env: &mut Env, id: JobId) -> ExitStatus {
    drain_statuses(env);

    let Some(job) = env.jobs.get(id) else {
        eprintln!("minishell: bg: {id}: no such job");
        return ExitStatus::FAILURE;
    };
    let pgid = job.pgid;

    if let Err(errno) = killpg(pgid, Signal::SIGCONT) {
        eprintln!("minishell: bg: {id}: {}", errno.desc());
        return ExitStatus::FAILURE;
    }
    if let Some(job) = env.jobs.get_mut(id) {
        job.state = JobState::Running;
    }
    println!("[{id}] {pgid} continued in background");
    ExitStatus::SUCCESS
}
