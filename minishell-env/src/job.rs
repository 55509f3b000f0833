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

//! Type definitions for job management
//!
//! A [`Job`] is one pipeline the shell keeps track of after it left the
//! foreground: a background pipeline from a trailing `&`, or a foreground
//! pipeline that was stopped from the keyboard. The [`JobSet`] owns all job
//! records and is updated from the statuses the `waitpid` drain collects
//! after a `SIGCHLD` (see [`crate::signal`]).
//!
//! Job IDs are issued in increasing order and never reused for the lifetime
//! of the shell process.

pub mod fmt;

#[doc(no_inline)]
pub use nix::sys::wait::WaitStatus;
#[doc(no_inline)]
pub use nix::unistd::Pid;
use std::collections::BTreeMap;

/// Identifier of a job, unique within one shell process
pub type JobId = u32;

/// Observable state of a job
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JobState {
    /// All processes of the job may be running
    Running,
    /// The job was stopped by a signal
    Stopped,
}

/// Set of processes executing one pipeline
///
/// A job records every process of its pipeline, so it is considered finished
/// only when the last of them has been reaped, not when the first one exits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Job {
    /// Process group all the job's processes belong to
    pub pgid: Pid,

    /// Human-readable command line of the pipeline
    pub name: String,

    /// Current state of the job
    pub state: JobState,

    /// Processes of the job that have not yet terminated
    pub live_pids: Vec<Pid>,
}

impl Job {
    /// Creates a running job from the processes of a freshly spawned
    /// pipeline.
    pub fn new(pgid: Pid, live_pids: Vec<Pid>, name: String) -> Self {
        Job {
            pgid,
            name,
            state: JobState::Running,
            live_pids,
        }
    }
}

/// Collection of jobs
///
/// Jobs are indexed by their [`JobId`]. The set hands out IDs from a counter
/// that only grows, so an ID observed by the user never silently starts
/// naming a different job.
#[derive(Clone, Debug, Default)]
pub struct JobSet {
    jobs: BTreeMap<JobId, Job>,
    next_id: JobId,
}

impl JobSet {
    /// Adds a job and returns its freshly issued ID.
    ///
    /// The returned ID is strictly greater than any ID issued before.
    pub fn add(&mut self, job: Job) -> JobId {
        self.next_id += 1;
        self.jobs.insert(self.next_id, job);
        self.next_id
    }

    /// Returns the job with the given ID.
    #[must_use]
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Returns the job with the given ID for modification.
    pub fn get_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.get_mut(&id)
    }

    /// Removes and returns the job with the given ID.
    pub fn remove(&mut self, id: JobId) -> Option<Job> {
        self.jobs.remove(&id)
    }

    /// Returns an iterator over the jobs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (JobId, &Job)> {
        self.jobs.iter().map(|(id, job)| (*id, job))
    }

    /// Returns true if there are no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Finds the job one of whose live processes is `pid`.
    #[must_use]
    pub fn find_by_pid(&self, pid: Pid) -> Option<JobId> {
        self.iter()
            .find(|(_, job)| job.live_pids.contains(&pid))
            .map(|(id, _)| id)
    }

    /// Updates job state from one `waitpid` result.
    ///
    /// A stop report marks the whole job stopped and a continue report marks
    /// it running. An exit or kill report retires the affected process; the
    /// job is removed once none of its processes remain.
    ///
    /// Returns the ID of the job the status applied to, or `None` if the
    /// status describes a process this set does not manage.
    pub fn apply_wait_status(&mut self, status: WaitStatus) -> Option<JobId> {
        let pid = status.pid()?;
        let id = self.find_by_pid(pid)?;
        let job = self.jobs.get_mut(&id)?;
        match status {
            WaitStatus::Stopped(..) => job.state = JobState::Stopped,
            WaitStatus::Continued(..) => job.state = JobState::Running,
            WaitStatus::Exited(..) | WaitStatus::Signaled(..) => {
                job.live_pids.retain(|p| *p != pid);
                if job.live_pids.is_empty() {
                    self.jobs.remove(&id);
                }
            }
            _ => {}
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use nix::sys::signal::Signal;

    fn job(pgid: i32, pids: &[i32]) -> Job {
        Job::new(
            Pid::from_raw(pgid),
            pids.iter().map(|p| Pid::from_raw(*p)).collect(),
            "sleep 10".to_string(),
        )
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut set = JobSet::default();
        let first = set.add(job(10, &[10]));
        let second = set.add(job(20, &[20]));
        assert!(first < second);

        set.remove(first);
        set.remove(second);
        let third = set.add(job(30, &[30]));
        assert!(second < third);
    }

    #[test]
    fn find_by_pid_searches_live_processes() {
        let mut set = JobSet::default();
        let id = set.add(job(10, &[10, 11, 12]));
        set.add(job(20, &[20]));
        assert_eq!(set.find_by_pid(Pid::from_raw(11)), Some(id));
        assert_eq!(set.find_by_pid(Pid::from_raw(99)), None);
    }

    #[test]
    fn stop_and_continue_flip_the_state() {
        let mut set = JobSet::default();
        let id = set.add(job(10, &[10, 11]));

        let stopped = WaitStatus::Stopped(Pid::from_raw(11), Signal::SIGTSTP);
        assert_eq!(set.apply_wait_status(stopped), Some(id));
        assert_eq!(set.get(id).unwrap().state, JobState::Stopped);

        let continued = WaitStatus::Continued(Pid::from_raw(10));
        assert_eq!(set.apply_wait_status(continued), Some(id));
        assert_eq!(set.get(id).unwrap().state, JobState::Running);
    }

    #[test]
    fn job_is_removed_only_when_all_processes_are_done() {
        let mut set = JobSet::default();
        let id = set.add(job(10, &[10, 11]));

        let exited = WaitStatus::Exited(Pid::from_raw(10), 0);
        assert_eq!(set.apply_wait_status(exited), Some(id));
        assert_matches!(set.get(id), Some(_), "one process is still alive");

        let killed = WaitStatus::Signaled(Pid::from_raw(11), Signal::SIGTERM, false);
        assert_eq!(set.apply_wait_status(killed), Some(id));
        assert!(set.get(id).is_none());
    }

    #[test]
    fn unknown_pid_is_ignored() {
        let mut set = JobSet::default();
        set.add(job(10, &[10]));
        let status = WaitStatus::Exited(Pid::from_raw(77), 0);
        assert_eq!(set.apply_wait_status(status), None);
    }
}
