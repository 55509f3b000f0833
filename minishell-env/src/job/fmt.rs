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

//! Job report formatting
//!
//! One line of the `jobs` listing is produced by wrapping a job in a
//! [`Report`] and formatting it with the `Display` trait:
//!
//! ```
//! use minishell_env::job::{Job, Pid};
//! use minishell_env::job::fmt::Report;
//! let job = Job::new(Pid::from_raw(4321), vec![Pid::from_raw(4321)], "sleep 10".to_string());
//! let report = Report { id: 1, job: &job };
//! assert_eq!(report.to_string(), "[1] 4321  running  sleep 10");
//! ```

use super::Job;
use super::JobId;
use super::JobState;
use std::fmt::Display;
use std::fmt::Formatter;

impl Display for JobState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            JobState::Running => f.pad("running"),
            JobState::Stopped => f.pad("stopped"),
        }
    }
}

/// Wrapper for formatting one line of the `jobs` listing
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    /// ID the job is listed under
    pub id: JobId,

    /// Job to be reported
    pub job: &'a Job,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}  {}  {}",
            self.id, self.job.pgid, self.job.state, self.job.name
        )
    }
}
