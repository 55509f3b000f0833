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

//! Types that command execution results are expressed in

use nix::sys::wait::WaitStatus;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::ControlFlow;
use std::os::raw::c_int;

/// Resultant status of command execution
///
/// The value is the exit status of a process as visible to its parent:
/// 0 for success, non-zero for failure.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ExitStatus(pub c_int);

impl ExitStatus {
    /// Status of a successful command
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Status of an unsuccessful command or a generic shell-side failure
    pub const FAILURE: ExitStatus = ExitStatus(1);

    /// Status for a command line that could not be parsed
    pub const ERROR: ExitStatus = ExitStatus(2);

    /// Status of a child whose command could not be executed
    pub const NOT_FOUND: ExitStatus = ExitStatus(127);

    /// Returns true if the status is zero.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.0 == 0
    }
}

impl Display for ExitStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<c_int> for ExitStatus {
    fn from(value: c_int) -> Self {
        ExitStatus(value)
    }
}

impl From<ExitStatus> for c_int {
    fn from(status: ExitStatus) -> Self {
        status.0
    }
}

/// Converts a wait status to the exit status of a pipeline.
///
/// A normally exited process contributes its exit code; anything else
/// (killed or stopped by a signal) counts as a plain failure.
impl From<WaitStatus> for ExitStatus {
    fn from(status: WaitStatus) -> Self {
        match status {
            WaitStatus::Exited(_, code) => ExitStatus(code),
            _ => ExitStatus::FAILURE,
        }
    }
}

/// Request to break the read-eval loop
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Divert {
    /// Terminate the shell
    ///
    /// The optional status overrides the current `last_status` as the
    /// shell's own exit status.
    Exit(Option<ExitStatus>),
}

/// Result of command execution as seen by the read-eval loop
///
/// `Continue(())` proceeds with the next input line; `Break(divert)` leaves
/// the loop.
pub type Result<T = ()> = ControlFlow<Divert, T>;
