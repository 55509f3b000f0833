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

//! Fg built-in
//!
//! # Synopsis
//!
//! ```sh
//! fg job_id
//! ```
//!
//! # Description
//!
//! Brings the job to the foreground: hands it the controlling terminal,
//! resumes it with `SIGCONT` delivered to its process group, and waits
//! until it finishes or is stopped again. The terminal returns to the shell
//! in either case. A finished job leaves the job table; a stopped one stays
//! in the stopped state.
//!
//! Only numeric job IDs as printed by `jobs` are accepted.
//!
//! # Exit status
//!
//! Zero if the job was resumed; 1 if the operand is missing or malformed or
//! names no job.

use crate::common::parse_job_id;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use minishell_semantics::job_control;
use std::ops::ControlFlow::Continue;

/// Entry point of the `fg` built-in
pub fn main(env: &mut Env, args: &[String]) -> crate::Result {
    let status = match parse_job_id("fg", args) {
        Some(id) => job_control::resume_foreground(env, id),
        None => ExitStatus::FAILURE,
    };
    (status, Continue(()))
}
