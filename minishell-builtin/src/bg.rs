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

//! Bg built-in
//!
//! Resumes a stopped job in the background with `SIGCONT` and reports
//! `[<id>] <pgid> continued in background`. The job keeps running without
//! the terminal; only numeric job IDs are accepted.

use crate::common::parse_job_id;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use minishell_semantics::job_control;
use std::ops::ControlFlow::Continue;

/// Entry point of the `bg` built-in
pub fn main(env: &mut Env, args: &[String]) -> crate::Result {
    let status = match parse_job_id("bg", args) {
        Some(id) => job_control::resume_background(env, id),
        None => ExitStatus::FAILURE,
    };
    (status, Continue(()))
}
