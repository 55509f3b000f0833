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

//! Jobs built-in
//!
//! Prints one line per tracked job in the form
//! `[<id>] <pgid>  <running|stopped>  <cmdline>`. Pending child statuses
//! are folded in first, so a job that finished since the last prompt does
//! not appear. An empty table prints `No background jobs.`.

use minishell_env::job::fmt::Report;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use minishell_semantics::job_control;
use std::fmt::Write;
use std::ops::ControlFlow::Continue;

/// Entry point of the `jobs` built-in
pub fn main(env: &mut Env, _args: &[String]) -> crate::Result {
    job_control::drain_statuses(env);

    if env.jobs.is_empty() {
        println!("No background jobs.");
        return (ExitStatus::SUCCESS, Continue(()));
    }

    let mut listing = String::new();
    for (id, job) in env.jobs.iter() {
        writeln!(listing, "{}", Report { id, job }).unwrap();
    }
    print!("{listing}");
    (ExitStatus::SUCCESS, Continue(()))
}
