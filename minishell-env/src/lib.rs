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

//! Shell execution environment
//!
//! This crate defines the state a running shell carries between input lines
//! and the low-level plumbing that state depends on:
//!
//! - [`Env`] aggregates everything and is owned by `main`;
//! - [`job`] tracks background and stopped jobs;
//! - [`alias`] stores and expands command aliases;
//! - [`context`] owns the shell's process group and the controlling
//!   terminal;
//! - [`signal`] installs the shell's signal dispositions and the `SIGCHLD`
//!   flag the read-eval loop polls;
//! - [`system`] wraps the handful of system calls that must retry on
//!   `EINTR`;
//! - [`semantics`] defines [`ExitStatus`](semantics::ExitStatus) and the
//!   control-flow types the read-eval loop uses.
//!
//! Environment variables are deliberately not duplicated here; they live in
//! the process environment and are accessed through `std::env`.

pub mod alias;
pub mod context;
pub mod job;
pub mod semantics;
pub mod signal;
pub mod system;

use self::alias::AliasSet;
use self::context::ShellContext;
use self::job::JobSet;
use self::semantics::ExitStatus;

/// Whole state of the shell
///
/// The single `Env` instance is created before the read-eval loop starts and
/// lives until the shell exits. Everything that must survive from one input
/// line to the next is reachable from here.
#[derive(Debug)]
pub struct Env {
    /// Background and stopped jobs
    pub jobs: JobSet,

    /// Defined aliases
    pub aliases: AliasSet,

    /// Process-group and terminal ownership
    pub context: ShellContext,

    /// Exit status of the most recent foreground pipeline
    pub last_status: ExitStatus,
}

impl Env {
    /// Creates a new environment around a shell context.
    pub fn new(context: ShellContext) -> Self {
        Env {
            jobs: JobSet::default(),
            aliases: AliasSet::default(),
            context,
            last_status: ExitStatus::SUCCESS,
        }
    }
}
