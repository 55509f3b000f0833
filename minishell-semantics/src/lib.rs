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

//! Execution semantics of minishell
//!
//! This crate bridges the purely textual [`minishell_syntax`] layer and the
//! process world:
//!
//! - [`command::parse_command_line`] runs the whole front end for one input
//!   line (split, tokenize, [expand](expansion), parse redirections) and
//!   yields a ready-to-run [`Pipeline`](minishell_syntax::syntax::Pipeline);
//! - [`pipeline::run_pipeline`] forks the stages, wires pipes and
//!   redirections, assigns the process group, and either waits in the
//!   foreground or registers a background job;
//! - [`job_control`] reaps child statuses collected via `SIGCHLD` and
//!   implements resuming jobs in the foreground or background.

pub mod command;
pub mod expansion;
pub mod job_control;
pub mod pipeline;
