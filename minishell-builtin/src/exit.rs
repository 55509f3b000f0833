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

//! Exit built-in
//!
//! `exit [n]` terminates the read-eval loop. With an operand the shell
//! exits with status *n*; without one it exits with the status of the last
//! foreground pipeline.

use minishell_env::semantics::Divert;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::ops::ControlFlow::Break;
use std::os::raw::c_int;

/// Entry point of the `exit` built-in
pub fn main(env: &mut Env, args: &[String]) -> crate::Result {
    match args.first() {
        // Without an operand the shell keeps the status of the last
        // foreground pipeline.
        None => (env.last_status, Break(Divert::Exit(None))),
        Some(operand) => match operand.parse::<c_int>() {
            Ok(code) => {
                let status = ExitStatus(code);
                (status, Break(Divert::Exit(Some(status))))
            }
            Err(_) => {
                eprintln!("minishell: exit: {operand}: numeric argument required");
                let status = ExitStatus::ERROR;
                (status, Break(Divert::Exit(Some(status))))
            }
        },
    }
}
