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

//! Export built-in
//!
//! Each `NAME=VALUE` operand becomes an environment entry visible to every
//! later child process. Operands without a `=` are ignored; the shell keeps
//! no shell-variable table separate from the environment to mark for
//! export.

use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::ops::ControlFlow::Continue;

/// Entry point of the `export` built-in
pub fn main(_env: &mut Env, args: &[String]) -> crate::Result {
    for arg in args {
        if let Some((name, value)) = arg.split_once('=') {
            if !name.is_empty() {
                std::env::set_var(name, value);
            }
        }
    }
    (ExitStatus::SUCCESS, Continue(()))
}
