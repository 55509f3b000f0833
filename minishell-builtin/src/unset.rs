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

//! Unset built-in: removes environment entries.

use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::ops::ControlFlow::Continue;

/// Entry point of the `unset` built-in
pub fn main(_env: &mut Env, args: &[String]) -> crate::Result {
    for name in args {
        if !name.is_empty() && !name.contains('=') {
            std::env::remove_var(name);
        }
    }
    (ExitStatus::SUCCESS, Continue(()))
}
