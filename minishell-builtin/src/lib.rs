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

//! Implementation of the shell built-in utilities
//!
//! Each built-in utility is implemented in the submodule named after the
//! utility, as a `main` function taking the environment and the argument
//! words. The [`Builtin`] enum names every built-in; the read-eval loop maps
//! the head word of a command through [`Builtin::from_name`] and dispatches
//! through the single match in [`Builtin::execute`].
//!
//! A built-in runs in the shell process only when its command is the sole
//! stage of a foreground pipeline. Inside pipelines and background commands
//! the word is looked up through `PATH` like any other command, so
//! `echo x | cat` spawns two children.

pub mod alias;
pub mod bg;
pub mod cd;
mod common;
pub mod echo;
pub mod exit;
pub mod export;
pub mod fg;
pub mod jobs;
pub mod pwd;
pub mod rc;
pub mod source;
pub mod unalias;
pub mod unset;

use minishell_env::semantics::Divert;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::ops::ControlFlow;

/// Result of running a built-in
///
/// The exit status becomes the shell's `last_status`; the control flow tells
/// the read-eval loop whether to keep going.
pub type Result = (ExitStatus, ControlFlow<Divert>);

/// The built-in utilities, one variant per command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Builtin {
    Cd,
    Pwd,
    Echo,
    Export,
    Unset,
    Alias,
    Unalias,
    Source,
    Jobs,
    Fg,
    Bg,
    Exit,
}

impl Builtin {
    /// Looks up a built-in by its command name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Builtin> {
        use Builtin::*;
        match name {
            "cd" => Some(Cd),
            "pwd" => Some(Pwd),
            "echo" => Some(Echo),
            "export" => Some(Export),
            "unset" => Some(Unset),
            "alias" => Some(Alias),
            "unalias" => Some(Unalias),
            "source" | "." => Some(Source),
            "jobs" => Some(Jobs),
            "fg" => Some(Fg),
            "bg" => Some(Bg),
            "exit" => Some(Exit),
            _ => None,
        }
    }

    /// Runs the built-in on the full word list of the command.
    ///
    /// `words[0]` is the name the built-in was invoked as; the rest are its
    /// arguments.
    pub fn execute(self, env: &mut Env, words: &[String]) -> Result {
        let args = &words[1..];
        match self {
            Builtin::Cd => cd::main(env, args),
            Builtin::Pwd => pwd::main(env, args),
            Builtin::Echo => echo::main(env, args),
            Builtin::Export => export::main(env, args),
            Builtin::Unset => unset::main(env, args),
            Builtin::Alias => alias::main(env, args),
            Builtin::Unalias => unalias::main(env, args),
            Builtin::Source => source::main(env, &words[0], args),
            Builtin::Jobs => jobs::main(env, args),
            Builtin::Fg => fg::main(env, args),
            Builtin::Bg => bg::main(env, args),
            Builtin::Exit => exit::main(env, args),
        }
    }
}
