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

//! Source built-in
//!
//! # Synopsis
//!
//! ```sh
//! source file
//! . file
//! ```
//!
//! # Description
//!
//! Reads *file* line by line and feeds each line to the restricted
//! [rc evaluator](crate::rc), which understands only `alias`, `export`,
//! `echo`, `setprompt` and comments. This is the same evaluator the shell
//! runs over `~/.minishellrc` at startup; `source` does not execute
//! arbitrary commands.
//!
//! # Exit status
//!
//! Zero on success; 1 if the operand is missing or the file cannot be read.

use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::ops::ControlFlow::Continue;

/// Entry point of the `source` (`.`) built-in
///
/// `name` is the word the built-in was invoked as, used in diagnostics.
pub fn main(env: &mut Env, name: &str, args: &[String]) -> crate::Result {
    let Some(path) = args.first() else {
        eprintln!("minishell: {name}: file operand required");
        return (ExitStatus::FAILURE, Continue(()));
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            eprintln!("minishell: {name}: cannot open {path}");
            return (ExitStatus::FAILURE, Continue(()));
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => crate::rc::eval_line(env, &line),
            Err(_) => break,
        }
    }
    (ExitStatus::SUCCESS, Continue(()))
}
