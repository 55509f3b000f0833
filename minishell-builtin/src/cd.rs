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

//! Cd built-in
//!
//! # Synopsis
//!
//! ```sh
//! cd [directory]
//! ```
//!
//! # Description
//!
//! Changes the working directory to *directory*. Without an operand the
//! target is `$HOME`, and `/` if `$HOME` is unset or empty. Neither
//! `$OLDPWD` nor `cd -` is supported.
//!
//! # Exit status
//!
//! Zero on success; 1 if `chdir` failed, with a diagnostic on the standard
//! error and the working directory unchanged.

use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use nix::unistd::chdir;
use std::ops::ControlFlow::Continue;
use std::path::Path;

/// Entry point of the `cd` built-in
pub fn main(_env: &mut Env, args: &[String]) -> crate::Result {
    let target = match args.first() {
        Some(directory) => directory.clone(),
        None => std::env::var("HOME").unwrap_or_default(),
    };
    let target = if target.is_empty() {
        "/".to_string()
    } else {
        target
    };

    match chdir(target.as_str()) {
        Ok(()) => (ExitStatus::SUCCESS, Continue(())),
        Err(errno) => {
            eprintln!("minishell: cd: {}: {}", target, errno.desc());
            (ExitStatus::FAILURE, Continue(()))
        }
    }
}

/// Implements auto-cd.
///
/// If the command consists of exactly one word naming an existing
/// directory, changes into it as if `cd` had been invoked and returns the
/// resulting status. Returns `None` when the command is anything else.
pub fn auto_cd(words: &[String]) -> Option<ExitStatus> {
    let [directory] = words else {
        return None;
    };
    if !Path::new(directory).is_dir() {
        return None;
    }
    match chdir(directory.as_str()) {
        Ok(()) => Some(ExitStatus::SUCCESS),
        Err(errno) => {
            eprintln!("minishell: cd: {}: {}", directory, errno.desc());
            Some(ExitStatus::FAILURE)
        }
    }
}
