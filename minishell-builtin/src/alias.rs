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

//! Alias built-in
//!
//! # Synopsis
//!
//! ```sh
//! alias [name=body...]
//! ```
//!
//! # Description
//!
//! Without operands, prints every defined alias as `alias name='body'`, one
//! per line in name order. Each `name=body` operand defines an alias; one
//! layer of quotes surrounding the body is stripped, so the rc-file form
//! `alias ll='ls -la'` and the command-line form define the same body.
//! Operands without `=` are ignored.
//!
//! # Exit status
//!
//! Always zero.

use crate::rc::unquote;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::fmt::Write;
use std::ops::ControlFlow::Continue;

/// Entry point of the `alias` built-in
pub fn main(env: &mut Env, args: &[String]) -> crate::Result {
    if args.is_empty() {
        print!("{}", listing(env));
        return (ExitStatus::SUCCESS, Continue(()));
    }

    for arg in args {
        if let Some((name, body)) = arg.split_once('=') {
            if !name.is_empty() {
                env.aliases
                    .define(name.to_string(), unquote(body).to_string());
            }
        }
    }
    (ExitStatus::SUCCESS, Continue(()))
}

fn listing(env: &Env) -> String {
    let mut out = String::new();
    for (name, body) in env.aliases.iter() {
        writeln!(out, "alias {name}='{body}'").unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use minishell_env::context::ShellContext;

    #[test]
    fn defining_and_listing() {
        let mut env = Env::new(ShellContext::new());
        let (status, _) = main(&mut env, &["ll=ls -la".to_string()]);
        assert_eq!(status, ExitStatus::SUCCESS);
        let (status, _) = main(&mut env, &["gs='git status'".to_string()]);
        assert_eq!(status, ExitStatus::SUCCESS);

        assert_eq!(env.aliases.get("ll"), Some("ls -la"));
        assert_eq!(env.aliases.get("gs"), Some("git status"));
        assert_eq!(listing(&env), "alias gs='git status'\nalias ll='ls -la'\n");
    }

    #[test]
    fn operands_without_equals_are_ignored() {
        let mut env = Env::new(ShellContext::new());
        let (status, _) = main(&mut env, &["ll".to_string()]);
        assert_eq!(status, ExitStatus::SUCCESS);
        assert!(env.aliases.is_empty());
    }
}
