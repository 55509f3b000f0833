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

//! Unalias built-in: removes an alias definition. Removing a name that was
//! never defined is not an error.

use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use std::ops::ControlFlow::Continue;

/// Entry point of the `unalias` built-in
pub fn main(env: &mut Env, args: &[String]) -> crate::Result {
    if let Some(name) = args.first() {
        env.aliases.remove(name);
    }
    (ExitStatus::SUCCESS, Continue(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minishell_env::context::ShellContext;

    #[test]
    fn removes_only_the_named_alias() {
        let mut env = Env::new(ShellContext::new());
        env.aliases.define("a".to_string(), "b".to_string());
        env.aliases.define("c".to_string(), "d".to_string());

        let (status, _) = main(&mut env, &["a".to_string()]);
        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(env.aliases.get("a"), None);
        assert_eq!(env.aliases.get("c"), Some("d"));

        // A second removal of the same name still succeeds.
        let (status, _) = main(&mut env, &["a".to_string()]);
        assert_eq!(status, ExitStatus::SUCCESS);
    }
}
