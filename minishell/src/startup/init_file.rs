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

//! Loading of `~/.minishellrc`
//!
//! The file is read once at interactive startup and evaluated line by line
//! by the restricted [rc evaluator](minishell_builtin::rc). A missing or
//! unreadable file is not an error.

use minishell_env::system;
use minishell_env::Env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

/// Name of the init file, relative to the home directory
pub const RC_FILE_NAME: &str = ".minishellrc";

/// Reads the init file into the environment, if there is one.
pub fn load_rc(env: &mut Env) {
    let path = system::home_dir().join(RC_FILE_NAME);
    let Ok(file) = File::open(path) else {
        return;
    };
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => minishell_builtin::rc::eval_line(env, &line),
            Err(_) => break,
        }
    }
}
