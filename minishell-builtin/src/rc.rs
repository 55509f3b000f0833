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

//! Restricted rc-line evaluator
//!
//! Lines of `~/.minishellrc` and of files read by the `source` built-in do
//! not go through the full shell pipeline. [`eval_line`] understands exactly
//! four directives plus `#` comments:
//!
//! - `alias NAME=BODY` defines an alias;
//! - `export NAME=VALUE` sets an environment entry;
//! - `echo TEXT` prints the rest of the line verbatim;
//! - `setprompt PROMPT` sets `MINISHELL_PROMPT`, which overrides the
//!   prompt builder.
//!
//! Anything else is silently ignored.

use minishell_env::Env;

/// Evaluates one rc-file line.
pub fn eval_line(env: &mut Env, line: &str) {
    let line = match line.find('#') {
        Some(comment) => &line[..comment],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    if let Some(rest) = line.strip_prefix("alias ") {
        if let Some((name, body)) = rest.split_once('=') {
            let name = name.trim();
            if !name.is_empty() {
                env.aliases
                    .define(name.to_string(), unquote(body.trim()).to_string());
            }
        }
    } else if let Some(rest) = line.strip_prefix("export ") {
        if let Some((name, value)) = rest.split_once('=') {
            let name = name.trim();
            if !name.is_empty() {
                std::env::set_var(name, value.trim());
            }
        }
    } else if let Some(rest) = line.strip_prefix("echo ") {
        println!("{rest}");
    } else if let Some(rest) = line.strip_prefix("setprompt ") {
        std::env::set_var("MINISHELL_PROMPT", unquote(rest.trim()));
    }
}

/// Strips one layer of matching surrounding quotes.
pub(crate) fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            return &text[1..text.len() - 1];
        }
    }
    text
}
