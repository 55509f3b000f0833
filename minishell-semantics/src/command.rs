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

//! Command line front end
//!
//! [`parse_command_line`] runs the whole pipeline of parsing passes for one
//! input line. Per stage, expansion happens strictly before redirection
//! parsing, so a redirection operand can come out of a variable but a
//! redirection operator cannot appear glued to its path.

use crate::expansion::expand_token;
use minishell_syntax::lex::tokenize;
use minishell_syntax::redir::parse_redirections;
use minishell_syntax::split::split_line;
use minishell_syntax::syntax::Pipeline;
use minishell_syntax::syntax::Stage;
use minishell_syntax::ParseError;

/// Parses and expands one input line into a pipeline.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command_line(line: &str) -> Result<Option<Pipeline>, ParseError> {
    let command = split_line(line)?;
    if command.stages.is_empty() {
        return Ok(None);
    }

    let mut stages = Vec::with_capacity(command.stages.len());
    for raw_stage in &command.stages {
        let tokens = tokenize(raw_stage)?;
        let mut words = Vec::with_capacity(tokens.len());
        for token in &tokens {
            words.extend(expand_token(token));
        }
        let (words, redir) = parse_redirections(words)?;
        stages.push(Stage { words, redir });
    }

    Ok(Some(Pipeline {
        stages,
        background: command.background,
    }))
}
