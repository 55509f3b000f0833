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

//! Syntax layer of minishell
//!
//! This crate turns one line of shell input into the data the executor
//! consumes. It is purely textual: no word expansion and no system calls
//! happen here.
//!
//! The parsing of a line proceeds in three passes:
//!
//! 1. [`split::split_line`] cuts the line into pipeline stages at unquoted
//!    `|` characters and detects a trailing `&`.
//! 2. [`lex::tokenize`] splits one stage into words, resolving quoting and
//!    backslash escapes.
//! 3. [`redir::parse_redirections`] extracts `<`, `>` and `>>` operators and
//!    their operands from the word list.
//!
//! The [`syntax`] module defines the resulting [`Stage`](syntax::Stage) and
//! [`Pipeline`](syntax::Pipeline) types.

pub mod lex;
pub mod redir;
pub mod split;
pub mod syntax;

use thiserror::Error;

/// Error in parsing a command line
///
/// Any of these discards the whole input line. The read-eval loop reports the
/// error on the standard error and sets the last exit status to 2.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The line ended inside a single- or double-quoted string.
    #[error("unterminated quote")]
    UnterminatedQuote,

    /// A `|` was not preceded or followed by a command.
    #[error("empty pipeline stage")]
    EmptyStage,

    /// A redirection operator was not followed by a file name.
    #[error("redirection without operand")]
    RedirWithoutOperand,

    /// A word started like a redirection but is not `<`, `>` or `>>`.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}
