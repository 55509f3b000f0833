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

//! Parsed command types
//!
//! A [`Pipeline`] is what one input line parses and expands to: a non-empty
//! ordered sequence of [`Stage`]s plus a background flag. The `Display`
//! implementations reproduce the human-readable command line used in job
//! reports, with words joined by single spaces and stages joined by `" | "`.

use crate::redir::Redir;
use itertools::Itertools;
use std::fmt::Display;
use std::fmt::Formatter;

/// One command of a pipeline
///
/// After redirection parsing, `words` contains no redirection operator
/// words.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stage {
    /// Command name and arguments, in order, fully expanded
    pub words: Vec<String>,

    /// Redirections applied to this stage
    pub redir: Redir,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.words.iter().format(" "))
    }
}

/// Parsed and expanded input line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pipeline {
    /// The stages, connected head to tail; never empty
    pub stages: Vec<Stage>,

    /// Whether the pipeline runs without the terminal and without waiting
    pub background: bool,
}

impl Display for Pipeline {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.stages.iter().format(" | "))
    }
}
