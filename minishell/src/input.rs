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

//! Line input
//!
//! The read-eval loop only needs `read_line(prompt) -> Option<String>`.
//! On a terminal that is backed by a rustyline editor with history; when
//! the standard input is a pipe or file the lines are read directly and the
//! prompt is suppressed.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;

/// Source of input lines for the read-eval loop
pub enum LineReader {
    /// Line editor with history, for terminals
    Editor(Box<DefaultEditor>),
    /// Plain buffered reads, for scripts piped in
    Plain(std::io::BufReader<std::io::Stdin>),
}

impl LineReader {
    /// Creates a reader appropriate for the kind of standard input.
    pub fn new(interactive: bool) -> Self {
        if interactive {
            if let Ok(editor) = DefaultEditor::new() {
                return LineReader::Editor(Box::new(editor));
            }
        }
        LineReader::Plain(std::io::BufReader::new(std::io::stdin()))
    }

    /// Reads one line, returning `None` at end of input.
    ///
    /// An interrupted read (Ctrl-C at the prompt) yields an empty line so
    /// the loop can show a fresh prompt.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self {
            LineReader::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    Some(line)
                }
                Err(ReadlineError::Interrupted) => Some(String::new()),
                Err(_) => None,
            },
            LineReader::Plain(reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => None,
                    Ok(_) => Some(line),
                }
            }
        }
    }
}
