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

//! Pipeline stage splitter
//!
//! [`split_line`] cuts an input line into the raw text of its pipeline
//! stages at unquoted `|` characters and strips a trailing unquoted `&`,
//! which marks the pipeline as a background job.
//!
//! Only `'` and `"` quoting is tracked here; backslash escapes are resolved
//! later by the [tokenizer](crate::lex). The stage texts are returned
//! untrimmed apart from the surrounding whitespace of the whole line.

use crate::ParseError;

/// Result of splitting one input line
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineCommand {
    /// Raw text of each pipeline stage, in order
    ///
    /// Empty if the line was blank.
    pub stages: Vec<String>,

    /// Whether the line ended with an unquoted `&`
    pub background: bool,
}

/// Splits a line on unquoted `|` and detects a trailing `&`.
///
/// A `|` at the start of the line, two `|` in a row, a whitespace-only stage
/// and a trailing `|` are all rejected with [`ParseError::EmptyStage`]. A
/// blank line yields an empty stage list.
pub fn split_line(line: &str) -> Result<LineCommand, ParseError> {
    let mut line = line.trim();

    // The `&` can only be the last character, so one quote-tracking scan of
    // everything before it decides whether it is quoted.
    let mut background = false;
    if line.ends_with('&') {
        let body = &line[..line.len() - 1];
        if !in_quotes_at_end(body) {
            background = true;
            line = body.trim_end();
        }
    }

    let mut stages = Vec::new();
    let mut current = String::new();
    let mut single = false;
    let mut double = false;
    for c in line.chars() {
        match c {
            '\'' if !double => {
                single = !single;
                current.push(c);
            }
            '"' if !single => {
                double = !double;
                current.push(c);
            }
            '|' if !single && !double => {
                if current.trim().is_empty() {
                    return Err(ParseError::EmptyStage);
                }
                stages.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if stages.is_empty() && current.trim().is_empty() {
        return Ok(LineCommand {
            stages: Vec::new(),
            background,
        });
    }
    if current.trim().is_empty() {
        // The line ended with a `|`.
        return Err(ParseError::EmptyStage);
    }
    stages.push(current);

    Ok(LineCommand { stages, background })
}

/// Returns true if a quote opened in `s` is still open at its end.
fn in_quotes_at_end(s: &str) -> bool {
    let mut single = false;
    let mut double = false;
    for c in s.chars() {
        match c {
            '\'' if !double => single = !single,
            '"' if !single => double = !double,
            _ => {}
        }
    }
    single || double
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(split_line(""), Ok(LineCommand::default()));
        assert_eq!(split_line("  \t "), Ok(LineCommand::default()));
    }

    #[test]
    fn single_stage() {
        let command = split_line("echo hello").unwrap();
        assert_eq!(command.stages, ["echo hello"]);
        assert!(!command.background);
    }

    #[test]
    fn multiple_stages() {
        let command = split_line("cat /etc/hosts | grep localhost | wc -l").unwrap();
        assert_eq!(
            command.stages,
            ["cat /etc/hosts ", " grep localhost ", " wc -l"]
        );
        assert!(!command.background);
    }

    #[test]
    fn quoted_bar_is_not_a_separator() {
        let command = split_line("echo 'a | b' | cat").unwrap();
        assert_eq!(command.stages, ["echo 'a | b' ", " cat"]);

        let command = split_line("echo \"x|y\"").unwrap();
        assert_eq!(command.stages, ["echo \"x|y\""]);
    }

    #[test]
    fn trailing_ampersand() {
        let command = split_line("sleep 10 &").unwrap();
        assert_eq!(command.stages, ["sleep 10"]);
        assert!(command.background);
    }

    #[test]
    fn quoted_ampersand_is_kept() {
        let command = split_line("echo 'a &'").unwrap();
        assert_eq!(command.stages, ["echo 'a &'"]);
        assert!(!command.background);
    }

    #[test]
    fn empty_stages_are_rejected() {
        assert_eq!(split_line("| cat"), Err(ParseError::EmptyStage));
        assert_eq!(split_line("ls || wc"), Err(ParseError::EmptyStage));
        assert_eq!(split_line("ls |  | wc"), Err(ParseError::EmptyStage));
        assert_eq!(split_line("ls |"), Err(ParseError::EmptyStage));
    }

    #[test]
    fn background_pipeline() {
        let command = split_line("du -s | sort -n &").unwrap();
        assert_eq!(command.stages, ["du -s ", " sort -n"]);
        assert!(command.background);
    }
}
