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

//! Redirection parser
//!
//! [`parse_redirections`] pulls the `<`, `>` and `>>` operators and their
//! operand paths out of a stage's word list. Each operator consumes the next
//! word as its operand; when an operator of the same kind appears more than
//! once, the last one wins.
//!
//! Redirection operators are plain words here, so they must have been
//! separated by whitespace on the command line. A word that *starts* with a
//! redirection character without being one of the three operators (such as
//! `<<` or `>out`) is rejected as an unknown operator rather than passed to
//! the command as an argument.

use crate::ParseError;

/// Redirections of one pipeline stage
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Redir {
    /// Path opened for reading on the standard input (`<`)
    pub input: Option<String>,

    /// Path opened for writing on the standard output (`>` or `>>`)
    pub output: Option<String>,

    /// Whether the output is appended to (`>>`) instead of truncated (`>`)
    pub append: bool,
}

/// Extracts redirections from a word list.
///
/// Returns the remaining words and the parsed [`Redir`]. After a successful
/// parse the word list contains none of the operator words.
pub fn parse_redirections(words: Vec<String>) -> Result<(Vec<String>, Redir), ParseError> {
    let mut clean = Vec::with_capacity(words.len());
    let mut redir = Redir::default();

    let mut words = words.into_iter();
    while let Some(word) = words.next() {
        match word.as_str() {
            "<" => {
                redir.input = Some(words.next().ok_or(ParseError::RedirWithoutOperand)?);
            }
            ">" => {
                redir.output = Some(words.next().ok_or(ParseError::RedirWithoutOperand)?);
                redir.append = false;
            }
            ">>" => {
                redir.output = Some(words.next().ok_or(ParseError::RedirWithoutOperand)?);
                redir.append = true;
            }
            _ if word.starts_with('<') || word.starts_with('>') => {
                return Err(ParseError::UnknownOperator(word));
            }
            _ => clean.push(word),
        }
    }

    Ok((clean, redir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_redirections() {
        let (clean, redir) = parse_redirections(words(&["ls", "-la"])).unwrap();
        assert_eq!(clean, ["ls", "-la"]);
        assert_eq!(redir, Redir::default());
    }

    #[test]
    fn input_redirection() {
        let (clean, redir) = parse_redirections(words(&["wc", "-l", "<", "notes"])).unwrap();
        assert_eq!(clean, ["wc", "-l"]);
        assert_eq!(redir.input.as_deref(), Some("notes"));
        assert_eq!(redir.output, None);
    }

    #[test]
    fn output_redirection() {
        let (clean, redir) = parse_redirections(words(&["echo", "hi", ">", "out"])).unwrap();
        assert_eq!(clean, ["echo", "hi"]);
        assert_eq!(redir.output.as_deref(), Some("out"));
        assert!(!redir.append);
    }

    #[test]
    fn append_redirection() {
        let (_, redir) = parse_redirections(words(&["echo", "hi", ">>", "log"])).unwrap();
        assert_eq!(redir.output.as_deref(), Some("log"));
        assert!(redir.append);
    }

    #[test]
    fn last_redirection_of_a_kind_wins() {
        let (clean, redir) =
            parse_redirections(words(&["cat", "<", "a", "<", "b", ">", "x", ">>", "y"])).unwrap();
        assert_eq!(clean, ["cat"]);
        assert_eq!(redir.input.as_deref(), Some("b"));
        assert_eq!(redir.output.as_deref(), Some("y"));
        assert!(redir.append);
    }

    #[test]
    fn no_operator_words_remain() {
        let (clean, _) =
            parse_redirections(words(&["cat", "<", "a", ">", "b", "arg"])).unwrap();
        assert!(clean.iter().all(|w| w != "<" && w != ">" && w != ">>"));
        assert_eq!(clean, ["cat", "arg"]);
    }

    #[test]
    fn missing_operand() {
        assert_eq!(
            parse_redirections(words(&["echo", ">"])),
            Err(ParseError::RedirWithoutOperand)
        );
        assert_eq!(
            parse_redirections(words(&["cat", "<"])),
            Err(ParseError::RedirWithoutOperand)
        );
    }

    #[test]
    fn unknown_operators_are_rejected() {
        assert_eq!(
            parse_redirections(words(&["cat", "<<<no-heredoc"])),
            Err(ParseError::UnknownOperator("<<<no-heredoc".to_string()))
        );
        assert_eq!(
            parse_redirections(words(&["cat", "<<", "eof"])),
            Err(ParseError::UnknownOperator("<<".to_string()))
        );
        assert_eq!(
            parse_redirections(words(&["echo", ">out"])),
            Err(ParseError::UnknownOperator(">out".to_string()))
        );
    }
}
