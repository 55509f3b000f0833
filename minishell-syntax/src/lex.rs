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

//! Word tokenizer
//!
//! [`tokenize`] splits one pipeline stage into words. The tokenizer is a
//! three-state machine over the characters of the input:
//!
//! - In the base state, unescaped whitespace ends the current word, `'` and
//!   `"` open a quoted region, and `\` appends the next character verbatim.
//! - Inside single quotes every character up to the closing `'` is literal,
//!   including backslashes and dollar signs.
//! - Inside double quotes, `\` escapes only `"`, `\`, `$` and `` ` ``; before
//!   any other character the backslash itself is kept.
//!
//! Quote characters are consumed, so the produced [`Token`]s carry the word
//! text with quoting already resolved. Expansion of the token text is the
//! business of the semantics layer, which does not see the quotes; this
//! matches the shell's behavior of expanding `$X` even when it was quoted.
//!
//! Input ending inside a quoted region is rejected with
//! [`ParseError::UnterminatedQuote`].

use crate::ParseError;

/// Single word produced by the tokenizer
///
/// The text has quotes stripped and escapes resolved. Tokens carry no type
/// tag; redirection operators are recognized positionally later by
/// [`parse_redirections`](crate::redir::parse_redirections).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// Literal text of the word
    pub text: String,
}

/// Tokenizer state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Base,
    InSingle,
    InDouble,
}

/// Splits a line into words, obeying quoting and backslash escapes.
///
/// Empty words are not produced; a quoted empty string (`''` or `""`)
/// standing alone yields no token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Base;

    let flush = |current: &mut String, tokens: &mut Vec<Token>| {
        if !current.is_empty() {
            tokens.push(Token {
                text: std::mem::take(current),
            });
        }
    };

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            State::Base => {
                if c.is_whitespace() {
                    flush(&mut current, &mut tokens);
                } else if c == '\'' {
                    state = State::InSingle;
                } else if c == '"' {
                    state = State::InDouble;
                } else if c == '\\' {
                    // A trailing backslash at end of input is dropped.
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                } else {
                    current.push(c);
                }
            }

            State::InSingle => {
                if c == '\'' {
                    state = State::Base;
                } else {
                    current.push(c);
                }
            }

            State::InDouble => {
                if c == '"' {
                    state = State::Base;
                } else if c == '\\' {
                    match chars.peek().copied() {
                        Some(next @ ('"' | '\\' | '$' | '`')) => {
                            current.push(next);
                            chars.next();
                        }
                        _ => current.push('\\'),
                    }
                } else {
                    current.push(c);
                }
            }
        }
    }

    if state != State::Base {
        return Err(ParseError::UnterminatedQuote);
    }

    flush(&mut current, &mut tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(texts(""), Vec::<String>::new());
        assert_eq!(texts("   \t "), Vec::<String>::new());
    }

    #[test]
    fn plain_words() {
        assert_eq!(texts("echo hello world"), ["echo", "hello", "world"]);
        assert_eq!(texts("  ls   -la\t/tmp "), ["ls", "-la", "/tmp"]);
    }

    #[test]
    fn single_quotes_are_literal() {
        assert_eq!(texts("echo 'a  b'"), ["echo", "a  b"]);
        assert_eq!(texts(r"echo '\$HOME `x`'"), ["echo", r"\$HOME `x`"]);
    }

    #[test]
    fn double_quotes_preserve_spaces() {
        assert_eq!(texts(r#"echo "a  b c""#), ["echo", "a  b c"]);
    }

    #[test]
    fn double_quote_escapes() {
        assert_eq!(texts(r#"echo "a\"b""#), ["echo", "a\"b"]);
        assert_eq!(texts(r#"echo "\$x \\ \`""#), ["echo", r"$x \ `"]);
        // A backslash before anything else stays.
        assert_eq!(texts(r#"echo "a\nb""#), ["echo", r"a\nb"]);
    }

    #[test]
    fn base_escapes() {
        assert_eq!(texts(r"echo a\ b"), ["echo", "a b"]);
        assert_eq!(texts(r"echo \'x\'"), ["echo", "'x'"]);
        // Trailing backslash is dropped silently.
        assert_eq!(texts(r"echo a\"), ["echo", "a"]);
    }

    #[test]
    fn quotes_join_words() {
        assert_eq!(texts(r#"a'b'c"d"e"#), ["abcde"]);
    }

    #[test]
    fn quoted_empty_string_yields_no_token() {
        assert_eq!(texts("''"), Vec::<String>::new());
        assert_eq!(texts(r#"echo "" x"#), ["echo", "x"]);
    }

    #[test]
    fn unterminated_quotes() {
        assert_eq!(tokenize("echo 'abc"), Err(ParseError::UnterminatedQuote));
        assert_eq!(tokenize("echo \"abc"), Err(ParseError::UnterminatedQuote));
        assert_eq!(tokenize("echo 'a\"b"), Err(ParseError::UnterminatedQuote));
    }

    #[test]
    fn end_state_is_base_for_balanced_input() {
        // Tokenizing then rejoining with single spaces is the identity for
        // unquoted words.
        let line = "cat /etc/hosts /etc/passwd";
        assert_eq!(texts(line).join(" "), line);
    }
}
