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

//! Word expansion
//!
//! [`expand_token`] turns one token into the final command words. The steps
//! run in a fixed order:
//!
//! 1. **Tilde**: a leading `~` followed by nothing or `/` becomes the home
//!    directory.
//! 2. **Command substitution**: text between backquotes or between `$(`
//!    and `)` is replaced by the output of running it through `/bin/sh -c`,
//!    with trailing line breaks stripped. An unterminated sequence is left
//!    as literal text.
//! 3. **Parameter expansion**: `$NAME` and `${NAME}` become the value of
//!    the environment variable (empty if unset); `$$` becomes the shell's
//!    process ID.
//! 4. **Globbing**: the result is matched against the file system; on at
//!    least one match the token fans out into the matching paths, otherwise
//!    it stays as is.
//!
//! Values substituted in steps 2 and 3 are *not* split into fields; only
//! globbing can turn one token into several words.

use minishell_env::system;
use nix::libc::STDOUT_FILENO;
use nix::unistd::ForkResult;
use std::ffi::CString;

pub use minishell_syntax::lex::Token;

/// Expands one token into zero or more words.
///
/// The result has exactly one element unless globbing found matches.
#[must_use]
pub fn expand_token(token: &Token) -> Vec<String> {
    let text = expand_tilde(&token.text);
    let text = expand_command_substitutions(&text);
    let text = expand_parameters(&text);
    expand_glob(&text)
}

fn expand_tilde(text: &str) -> String {
    let Some(rest) = text.strip_prefix('~') else {
        return text.to_string();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        // Named ~user forms are not supported; leave them alone.
        return text.to_string();
    }
    let mut expanded = system::home_dir().display().to_string();
    expanded.push_str(rest);
    expanded
}

fn expand_command_substitutions(text: &str) -> String {
    let mut out = String::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < text.len() {
        if bytes[i] == b'`' {
            if let Some(end) = text[i + 1..].find('`').map(|offset| i + 1 + offset) {
                out.push_str(&command_output(&text[i + 1..end]));
                i = end + 1;
                continue;
            }
        } else if bytes[i] == b'$' && text[i + 1..].starts_with('(') {
            if let Some(end) = text[i + 2..].find(')').map(|offset| i + 2 + offset) {
                out.push_str(&command_output(&text[i + 2..end]));
                i = end + 1;
                continue;
            }
        }
        let Some(c) = text[i..].chars().next() else {
            break;
        };
        out.push(c);
        i += c.len_utf8();
    }
    out
}

fn expand_parameters(text: &str) -> String {
    let mut out = String::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < text.len() {
        if bytes[i] == b'$' && i + 1 < text.len() {
            let next = bytes[i + 1];
            if next == b'$' {
                out.push_str(&nix::unistd::getpid().to_string());
                i += 2;
                continue;
            }
            if next == b'{' {
                if let Some(end) = text[i + 2..].find('}').map(|offset| i + 2 + offset) {
                    out.push_str(&variable_value(&text[i + 2..end]));
                    i = end + 1;
                    continue;
                }
                // No closing brace; keep the text literal.
            } else if is_name_start(next) {
                let mut end = i + 2;
                while end < text.len() && is_name_char(bytes[end]) {
                    end += 1;
                }
                out.push_str(&variable_value(&text[i + 1..end]));
                i = end;
                continue;
            }
        }
        let Some(c) = text[i..].chars().next() else {
            break;
        };
        out.push(c);
        i += c.len_utf8();
    }
    out
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn variable_value(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

fn expand_glob(text: &str) -> Vec<String> {
    match glob::glob(text) {
        Ok(paths) => {
            let matches: Vec<String> = paths
                .filter_map(Result::ok)
                .map(|path| path.display().to_string())
                .collect();
            if matches.is_empty() {
                // No matches expand to the literal token; this covers both
                // patterns that matched nothing and plain words.
                vec![text.to_string()]
            } else {
                matches
            }
        }
        Err(_) => vec![text.to_string()],
    }
}

/// Runs a command through `/bin/sh -c` and returns its standard output.
///
/// Trailing newlines and carriage returns are stripped. Failures to spawn or
/// read produce an empty string; the substitution never aborts the line.
fn command_output(command: &str) -> String {
    let Ok((reader, writer)) = nix::unistd::pipe() else {
        return String::new();
    };

    // SAFETY: the shell is single-threaded and the child branch only calls
    // async-signal-safe functions before exec.
    match unsafe { nix::unistd::fork() } {
        Err(_) => {
            let _ = system::close(reader);
            let _ = system::close(writer);
            String::new()
        }

        Ok(ForkResult::Child) => {
            let _ = system::dup2(writer, STDOUT_FILENO);
            let _ = system::close(reader);
            let _ = system::close(writer);
            if let (Ok(path), Ok(args)) = (
                CString::new("/bin/sh"),
                ["sh", "-c", command]
                    .iter()
                    .map(|arg| CString::new(*arg))
                    .collect::<Result<Vec<_>, _>>(),
            ) {
                let _ = nix::unistd::execv(&path, &args);
            }
            std::process::exit(127)
        }

        Ok(ForkResult::Parent { child }) => {
            let _ = system::close(writer);
            let mut output = Vec::new();
            let mut buffer = [0; 4096];
            while let Ok(count) = system::read(reader, &mut buffer) {
                if count == 0 {
                    break;
                }
                output.extend_from_slice(&buffer[..count]);
            }
            let _ = system::close(reader);
            let _ = system::waitpid(child, None);

            let mut output = String::from_utf8_lossy(&output).into_owned();
            while output.ends_with('\n') || output.ends_with('\r') {
                output.pop();
            }
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> Vec<String> {
        expand_token(&Token {
            text: text.to_string(),
        })
    }

    #[test]
    fn plain_word_is_unchanged() {
        assert_eq!(expand("no-expansion-here"), ["no-expansion-here"]);
    }

    #[test]
    fn tilde_alone_and_with_slash() {
        std::env::set_var("HOME", "/home/tester");
        assert_eq!(expand("~"), ["/home/tester"]);
        assert_eq!(expand("~/notes"), ["/home/tester/notes"]);
    }

    #[test]
    fn tilde_user_and_midword_tilde_are_literal() {
        assert_eq!(expand_tilde("~root"), "~root");
        assert_eq!(expand_tilde("a~b"), "a~b");
    }

    #[test]
    fn parameter_expansion() {
        std::env::set_var("MINISHELL_TEST_PARAM", "forty-two");
        assert_eq!(
            expand_parameters("x=$MINISHELL_TEST_PARAM."),
            "x=forty-two."
        );
        assert_eq!(
            expand_parameters("${MINISHELL_TEST_PARAM}!"),
            "forty-two!"
        );
    }

    #[test]
    fn undefined_variable_expands_to_nothing() {
        assert_eq!(expand_parameters("a${MINISHELL_TEST_UNSET_XYZ}b"), "ab");
        assert_eq!(expand_parameters("$MINISHELL_TEST_UNSET_XYZ"), "");
    }

    #[test]
    fn dollar_dollar_is_the_process_id() {
        assert_eq!(expand_parameters("$$"), std::process::id().to_string());
    }

    #[test]
    fn lone_dollar_is_literal() {
        assert_eq!(expand_parameters("$"), "$");
        assert_eq!(expand_parameters("a$ b"), "a$ b");
        assert_eq!(expand_parameters("$1"), "$1");
    }

    #[test]
    fn unterminated_brace_is_literal() {
        assert_eq!(expand_parameters("${OOPS"), "${OOPS");
    }

    #[test]
    fn glob_without_metacharacters_is_identity() {
        assert_eq!(
            expand_glob("surely-no-such-file-in-cwd"),
            ["surely-no-such-file-in-cwd"]
        );
    }

    #[test]
    fn glob_expands_to_sorted_matches() {
        let dir = std::env::temp_dir().join(format!("minishell-glob-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("b.txt"), "").unwrap();
        std::fs::write(dir.join("a.txt"), "").unwrap();
        std::fs::write(dir.join("c.log"), "").unwrap();

        let pattern = format!("{}/*.txt", dir.display());
        let expanded = expand_glob(&pattern);
        assert_eq!(
            expanded,
            [
                format!("{}/a.txt", dir.display()),
                format!("{}/b.txt", dir.display()),
            ]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unmatched_pattern_stays_literal() {
        assert_eq!(expand_glob("/no/such/dir/*.rs"), ["/no/such/dir/*.rs"]);
    }

    // Substitution that actually runs a command is covered by the `-c`
    // integration tests of the minishell binary; forking under the
    // multi-threaded test harness is not safe.

    #[test]
    fn text_without_substitutions_is_untouched() {
        assert_eq!(
            expand_command_substitutions("plain $VAR text"),
            "plain $VAR text"
        );
    }

    #[test]
    fn unterminated_substitution_is_literal() {
        assert_eq!(expand_command_substitutions("`echo x"), "`echo x");
        assert_eq!(expand_command_substitutions("$(echo x"), "$(echo x");
    }
}
