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

//! Alias definitions and expansion
//!
//! An alias substitutes the head word of a single-stage command with the
//! words of its body. Expansion repeats while the new head is itself an
//! alias, with two safety rules taken together guaranteeing termination:
//!
//! - if the first word of a body equals the alias name, the alias is
//!   expanded once and expansion stops, so `alias ls='ls --color'` works;
//! - at most [`MAX_ALIAS_DEPTH`] rewrites are performed, which bounds
//!   indirect cycles such as `alias a='b'`, `alias b='a'`.

use minishell_syntax::lex::tokenize;
use std::collections::BTreeMap;

/// Upper bound on alias rewrite steps
pub const MAX_ALIAS_DEPTH: usize = 10;

/// Mapping from alias names to body strings
///
/// Iteration order is the lexical order of the names, which the `alias`
/// built-in relies on for its listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasSet {
    aliases: BTreeMap<String, String>,
}

impl AliasSet {
    /// Defines or replaces an alias.
    pub fn define(&mut self, name: String, body: String) {
        self.aliases.insert(name, body);
    }

    /// Removes an alias, returning true if it was defined.
    pub fn remove(&mut self, name: &str) -> bool {
        self.aliases.remove(name).is_some()
    }

    /// Returns the body of an alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Returns an iterator over `(name, body)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Returns true if no aliases are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Applies alias expansion to the head word of a command.
    ///
    /// The body is tokenized with the shell's own tokenizer; if it does not
    /// tokenize (say, an unbalanced quote was defined), it is split on
    /// whitespace instead. Empty and whitespace-only bodies leave the
    /// command untouched.
    #[must_use]
    pub fn expand(&self, words: &[String]) -> Vec<String> {
        let mut words = words.to_vec();
        for _ in 0..MAX_ALIAS_DEPTH {
            let Some(head) = words.first().cloned() else {
                return words;
            };
            let Some(body) = self.get(&head) else {
                return words;
            };

            let mut replacement = body_words(body);
            if replacement.is_empty() {
                return words;
            }
            let stop = replacement[0] == head;
            replacement.extend(words[1..].iter().cloned());
            words = replacement;
            if stop {
                return words;
            }
        }
        words
    }
}

fn body_words(body: &str) -> Vec<String> {
    match tokenize(body) {
        Ok(tokens) => tokens.into_iter().map(|t| t.text).collect(),
        Err(_) => body.split_whitespace().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_alias_no_change() {
        let aliases = AliasSet::default();
        assert_eq!(aliases.expand(&words(&["ls", "-l"])), words(&["ls", "-l"]));
    }

    #[test]
    fn simple_expansion_keeps_arguments() {
        let mut aliases = AliasSet::default();
        aliases.define("ll".to_string(), "ls -la".to_string());
        assert_eq!(
            aliases.expand(&words(&["ll", "/"])),
            words(&["ls", "-la", "/"])
        );
    }

    #[test]
    fn self_reference_expands_once() {
        let mut aliases = AliasSet::default();
        aliases.define("ls".to_string(), "ls --color=auto".to_string());
        assert_eq!(
            aliases.expand(&words(&["ls", "/tmp"])),
            words(&["ls", "--color=auto", "/tmp"])
        );
    }

    #[test]
    fn chained_aliases_follow_to_the_end() {
        let mut aliases = AliasSet::default();
        aliases.define("l".to_string(), "ll".to_string());
        aliases.define("ll".to_string(), "ls -la".to_string());
        assert_eq!(aliases.expand(&words(&["l"])), words(&["ls", "-la"]));
    }

    #[test]
    fn indirect_recursion_terminates() {
        let mut aliases = AliasSet::default();
        aliases.define("a".to_string(), "b".to_string());
        aliases.define("b".to_string(), "a".to_string());
        // The depth cap turns the cycle into a finite rewrite.
        let expanded = aliases.expand(&words(&["a", "x"]));
        assert_eq!(expanded.last().map(String::as_str), Some("x"));
        assert!(matches!(expanded[0].as_str(), "a" | "b"));
    }

    #[test]
    fn quoted_body_words_stay_together() {
        let mut aliases = AliasSet::default();
        aliases.define("greet".to_string(), "echo 'hello world'".to_string());
        assert_eq!(
            aliases.expand(&words(&["greet"])),
            words(&["echo", "hello world"])
        );
    }

    #[test]
    fn blank_body_is_ignored() {
        let mut aliases = AliasSet::default();
        aliases.define("nop".to_string(), "   ".to_string());
        assert_eq!(aliases.expand(&words(&["nop"])), words(&["nop"]));
    }

    #[test]
    fn listing_is_sorted_by_name() {
        let mut aliases = AliasSet::default();
        aliases.define("zz".to_string(), "true".to_string());
        aliases.define("aa".to_string(), "false".to_string());
        let names: Vec<&str> = aliases.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["aa", "zz"]);
    }
}
