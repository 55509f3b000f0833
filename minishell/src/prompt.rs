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

//! Prompt rendering
//!
//! The prompt is `λ <user> <cwd-basename> → `, with a `λ git <branch> → `
//! segment appended inside a git work tree (the branch carries a `*` when
//! the tree is dirty). The arrow is green when the last pipeline succeeded
//! and red otherwise. Setting `MINISHELL_PROMPT` (typically via the
//! `setprompt` rc directive) replaces the whole prompt with a fixed string.

use crate::color;
use minishell_env::semantics::ExitStatus;
use std::process::Command;
use std::process::Stdio;

/// Builds the prompt for the next input line.
#[must_use]
pub fn build_prompt(last_status: ExitStatus) -> String {
    if let Ok(prompt) = std::env::var("MINISHELL_PROMPT") {
        if !prompt.is_empty() {
            return prompt;
        }
    }

    let cwd = current_dir_basename();
    let user = std::env::var("USER").unwrap_or_else(|_| "user".to_string());
    let branch = git_branch();

    if !color::enabled() {
        let mut prompt = format!("λ {user} {cwd} → ");
        if let Some(branch) = branch {
            prompt.push_str(&format!("λ git {branch} → "));
        }
        return prompt;
    }

    let arrow_color = if last_status.is_successful() {
        color::FG_GREEN
    } else {
        color::FG_RED
    };
    let arrow = format!("{}{arrow_color} → {}", color::BOLD, color::RESET);

    let mut prompt = format!(
        "{bold}{cyan}λ{reset} {bold}{white}{user}{reset} {green}{cwd}{reset}{arrow}",
        bold = color::BOLD,
        cyan = color::FG_CYAN,
        white = color::FG_BWHITE,
        green = color::FG_GREEN,
        reset = color::RESET,
    );
    if let Some(branch) = branch {
        prompt.push_str(&format!(
            "{bold}{cyan}λ{reset} {magenta}git{reset} {yellow}{branch}{reset}{arrow}",
            bold = color::BOLD,
            cyan = color::FG_CYAN,
            magenta = color::FG_MAGENTA,
            yellow = color::FG_YELLOW,
            reset = color::RESET,
        ));
    }
    prompt
}

fn current_dir_basename() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                // The root directory has no file name.
                .or_else(|| Some(path.display().to_string()))
        })
        .unwrap_or_else(|| "?".to_string())
}

/// Returns the current git branch, with a `*` suffix when dirty.
fn git_branch() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() {
        return None;
    }

    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map(|status| !status.stdout.is_empty())
        .unwrap_or(false);

    Some(if dirty { format!("{branch}*") } else { branch })
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test, because the override variable is process-wide state.
    #[test]
    fn override_wins_and_default_mentions_the_user() {
        std::env::set_var("MINISHELL_PROMPT", "% ");
        assert_eq!(build_prompt(ExitStatus::SUCCESS), "% ");
        assert_eq!(build_prompt(ExitStatus::FAILURE), "% ");

        std::env::remove_var("MINISHELL_PROMPT");
        std::env::set_var("USER", "tester");
        let prompt = build_prompt(ExitStatus::SUCCESS);
        assert!(prompt.contains("tester"), "prompt was {prompt:?}");
        assert!(prompt.contains('λ'));
    }
}
