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

//! Process-group and terminal ownership
//!
//! [`ShellContext`] captures the shell's own process group once at startup
//! and is the only place allowed to hand the controlling terminal to a job
//! and take it back. Keeping both `tcsetpgrp` call sites here is what makes
//! the terminal-return invariant checkable: after any foreground pipeline,
//! [`reclaim_terminal`](ShellContext::reclaim_terminal) has run before the
//! next prompt is read.
//!
//! When the standard input is not a terminal (scripts piped in, `-c` mode),
//! every terminal operation is a no-op but process groups are still
//! assigned.

use nix::libc::STDIN_FILENO;
use nix::sys::termios::tcgetattr;
use nix::sys::termios::tcsetattr;
use nix::sys::termios::SetArg;
use nix::sys::termios::Termios;
use nix::unistd::getpgrp;
use nix::unistd::isatty;
use nix::unistd::setpgid;
use nix::unistd::tcsetpgrp;
use nix::unistd::Pid;

/// Shell-wide process and terminal state
///
/// Initialized once before the read-eval loop and torn down when the shell
/// exits.
#[derive(Clone, Debug)]
pub struct ShellContext {
    /// Process group the shell itself runs in
    pub shell_pgid: Pid,

    /// Whether the standard input is a terminal
    interactive: bool,

    /// Terminal modes captured at startup, restored after foreground jobs
    saved_modes: Option<Termios>,
}

impl ShellContext {
    /// Captures the shell's process group and terminal state.
    ///
    /// Puts the shell into its own process group, remembers the group ID,
    /// and, when the standard input is a terminal, saves the terminal modes
    /// and makes the shell the foreground process group.
    pub fn new() -> Self {
        // May fail with EPERM if the shell is a session leader already;
        // getpgrp below reports whatever group we ended up in.
        let _ = setpgid(Pid::from_raw(0), Pid::from_raw(0));
        let shell_pgid = getpgrp();

        let interactive = isatty(STDIN_FILENO).unwrap_or(false);
        let saved_modes = if interactive {
            tcgetattr(STDIN_FILENO).ok()
        } else {
            None
        };
        let context = ShellContext {
            shell_pgid,
            interactive,
            saved_modes,
        };
        context.reclaim_terminal();
        context
    }

    /// Returns true if the standard input is a terminal.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Makes `pgid` the foreground process group of the terminal.
    ///
    /// No-op in a non-interactive shell.
    pub fn give_terminal_to(&self, pgid: Pid) {
        if self.interactive {
            let _ = tcsetpgrp(STDIN_FILENO, pgid);
        }
    }

    /// Takes the terminal back for the shell.
    ///
    /// Also restores the terminal modes saved at startup, so a job that died
    /// with the terminal in a raw state does not corrupt the prompt. No-op
    /// in a non-interactive shell.
    pub fn reclaim_terminal(&self) {
        if self.interactive {
            let _ = tcsetpgrp(STDIN_FILENO, self.shell_pgid);
            if let Some(modes) = &self.saved_modes {
                let _ = tcsetattr(STDIN_FILENO, SetArg::TCSADRAIN, modes);
            }
        }
    }
}
