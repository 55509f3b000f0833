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

//! Signal dispositions of the shell and its children
//!
//! The shell ignores the job-control signals that would stop it when it
//! touches the terminal from the background, and catches `SIGCHLD` with a
//! handler that does nothing but raise a flag in an atomic. The read-eval
//! loop polls the flag with [`take_sigchld`] at safe points and drains
//! `waitpid` there; the job table is never touched from signal context.
//!
//! Child processes must not inherit any of this: [`restore_default_dispositions`]
//! is called between `fork` and `execvp` to give every child the default
//! handling of the five terminal-related signals.

use nix::sys::signal::sigaction;
use nix::sys::signal::SaFlags;
use nix::sys::signal::SigAction;
use nix::sys::signal::SigHandler;
use nix::sys::signal::SigSet;
use nix::sys::signal::Signal;
use std::os::raw::c_int;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Signals restored to their default disposition in every child
pub const CHILD_DEFAULT_SIGNALS: [Signal; 5] = [
    Signal::SIGINT,
    Signal::SIGTSTP,
    Signal::SIGQUIT,
    Signal::SIGTTIN,
    Signal::SIGTTOU,
];

static SIGCHLD_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Signal catching function
extern "C" fn catch_sigchld(_signal: c_int) {
    // Only async-signal-safe operations are allowed here; storing to an
    // atomic is one.
    SIGCHLD_RECEIVED.store(true, Ordering::Relaxed);
}

/// Installs the `SIGCHLD` handler that raises the status-change flag.
pub fn install_sigchld_handler() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(catch_sigchld),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    // SAFETY: catch_sigchld only stores to an atomic.
    unsafe { sigaction(Signal::SIGCHLD, &action) }?;
    Ok(())
}

/// Consumes the flag raised by the `SIGCHLD` handler.
///
/// Returns true if at least one `SIGCHLD` was delivered since the last call.
pub fn take_sigchld() -> bool {
    SIGCHLD_RECEIVED.swap(false, Ordering::Relaxed)
}

/// Sets the shell's own signal dispositions.
///
/// `SIGTTIN` and `SIGTTOU` are always ignored so the shell can manage the
/// terminal from the background. In an interactive shell `SIGINT` and
/// `SIGQUIT` are ignored as well; keyboard interrupts are for the foreground
/// job, never for the shell itself.
pub fn adopt_shell_dispositions(interactive: bool) {
    let mut ignored = vec![Signal::SIGTTIN, Signal::SIGTTOU];
    if interactive {
        ignored.push(Signal::SIGINT);
        ignored.push(Signal::SIGQUIT);
    }
    for signal in ignored {
        // SAFETY: setting a disposition to SIG_IGN involves no handler code.
        let _ = unsafe { nix::sys::signal::signal(signal, SigHandler::SigIgn) };
    }
}

/// Restores the default disposition of the terminal-related signals.
///
/// Called in the child between `fork` and `execvp`.
pub fn restore_default_dispositions() {
    for signal in CHILD_DEFAULT_SIGNALS {
        // SAFETY: setting a disposition to SIG_DFL involves no handler code.
        let _ = unsafe { nix::sys::signal::signal(signal, SigHandler::SigDfl) };
    }
}
